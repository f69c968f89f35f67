//! Generic streaming base-N codec engine.
//!
//! One block-transcoding core drives every encoding: a block family
//! ([`Radix85`] or [`Bitpack`]) supplies the geometry and arithmetic, a
//! [`Variant`] descriptor supplies the alphabet and padding policy.
//! Named codecs ([`z85`], [`base64`], [`base32`], [`crockford`],
//! [`hex`], ...) are thin instantiations; custom encodings plug in
//! through [`CustomVariant`] or the TOML-backed [`VariantsConfig`]
//! registry.

mod bitpack;
mod codec;
mod config;
pub mod engine;
mod errors;
mod lookup;
mod radix85;
mod sink;
mod streaming;
mod variant;
mod variants;

pub use bitpack::Bitpack;
pub use codec::{Codec, Family};
pub use config::{VariantConfig, VariantsConfig};
pub use errors::{ConfigError, DecodeError};
pub use lookup::{LookupTable, SymbolClass};
pub use radix85::Radix85;
pub use sink::{Overflow, Sink, SliceSink};
pub use streaming::{StreamError, StreamingDecoder, StreamingEncoder};
pub use variant::{CustomVariant, Variant};
pub use variants::crockford::Crockford;
pub use variants::hex::{HexLower, HexUpper};
pub use variants::z85::Z85;
pub use variants::{base32, base64, base64url, crockford, hex, z85};

pub fn encode(data: &[u8], codec: &Codec) -> String {
    codec.encode(data)
}

pub fn decode(encoded: &str, codec: &Codec) -> Result<Vec<u8>, DecodeError> {
    codec.decode(encoded)
}
