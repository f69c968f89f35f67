use serde::Deserialize;

use crate::bitpack::Bitpack;
use crate::engine::{self, BlockCodec};
use crate::errors::{ConfigError, DecodeError};
use crate::radix85::Radix85;
use crate::variant::{CustomVariant, Variant};

/// Block family selector for runtime-configured codecs.
///
/// Each family fixes a block geometry and the alphabet size it expects;
/// the variant supplies the symbols and policy on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// 4 bytes to 5 symbols by radix-85 arithmetic
    Radix85,
    /// 3 bytes to 4 six-bit symbols
    Base64,
    /// 5 bytes to 8 five-bit symbols
    Base32,
    /// 1 byte to 2 four-bit symbols
    Hex,
}

impl Family {
    /// Alphabet size the family's variants must have.
    pub fn radix(self) -> usize {
        match self {
            Family::Radix85 => 85,
            Family::Base64 => 64,
            Family::Base32 => 32,
            Family::Hex => 16,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::Radix85 => "radix85",
            Family::Base64 => "base64",
            Family::Base32 => "base32",
            Family::Hex => "hex",
        }
    }

    pub fn binary_block_size(self) -> usize {
        match self {
            Family::Radix85 => Radix85::BINARY_BLOCK_SIZE,
            Family::Base64 => <Bitpack<3, 4>>::BINARY_BLOCK_SIZE,
            Family::Base32 => <Bitpack<5, 8>>::BINARY_BLOCK_SIZE,
            Family::Hex => <Bitpack<1, 2>>::BINARY_BLOCK_SIZE,
        }
    }

    pub fn encoded_block_size(self) -> usize {
        match self {
            Family::Radix85 => Radix85::ENCODED_BLOCK_SIZE,
            Family::Base64 => <Bitpack<3, 4>>::ENCODED_BLOCK_SIZE,
            Family::Base32 => <Bitpack<5, 8>>::ENCODED_BLOCK_SIZE,
            Family::Hex => <Bitpack<1, 2>>::ENCODED_BLOCK_SIZE,
        }
    }
}

/// A runtime codec: a block family paired with a validated variant
/// descriptor. This is the dynamic counterpart of the per-encoding
/// modules like [`z85`](crate::z85) and [`base64`](crate::base64), used
/// by the registry and the CLI.
#[derive(Debug, Clone)]
pub struct Codec {
    family: Family,
    variant: CustomVariant,
}

impl Codec {
    /// Pair a family with a variant descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the variant's alphabet size does not match
    /// the family's radix.
    pub fn new(family: Family, variant: CustomVariant) -> Result<Self, ConfigError> {
        if variant.alphabet_size() != family.radix() {
            return Err(ConfigError::AlphabetSize {
                expected: family.radix(),
                found: variant.alphabet_size(),
            });
        }
        Ok(Codec { family, variant })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn variant(&self) -> &CustomVariant {
        &self.variant
    }

    pub fn encode(&self, binary: &[u8]) -> String {
        match self.family {
            Family::Radix85 => engine::encode_to_string::<Radix85, _>(&self.variant, binary),
            Family::Base64 => engine::encode_to_string::<Bitpack<3, 4>, _>(&self.variant, binary),
            Family::Base32 => engine::encode_to_string::<Bitpack<5, 8>, _>(&self.variant, binary),
            Family::Hex => engine::encode_to_string::<Bitpack<1, 2>, _>(&self.variant, binary),
        }
    }

    pub fn decode(&self, encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
        let encoded = encoded.as_ref();
        match self.family {
            Family::Radix85 => engine::decode_to_vec::<Radix85, _>(&self.variant, encoded),
            Family::Base64 => engine::decode_to_vec::<Bitpack<3, 4>, _>(&self.variant, encoded),
            Family::Base32 => engine::decode_to_vec::<Bitpack<5, 8>, _>(&self.variant, encoded),
            Family::Hex => engine::decode_to_vec::<Bitpack<1, 2>, _>(&self.variant, encoded),
        }
    }

    pub fn encoded_size(&self, binary_size: usize) -> usize {
        match self.family {
            Family::Radix85 => engine::encoded_size::<Radix85, _>(&self.variant, binary_size),
            Family::Base64 => engine::encoded_size::<Bitpack<3, 4>, _>(&self.variant, binary_size),
            Family::Base32 => engine::encoded_size::<Bitpack<5, 8>, _>(&self.variant, binary_size),
            Family::Hex => engine::encoded_size::<Bitpack<1, 2>, _>(&self.variant, binary_size),
        }
    }

    pub fn decoded_max_size(&self, encoded_size: usize) -> usize {
        match self.family {
            Family::Radix85 => engine::decoded_max_size::<Radix85, _>(&self.variant, encoded_size),
            Family::Base64 => {
                engine::decoded_max_size::<Bitpack<3, 4>, _>(&self.variant, encoded_size)
            }
            Family::Base32 => {
                engine::decoded_max_size::<Bitpack<5, 8>, _>(&self.variant, encoded_size)
            }
            Family::Hex => engine::decoded_max_size::<Bitpack<1, 2>, _>(&self.variant, encoded_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_radix() {
        assert_eq!(Family::Radix85.radix(), 85);
        assert_eq!(Family::Base64.radix(), 64);
        assert_eq!(Family::Base32.radix(), 32);
        assert_eq!(Family::Hex.radix(), 16);
    }

    #[test]
    fn test_codec_rejects_mismatched_alphabet() {
        let variant = CustomVariant::new(b"0123456789abcdef").unwrap();
        let err = Codec::new(Family::Base64, variant).unwrap_err();
        assert_eq!(
            err,
            ConfigError::AlphabetSize {
                expected: 64,
                found: 16,
            }
        );
    }

    #[test]
    fn test_runtime_codec_round_trips() {
        let variant = CustomVariant::new(b"0123456789abcdef").unwrap();
        let codec = Codec::new(Family::Hex, variant).unwrap();
        let encoded = codec.encode(b"\xDE\xAD\xBE\xEF");
        assert_eq!(encoded, "deadbeef");
        assert_eq!(codec.decode(&encoded).unwrap(), b"\xDE\xAD\xBE\xEF");
    }
}
