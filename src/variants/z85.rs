//! Z85 (ZeroMQ 32/Z85): the string-safe base-85 variant.
//!
//! No padding and no ignorable characters; inputs of any length are
//! accepted, with 1–3 leftover bytes handled by the tail path.

use std::sync::OnceLock;

use crate::engine;
use crate::errors::DecodeError;
use crate::lookup::LookupTable;
use crate::radix85::Radix85;
use crate::sink::Overflow;
use crate::variant::Variant;

const ALPHABET: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

#[derive(Debug, Clone, Copy)]
pub struct Z85;

impl Variant for Z85 {
    fn alphabet(&self) -> &[u8] {
        ALPHABET
    }

    fn lookup_table(&self) -> &LookupTable {
        static TABLE: OnceLock<LookupTable> = OnceLock::new();
        TABLE.get_or_init(|| LookupTable::build(self))
    }
}

pub fn encode(binary: &[u8]) -> String {
    engine::encode_to_string::<Radix85, _>(&Z85, binary)
}

pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    engine::decode_to_vec::<Radix85, _>(&Z85, encoded.as_ref())
}

pub fn encode_to_slice(binary: &[u8], output: &mut [u8]) -> Result<usize, Overflow> {
    engine::encode_to_slice::<Radix85, _>(&Z85, binary, output)
}

pub fn decode_to_slice(encoded: impl AsRef<[u8]>, output: &mut [u8]) -> Result<usize, DecodeError> {
    engine::decode_to_slice::<Radix85, _>(&Z85, encoded.as_ref(), output)
}

pub fn encoded_size(binary_size: usize) -> usize {
    engine::encoded_size::<Radix85, _>(&Z85, binary_size)
}

pub fn decoded_max_size(encoded_size: usize) -> usize {
    engine::decoded_max_size::<Radix85, _>(&Z85, encoded_size)
}
