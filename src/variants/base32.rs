//! RFC 4648 base32 with the standard alphabet and `=` padding.

use std::sync::OnceLock;

use crate::bitpack::Bitpack;
use crate::engine;
use crate::errors::DecodeError;
use crate::lookup::LookupTable;
use crate::sink::Overflow;
use crate::variant::Variant;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

type Blocks = Bitpack<5, 8>;

#[derive(Debug, Clone, Copy)]
pub struct Base32;

impl Variant for Base32 {
    fn alphabet(&self) -> &[u8] {
        ALPHABET
    }

    fn generates_padding(&self) -> bool {
        true
    }

    fn requires_padding(&self) -> bool {
        true
    }

    fn padding_symbol(&self) -> Option<u8> {
        Some(b'=')
    }

    fn lookup_table(&self) -> &LookupTable {
        static TABLE: OnceLock<LookupTable> = OnceLock::new();
        TABLE.get_or_init(|| LookupTable::build(self))
    }
}

pub fn encode(binary: &[u8]) -> String {
    engine::encode_to_string::<Blocks, _>(&Base32, binary)
}

pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    engine::decode_to_vec::<Blocks, _>(&Base32, encoded.as_ref())
}

pub fn encode_to_slice(binary: &[u8], output: &mut [u8]) -> Result<usize, Overflow> {
    engine::encode_to_slice::<Blocks, _>(&Base32, binary, output)
}

pub fn decode_to_slice(encoded: impl AsRef<[u8]>, output: &mut [u8]) -> Result<usize, DecodeError> {
    engine::decode_to_slice::<Blocks, _>(&Base32, encoded.as_ref(), output)
}

pub fn encoded_size(binary_size: usize) -> usize {
    engine::encoded_size::<Blocks, _>(&Base32, binary_size)
}

pub fn decoded_max_size(encoded_size: usize) -> usize {
    engine::decoded_max_size::<Blocks, _>(&Base32, encoded_size)
}
