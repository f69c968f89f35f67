//! RFC 4648 base64 with the standard alphabet and `=` padding.

use std::sync::OnceLock;

use crate::bitpack::Bitpack;
use crate::engine;
use crate::errors::DecodeError;
use crate::lookup::LookupTable;
use crate::sink::Overflow;
use crate::variant::Variant;

const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

type Blocks = Bitpack<3, 4>;

#[derive(Debug, Clone, Copy)]
pub struct Base64;

impl Variant for Base64 {
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
    engine::encode_to_string::<Blocks, _>(&Base64, binary)
}

pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    engine::decode_to_vec::<Blocks, _>(&Base64, encoded.as_ref())
}

pub fn encode_to_slice(binary: &[u8], output: &mut [u8]) -> Result<usize, Overflow> {
    engine::encode_to_slice::<Blocks, _>(&Base64, binary, output)
}

pub fn decode_to_slice(encoded: impl AsRef<[u8]>, output: &mut [u8]) -> Result<usize, DecodeError> {
    engine::decode_to_slice::<Blocks, _>(&Base64, encoded.as_ref(), output)
}

pub fn encoded_size(binary_size: usize) -> usize {
    engine::encoded_size::<Blocks, _>(&Base64, binary_size)
}

pub fn decoded_max_size(encoded_size: usize) -> usize {
    engine::decoded_max_size::<Blocks, _>(&Base64, encoded_size)
}
