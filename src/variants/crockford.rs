//! Crockford base32: case-insensitive, no padding, hyphens ignored.
//!
//! The alphabet drops `I`, `L`, `O`, and `U`; decoding reads `O` as `0`
//! and `I`/`L` as `1` in either case, so transcription slips still
//! produce the intended value. `U` stays invalid.

use std::sync::OnceLock;

use crate::bitpack::Bitpack;
use crate::engine;
use crate::errors::DecodeError;
use crate::lookup::LookupTable;
use crate::sink::Overflow;
use crate::variant::Variant;

const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

type Blocks = Bitpack<5, 8>;

#[derive(Debug, Clone, Copy)]
pub struct Crockford;

impl Variant for Crockford {
    fn alphabet(&self) -> &[u8] {
        ALPHABET
    }

    fn should_ignore(&self, symbol: u8) -> bool {
        symbol == b'-'
    }

    fn normalized_symbol(&self, symbol: u8) -> u8 {
        match symbol {
            b'O' | b'o' => b'0',
            b'I' | b'i' | b'L' | b'l' => b'1',
            _ => symbol.to_ascii_uppercase(),
        }
    }

    fn lookup_table(&self) -> &LookupTable {
        static TABLE: OnceLock<LookupTable> = OnceLock::new();
        TABLE.get_or_init(|| LookupTable::build(self))
    }
}

pub fn encode(binary: &[u8]) -> String {
    engine::encode_to_string::<Blocks, _>(&Crockford, binary)
}

pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    engine::decode_to_vec::<Blocks, _>(&Crockford, encoded.as_ref())
}

pub fn encode_to_slice(binary: &[u8], output: &mut [u8]) -> Result<usize, Overflow> {
    engine::encode_to_slice::<Blocks, _>(&Crockford, binary, output)
}

pub fn decode_to_slice(encoded: impl AsRef<[u8]>, output: &mut [u8]) -> Result<usize, DecodeError> {
    engine::decode_to_slice::<Blocks, _>(&Crockford, encoded.as_ref(), output)
}

pub fn encoded_size(binary_size: usize) -> usize {
    engine::encoded_size::<Blocks, _>(&Crockford, binary_size)
}

pub fn decoded_max_size(encoded_size: usize) -> usize {
    engine::decoded_max_size::<Blocks, _>(&Crockford, encoded_size)
}
