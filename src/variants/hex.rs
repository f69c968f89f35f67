//! Base16. Encoding emits lowercase; decoding accepts either case.
//! [`HexUpper`] is the uppercase-emitting twin for use with the generic
//! engine entry points.

use std::sync::OnceLock;

use crate::bitpack::Bitpack;
use crate::engine;
use crate::errors::DecodeError;
use crate::lookup::LookupTable;
use crate::sink::Overflow;
use crate::variant::Variant;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

type Blocks = Bitpack<1, 2>;

#[derive(Debug, Clone, Copy)]
pub struct HexLower;

impl Variant for HexLower {
    fn alphabet(&self) -> &[u8] {
        LOWER
    }

    fn normalized_symbol(&self, symbol: u8) -> u8 {
        symbol.to_ascii_lowercase()
    }

    fn lookup_table(&self) -> &LookupTable {
        static TABLE: OnceLock<LookupTable> = OnceLock::new();
        TABLE.get_or_init(|| LookupTable::build(self))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HexUpper;

impl Variant for HexUpper {
    fn alphabet(&self) -> &[u8] {
        UPPER
    }

    fn normalized_symbol(&self, symbol: u8) -> u8 {
        symbol.to_ascii_uppercase()
    }

    fn lookup_table(&self) -> &LookupTable {
        static TABLE: OnceLock<LookupTable> = OnceLock::new();
        TABLE.get_or_init(|| LookupTable::build(self))
    }
}

pub fn encode(binary: &[u8]) -> String {
    engine::encode_to_string::<Blocks, _>(&HexLower, binary)
}

pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    engine::decode_to_vec::<Blocks, _>(&HexLower, encoded.as_ref())
}

pub fn encode_to_slice(binary: &[u8], output: &mut [u8]) -> Result<usize, Overflow> {
    engine::encode_to_slice::<Blocks, _>(&HexLower, binary, output)
}

pub fn decode_to_slice(encoded: impl AsRef<[u8]>, output: &mut [u8]) -> Result<usize, DecodeError> {
    engine::decode_to_slice::<Blocks, _>(&HexLower, encoded.as_ref(), output)
}

pub fn encoded_size(binary_size: usize) -> usize {
    engine::encoded_size::<Blocks, _>(&HexLower, binary_size)
}

pub fn decoded_max_size(encoded_size: usize) -> usize {
    engine::decoded_max_size::<Blocks, _>(&HexLower, encoded_size)
}
