//! Fixed-width block families: `BIN` bytes map to `ENC` symbols of
//! `BIN * 8 / ENC` bits each, so the radix is a power of two and the
//! transcoding is pure shift/mask work. Base64 is `Bitpack<3, 4>`,
//! base32 is `Bitpack<5, 8>`, and hex is `Bitpack<1, 2>`.

use crate::engine::BlockCodec;
use crate::errors::DecodeError;
use crate::sink::Sink;
use crate::variant::Variant;

pub struct Bitpack<const BIN: usize, const ENC: usize>;

impl<const BIN: usize, const ENC: usize> Bitpack<BIN, ENC> {
    const BITS: usize = BIN * 8 / ENC;

    /// Pack a byte run into one value, high byte first.
    fn pack(bytes: &[u8]) -> u64 {
        bytes
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
    }

    /// Human-readable list of symbol counts a tail may have.
    fn expected_tail_counts() -> String {
        let counts: Vec<String> = (1..BIN).map(|b| Self::tail_symbols(b).to_string()).collect();
        match counts.as_slice() {
            [] => "full blocks only".to_string(),
            [one] => one.clone(),
            rest => format!(
                "{} or {}",
                rest[..rest.len() - 1].join(", "),
                rest[rest.len() - 1]
            ),
        }
    }
}

impl<const BIN: usize, const ENC: usize> BlockCodec for Bitpack<BIN, ENC> {
    const BINARY_BLOCK_SIZE: usize = BIN;
    const ENCODED_BLOCK_SIZE: usize = ENC;
    const RADIX: usize = 1 << (BIN * 8 / ENC);

    fn tail_symbols(bytes: usize) -> usize {
        assert!(bytes >= 1 && bytes < BIN, "tail must be shorter than a block");
        (bytes * 8).div_ceil(Self::BITS)
    }

    fn encode_block<V: Variant, S: Sink>(
        variant: &V,
        sink: &mut S,
        block: &[u8],
    ) -> Result<(), S::Error> {
        let value = Self::pack(block);
        let mask = (Self::RADIX - 1) as u64;
        for slot in (0..ENC).rev() {
            sink.put(variant.symbol(((value >> (slot * Self::BITS)) & mask) as usize))?;
        }
        Ok(())
    }

    fn encode_tail<V: Variant, S: Sink>(
        variant: &V,
        sink: &mut S,
        tail: &[u8],
    ) -> Result<usize, S::Error> {
        let symbols = Self::tail_symbols(tail.len());
        // Align the tail to the top of the block so symbol extraction
        // matches the full-block path; missing bytes read as zero.
        let value = Self::pack(tail) << ((BIN - tail.len()) * 8);
        let mask = (Self::RADIX - 1) as u64;
        for slot in (ENC - symbols..ENC).rev() {
            sink.put(variant.symbol(((value >> (slot * Self::BITS)) & mask) as usize))?;
        }
        let mut written = symbols;
        if variant.generates_padding() {
            if let Some(padding) = variant.padding_symbol() {
                for _ in symbols..ENC {
                    sink.put(padding)?;
                    written += 1;
                }
            }
        }
        Ok(written)
    }

    fn decode_block<S: Sink>(sink: &mut S, indices: &[u8], _position: usize) -> Result<(), DecodeError>
    where
        S::Error: Into<DecodeError>,
    {
        debug_assert_eq!(indices.len(), ENC);
        let value = indices
            .iter()
            .fold(0u64, |acc, &digit| (acc << Self::BITS) | u64::from(digit));
        for slot in (0..BIN).rev() {
            sink.put(((value >> (slot * 8)) & 0xFF) as u8).map_err(Into::into)?;
        }
        Ok(())
    }

    fn decode_tail<S: Sink>(sink: &mut S, indices: &[u8], _position: usize) -> Result<usize, DecodeError>
    where
        S::Error: Into<DecodeError>,
    {
        let bits = indices.len() * Self::BITS;
        let bytes = bits / 8;
        if bytes == 0 || Self::tail_symbols(bytes) != indices.len() {
            return Err(DecodeError::invalid_length(
                indices.len(),
                Self::expected_tail_counts(),
            ));
        }
        let value = indices
            .iter()
            .fold(0u64, |acc, &digit| (acc << Self::BITS) | u64::from(digit));
        // Trailing bits beyond the last whole byte are truncated.
        for slot in 0..bytes {
            sink.put(((value >> (bits - 8 * (slot + 1))) & 0xFF) as u8)
                .map_err(Into::into)?;
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::base64::Base64;

    type Base64Blocks = Bitpack<3, 4>;
    type Base32Blocks = Bitpack<5, 8>;
    type HexBlocks = Bitpack<1, 2>;

    #[test]
    fn test_radix_per_geometry() {
        assert_eq!(Base64Blocks::RADIX, 64);
        assert_eq!(Base32Blocks::RADIX, 32);
        assert_eq!(HexBlocks::RADIX, 16);
    }

    #[test]
    fn test_base64_block_encode() {
        let mut out = String::new();
        Base64Blocks::encode_block(&Base64, &mut out, b"Man").unwrap();
        assert_eq!(out, "TWFu");
    }

    #[test]
    fn test_base64_tail_emits_padding() {
        let mut out = String::new();
        let written = Base64Blocks::encode_tail(&Base64, &mut out, b"f").unwrap();
        assert_eq!(out, "Zg==");
        assert_eq!(written, 4);
    }

    #[test]
    fn test_tail_symbol_counts() {
        assert_eq!(Base64Blocks::tail_symbols(1), 2);
        assert_eq!(Base64Blocks::tail_symbols(2), 3);
        assert_eq!(Base32Blocks::tail_symbols(1), 2);
        assert_eq!(Base32Blocks::tail_symbols(2), 4);
        assert_eq!(Base32Blocks::tail_symbols(3), 5);
        assert_eq!(Base32Blocks::tail_symbols(4), 7);
    }

    #[test]
    fn test_impossible_tail_counts_are_rejected() {
        let mut out = Vec::new();
        let err = Base64Blocks::decode_tail(&mut out, &[0], 0).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidLength { symbols: 1, .. }));

        // 3 base32 symbols carry 15 bits: one byte plus leftovers, but a
        // one-byte tail encodes as 2 symbols, never 3.
        let err = Base32Blocks::decode_tail(&mut out, &[0, 0, 0], 0).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidLength { symbols: 3, .. }));
        assert!(err.to_string().contains("2, 4, 5 or 7"));

        let err = Base32Blocks::decode_tail(&mut out, &[0; 6], 0).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidLength { symbols: 6, .. }));
    }

    #[test]
    fn test_base64_tail_decode_truncates_leftover_bits() {
        // "Zg" carries 12 bits; only the top 8 survive.
        let mut out = Vec::new();
        let produced = Base64Blocks::decode_tail(&mut out, &[25, 32], 0).unwrap();
        assert_eq!(produced, 1);
        assert_eq!(out, b"f");
    }

    #[test]
    fn test_hex_never_has_tails() {
        let mut out = Vec::new();
        let err = HexBlocks::decode_tail(&mut out, &[5], 0).unwrap_err();
        assert!(err.to_string().contains("full blocks only"));
    }
}
