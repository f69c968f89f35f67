//! The 4-byte / 5-symbol variable-radix block family.
//!
//! Base-85 packs four bytes into one 32-bit value and emits five digits
//! by repeated division; non-power-of-two arithmetic, so genuine
//! division and modulo instead of shifts. Byte order is an explicit
//! big-endian composition (`u32::from_be_bytes`), never a memory
//! reinterpretation, so results are identical on every host.

use crate::engine::BlockCodec;
use crate::errors::DecodeError;
use crate::sink::Sink;
use crate::variant::Variant;

/// 85^4, 85^3, 85^2, 85^1, 85^0 — one divisor per output symbol.
const POWERS: [u32; 5] = [52_200_625, 614_125, 7_225, 85, 1];

pub struct Radix85;

impl BlockCodec for Radix85 {
    const BINARY_BLOCK_SIZE: usize = 4;
    const ENCODED_BLOCK_SIZE: usize = 5;
    const RADIX: usize = 85;

    fn tail_symbols(bytes: usize) -> usize {
        assert!(bytes >= 1 && bytes < 4, "tail must be 1..=3 bytes");
        bytes + 1
    }

    fn encode_block<V: Variant, S: Sink>(
        variant: &V,
        sink: &mut S,
        block: &[u8],
    ) -> Result<(), S::Error> {
        let value = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
        for power in POWERS {
            sink.put(variant.symbol(((value / power) % 85) as usize))?;
        }
        Ok(())
    }

    fn encode_tail<V: Variant, S: Sink>(
        variant: &V,
        sink: &mut S,
        tail: &[u8],
    ) -> Result<usize, S::Error> {
        let symbols = Self::tail_symbols(tail.len());
        let mut block = [0u8; 4];
        block[..tail.len()].copy_from_slice(tail);
        let value = u32::from_be_bytes(block);
        for &power in &POWERS[..symbols] {
            sink.put(variant.symbol(((value / power) % 85) as usize))?;
        }
        let mut written = symbols;
        if variant.generates_padding() {
            if let Some(padding) = variant.padding_symbol() {
                for _ in symbols..Self::ENCODED_BLOCK_SIZE {
                    sink.put(padding)?;
                    written += 1;
                }
            }
        }
        Ok(written)
    }

    fn decode_block<S: Sink>(sink: &mut S, indices: &[u8], position: usize) -> Result<(), DecodeError>
    where
        S::Error: Into<DecodeError>,
    {
        debug_assert_eq!(indices.len(), 5);
        let value = indices
            .iter()
            .fold(0u64, |acc, &digit| acc * 85 + u64::from(digit));
        // 85^5 - 1 > 2^32 - 1: five digits can name values no 4-byte
        // block produces.
        if value > u64::from(u32::MAX) {
            return Err(DecodeError::block_overflow(position));
        }
        for byte in (value as u32).to_be_bytes() {
            sink.put(byte).map_err(Into::into)?;
        }
        Ok(())
    }

    fn decode_tail<S: Sink>(sink: &mut S, indices: &[u8], position: usize) -> Result<usize, DecodeError>
    where
        S::Error: Into<DecodeError>,
    {
        if indices.len() == 1 {
            return Err(DecodeError::invalid_length(
                1,
                "2, 3 or 4 symbols in the last base85 block",
            ));
        }
        debug_assert!(indices.len() >= 2 && indices.len() < 5);
        // Missing low-order digits read as the maximum digit (84), so the
        // truncating extraction below recovers the encoder's bytes exactly.
        let mut value = 0u64;
        for slot in 0..5 {
            let digit = indices.get(slot).copied().unwrap_or(84);
            value = value * 85 + u64::from(digit);
        }
        if value > u64::from(u32::MAX) {
            return Err(DecodeError::block_overflow(position));
        }
        let bytes = (value as u32).to_be_bytes();
        let produced = indices.len() - 1;
        for &byte in &bytes[..produced] {
            sink.put(byte).map_err(Into::into)?;
        }
        Ok(produced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::z85::Z85;

    #[test]
    fn test_block_packs_big_endian() {
        let mut out = String::new();
        Radix85::encode_block(&Z85, &mut out, &[0x86, 0x4F, 0xD2, 0x6F]).unwrap();
        assert_eq!(out, "Hello");
    }

    #[test]
    fn test_block_decode_inverts_encode() {
        let indices = [43u8, 14, 21, 21, 24];
        let mut out = Vec::new();
        Radix85::decode_block(&mut out, &indices, 0).unwrap();
        assert_eq!(out, [0x86, 0x4F, 0xD2, 0x6F]);
    }

    #[test]
    fn test_block_decode_rejects_overflow() {
        // All-maximum digits name 85^5 - 1, past the 32-bit range.
        let indices = [84u8; 5];
        let mut out = Vec::new();
        assert_eq!(
            Radix85::decode_block(&mut out, &indices, 7),
            Err(DecodeError::BlockOverflow { position: 7 })
        );
    }

    #[test]
    fn test_tail_symbol_counts() {
        assert_eq!(Radix85::tail_symbols(1), 2);
        assert_eq!(Radix85::tail_symbols(2), 3);
        assert_eq!(Radix85::tail_symbols(3), 4);
    }

    #[test]
    fn test_single_symbol_tail_is_an_error() {
        let mut out = Vec::new();
        let err = Radix85::decode_tail(&mut out, &[0], 0).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidLength { symbols: 1, .. }));
        assert!(err.to_string().contains("base85"));
    }

    #[test]
    fn test_tails_round_trip_every_byte_value() {
        for len in 1..=3usize {
            for fill in [0x00u8, 0x01, 0x7F, 0x86, 0xFE, 0xFF] {
                let tail = vec![fill; len];
                let mut encoded = String::new();
                Radix85::encode_tail(&Z85, &mut encoded, &tail).unwrap();
                assert_eq!(encoded.len(), len + 1);

                let indices: Vec<u8> = encoded
                    .bytes()
                    .map(|s| Z85.alphabet().iter().position(|&a| a == s).unwrap() as u8)
                    .collect();
                let mut decoded = Vec::new();
                let produced = Radix85::decode_tail(&mut decoded, &indices, 0).unwrap();
                assert_eq!(produced, len);
                assert_eq!(decoded, tail);
            }
        }
    }
}
