//! The generic stream codec: block iteration for encoding, the
//! single-pass decode automaton, and the pure sizing arithmetic.
//!
//! The engine is parameterized twice: a [`BlockCodec`] supplies the block
//! geometry and the arithmetic that converts one block between bytes and
//! alphabet indices; a [`Variant`](crate::Variant) supplies the alphabet
//! and the padding/ignore/terminator policy. Everything here is
//! synchronous, runs to completion on the calling thread, and is linear
//! in the input length.

use crate::errors::DecodeError;
use crate::lookup::SymbolClass;
use crate::sink::{Overflow, Sink, SliceSink};
use crate::variant::Variant;

/// Largest encoded block size any block family may declare. Bounds the
/// pending-index buffer held on the stack during a decode call.
pub const MAX_ENCODED_BLOCK_SIZE: usize = 8;

/// A block family: the geometry and arithmetic converting one fixed-size
/// binary block to one fixed-size symbol block and back.
///
/// Implementations translate between bytes and alphabet *indices*; the
/// variant maps indices to concrete symbols. Partial ("tail") blocks are
/// always strictly smaller than a full block.
pub trait BlockCodec {
    /// Bytes per full binary block.
    const BINARY_BLOCK_SIZE: usize;
    /// Symbols per full encoded block.
    const ENCODED_BLOCK_SIZE: usize;
    /// Alphabet size this family expects from its variants.
    const RADIX: usize;

    /// Encoded symbol count for a tail of `bytes` leftover bytes,
    /// `1..BINARY_BLOCK_SIZE`.
    fn tail_symbols(bytes: usize) -> usize;

    /// Encode one full binary block.
    fn encode_block<V: Variant, S: Sink>(
        variant: &V,
        sink: &mut S,
        block: &[u8],
    ) -> Result<(), S::Error>;

    /// Encode a partial block plus any variant padding; returns the
    /// number of symbols written.
    fn encode_tail<V: Variant, S: Sink>(
        variant: &V,
        sink: &mut S,
        tail: &[u8],
    ) -> Result<usize, S::Error>;

    /// Decode one full block of alphabet indices. `position` is the
    /// input offset of the block's first symbol, for error reporting.
    fn decode_block<S: Sink>(sink: &mut S, indices: &[u8], position: usize) -> Result<(), DecodeError>
    where
        S::Error: Into<DecodeError>;

    /// Decode a partial block of alphabet indices; returns the number of
    /// bytes written.
    fn decode_tail<S: Sink>(sink: &mut S, indices: &[u8], position: usize) -> Result<usize, DecodeError>
    where
        S::Error: Into<DecodeError>;
}

/// Encode `binary` into `sink`, returning the number of symbols written.
///
/// Walks the input in full blocks, then hands at most one tail to the
/// block family. Output order is a deterministic function of input order;
/// nothing is buffered beyond one block. Never fails on binary input —
/// the only possible error is a fixed-capacity sink running out of room.
pub fn encode<C: BlockCodec, V: Variant, S: Sink>(
    variant: &V,
    sink: &mut S,
    binary: &[u8],
) -> Result<usize, S::Error> {
    debug_assert_eq!(variant.alphabet_size(), C::RADIX);

    let mut written = 0;
    let mut blocks = binary.chunks_exact(C::BINARY_BLOCK_SIZE);
    for block in blocks.by_ref() {
        C::encode_block(variant, sink, block)?;
        written += C::ENCODED_BLOCK_SIZE;
    }
    let tail = blocks.remainder();
    if !tail.is_empty() {
        written += C::encode_tail(variant, sink, tail)?;
    }
    Ok(written)
}

/// Decode `encoded` into `sink`, returning the number of bytes written.
///
/// A single pass over the input: ignorable characters are skipped, every
/// other byte is classified through the variant's lookup table, and each
/// full block of valid indices is decoded and committed to the sink the
/// moment it completes. A stop character (padding, EOF, or an invalid
/// byte) ends the scan; trailing padding is then consumed and the final
/// block length validated before the tail decoder runs.
///
/// Errors abort any further progress, but blocks decoded before the
/// error remain committed to the sink; callers needing atomicity should
/// buffer and commit after a successful return.
pub fn decode<C: BlockCodec, V: Variant, S: Sink>(
    variant: &V,
    sink: &mut S,
    encoded: &[u8],
) -> Result<usize, DecodeError>
where
    S::Error: Into<DecodeError>,
{
    const {
        assert!(C::ENCODED_BLOCK_SIZE <= MAX_ENCODED_BLOCK_SIZE);
        assert!(C::BINARY_BLOCK_SIZE >= 1 && C::ENCODED_BLOCK_SIZE >= 1);
    }
    debug_assert_eq!(variant.alphabet_size(), C::RADIX);

    let table = variant.lookup_table();
    let mut indices = [0u8; MAX_ENCODED_BLOCK_SIZE];
    let mut filled = 0usize;
    let mut block_start = 0usize;
    let mut last = SymbolClass::Eof;
    let mut written = 0usize;

    let mut pos = 0usize;
    while pos < encoded.len() {
        let byte = encoded[pos];
        if variant.should_ignore(byte) {
            pos += 1;
            continue;
        }
        last = table.classify(byte);
        if last.is_stop() {
            break;
        }
        if let SymbolClass::Valid(index) = last {
            if filled == 0 {
                block_start = pos;
            }
            indices[filled] = index;
            filled += 1;
            pos += 1;
            if filled == C::ENCODED_BLOCK_SIZE {
                C::decode_block(sink, &indices[..filled], block_start)?;
                written += C::BINARY_BLOCK_SIZE;
                filled = 0;
            }
        }
    }

    if matches!(last, SymbolClass::Invalid) {
        return Err(DecodeError::invalid_symbol(encoded[pos], pos));
    }

    let mut block_len = filled;
    if matches!(last, SymbolClass::Padding) {
        if filled == 0 {
            // The encoder must have omitted padding that would lead a block.
            return Err(DecodeError::invalid_padding(
                pos,
                "padding at the start of a block",
            ));
        }
        block_len += 1;
        pos += 1;
        while pos < encoded.len() {
            match table.classify(encoded[pos]) {
                SymbolClass::Eof => break,
                SymbolClass::Padding => {
                    block_len += 1;
                    if block_len > C::ENCODED_BLOCK_SIZE {
                        return Err(DecodeError::invalid_padding(
                            pos,
                            "more padding than fits one encoded block",
                        ));
                    }
                    pos += 1;
                }
                _ => {
                    return Err(DecodeError::invalid_padding(
                        pos,
                        "padding run interrupted before the end of input",
                    ));
                }
            }
        }
    }

    if block_len > 0 {
        if (variant.requires_padding() || matches!(last, SymbolClass::Padding))
            && block_len != C::ENCODED_BLOCK_SIZE
        {
            return Err(DecodeError::invalid_padding(
                pos,
                "last block is not a full encoded block",
            ));
        }
        assert!(
            filled < C::ENCODED_BLOCK_SIZE,
            "pending index buffer exceeded a full block"
        );
        written += C::decode_tail(sink, &indices[..filled], block_start)?;
    }
    Ok(written)
}

/// Maximum number of symbols `encode` writes for `binary_size` input
/// bytes. Exact for padded variants; pure arithmetic, no encoding
/// performed.
pub fn encoded_size<C: BlockCodec, V: Variant>(variant: &V, binary_size: usize) -> usize {
    if variant.generates_padding() {
        // Padded output is always a whole number of encoded blocks.
        binary_size.div_ceil(C::BINARY_BLOCK_SIZE) * C::ENCODED_BLOCK_SIZE
    } else {
        let whole = binary_size * C::ENCODED_BLOCK_SIZE / C::BINARY_BLOCK_SIZE;
        if (binary_size * C::ENCODED_BLOCK_SIZE) % C::BINARY_BLOCK_SIZE != 0 {
            whole + 1
        } else {
            whole
        }
    }
}

/// Upper bound on the bytes `decode` writes for `encoded_size` input
/// symbols. The exact count is whatever the tail decoder produces.
pub fn decoded_max_size<C: BlockCodec, V: Variant>(variant: &V, encoded_size: usize) -> usize {
    let full = encoded_size / C::ENCODED_BLOCK_SIZE * C::BINARY_BLOCK_SIZE;
    if variant.requires_padding() {
        full
    } else {
        full + (encoded_size % C::ENCODED_BLOCK_SIZE) * C::BINARY_BLOCK_SIZE / C::ENCODED_BLOCK_SIZE
    }
}

/// Encode into a freshly allocated `String`, pre-sized from
/// [`encoded_size`].
pub fn encode_to_string<C: BlockCodec, V: Variant>(variant: &V, binary: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_size::<C, V>(variant, binary.len()));
    match encode::<C, V, String>(variant, &mut out, binary) {
        Ok(_) => out,
        Err(never) => match never {},
    }
}

/// Decode into a freshly allocated `Vec<u8>`, pre-sized from
/// [`decoded_max_size`].
pub fn decode_to_vec<C: BlockCodec, V: Variant>(
    variant: &V,
    encoded: &[u8],
) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(decoded_max_size::<C, V>(variant, encoded.len()));
    decode::<C, V, Vec<u8>>(variant, &mut out, encoded)?;
    Ok(out)
}

/// Encode into a caller-provided slice; overflow is a reported error.
pub fn encode_to_slice<C: BlockCodec, V: Variant>(
    variant: &V,
    binary: &[u8],
    output: &mut [u8],
) -> Result<usize, Overflow> {
    let mut sink = SliceSink::new(output);
    encode::<C, V, _>(variant, &mut sink, binary)
}

/// Decode into a caller-provided slice; overflow is a reported error.
pub fn decode_to_slice<C: BlockCodec, V: Variant>(
    variant: &V,
    encoded: &[u8],
    output: &mut [u8],
) -> Result<usize, DecodeError> {
    let mut sink = SliceSink::new(output);
    decode::<C, V, _>(variant, &mut sink, encoded)
}
