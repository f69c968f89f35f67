use std::fmt;

use crate::sink::Overflow;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character that is not an alphabet symbol,
    /// padding, an ignorable character, or an end-of-stream marker
    InvalidSymbol { symbol: u8, position: usize },
    /// Padding appeared where the variant's rules do not allow it
    InvalidPadding {
        position: usize,
        detail: &'static str,
    },
    /// The trailing symbol count cannot correspond to any byte count
    InvalidLength { symbols: usize, expected: String },
    /// An encoded block reconstructs to a value outside the 32-bit range
    BlockOverflow { position: usize },
    /// The fixed-capacity output buffer filled up before decoding finished
    BufferTooSmall,
}

impl DecodeError {
    /// Create an InvalidSymbol error for the byte at `position`.
    pub fn invalid_symbol(symbol: u8, position: usize) -> Self {
        DecodeError::InvalidSymbol { symbol, position }
    }

    pub fn invalid_padding(position: usize, detail: &'static str) -> Self {
        DecodeError::InvalidPadding { position, detail }
    }

    pub fn invalid_length(symbols: usize, expected: impl Into<String>) -> Self {
        DecodeError::InvalidLength {
            symbols,
            expected: expected.into(),
        }
    }

    pub fn block_overflow(position: usize) -> Self {
        DecodeError::BlockOverflow { position }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidSymbol { symbol, position } => {
                write!(
                    f,
                    "invalid character {} at position {}",
                    display_byte(*symbol),
                    position
                )
            }
            DecodeError::InvalidPadding { position, detail } => {
                write!(f, "invalid padding at position {}: {}", position, detail)
            }
            DecodeError::InvalidLength { symbols, expected } => {
                write!(
                    f,
                    "invalid number of trailing symbols: found {}, expected {}",
                    symbols, expected
                )
            }
            DecodeError::BlockOverflow { position } => {
                write!(
                    f,
                    "encoded block at position {} exceeds the 32-bit value range",
                    position
                )
            }
            DecodeError::BufferTooSmall => {
                write!(f, "output buffer too small for decoded data")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<Overflow> for DecodeError {
    fn from(_: Overflow) -> Self {
        DecodeError::BufferTooSmall
    }
}

impl From<std::convert::Infallible> for DecodeError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Errors raised while constructing a variant descriptor.
///
/// These indicate a misconfigured descriptor, not malformed input data,
/// and are reported at construction time rather than per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The alphabet has no symbols
    EmptyAlphabet,
    /// An alphabet, padding, ignore, or EOF symbol is outside ASCII
    NonAsciiSymbol { symbol: char },
    /// The same symbol appears twice in the alphabet
    DuplicateSymbol { symbol: char },
    /// The alphabet length does not match the block family's radix
    AlphabetSize { expected: usize, found: usize },
    /// The padding symbol also appears in the alphabet
    PaddingInAlphabet { symbol: char },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyAlphabet => write!(f, "alphabet cannot be empty"),
            ConfigError::NonAsciiSymbol { symbol } => {
                write!(f, "symbol '{}' is not ASCII", symbol.escape_default())
            }
            ConfigError::DuplicateSymbol { symbol } => {
                write!(f, "duplicate symbol '{}' in alphabet", symbol.escape_default())
            }
            ConfigError::AlphabetSize { expected, found } => {
                write!(
                    f,
                    "block family expects {} symbols, alphabet has {}",
                    expected, found
                )
            }
            ConfigError::PaddingInAlphabet { symbol } => {
                write!(
                    f,
                    "padding symbol '{}' also appears in the alphabet",
                    symbol.escape_default()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Render a raw input byte for error messages: quoted when printable,
/// hex otherwise.
fn display_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        format!("0x{:02x}", byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_symbol_display() {
        let err = DecodeError::invalid_symbol(b'$', 12);
        assert_eq!(err.to_string(), "invalid character '$' at position 12");

        let err = DecodeError::invalid_symbol(0x07, 0);
        assert_eq!(err.to_string(), "invalid character 0x07 at position 0");
    }

    #[test]
    fn test_invalid_length_display() {
        let err = DecodeError::invalid_length(1, "2, 3 or 4");
        let display = err.to_string();
        assert!(display.contains("found 1"));
        assert!(display.contains("expected 2, 3 or 4"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::AlphabetSize {
            expected: 85,
            found: 64,
        };
        assert_eq!(
            err.to_string(),
            "block family expects 85 symbols, alphabet has 64"
        );
    }

    #[test]
    fn test_overflow_converts_to_buffer_too_small() {
        let err: DecodeError = Overflow.into();
        assert_eq!(err, DecodeError::BufferTooSmall);
    }
}
