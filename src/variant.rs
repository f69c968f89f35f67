use std::sync::OnceLock;

use crate::errors::ConfigError;
use crate::lookup::LookupTable;

/// Capability interface of a concrete encoding: the ordered alphabet plus
/// padding, ignorable-character, stream-terminator, and normalization
/// policy. Implemented once per encoding; the engine is generic over this
/// trait.
///
/// Descriptors are immutable after construction and may be shared across
/// arbitrarily many concurrent encode/decode calls.
pub trait Variant {
    /// Ordered alphabet, one unique ASCII symbol per digit value.
    fn alphabet(&self) -> &[u8];

    fn alphabet_size(&self) -> usize {
        self.alphabet().len()
    }

    /// Symbol for a digit value. `index` must be within the alphabet.
    fn symbol(&self, index: usize) -> u8 {
        self.alphabet()[index]
    }

    /// Whether encoding fills partial blocks out to the full encoded
    /// block size with the padding symbol.
    fn generates_padding(&self) -> bool {
        false
    }

    /// Whether decoding rejects inputs that do not end on a full
    /// (possibly padded) encoded block.
    fn requires_padding(&self) -> bool {
        false
    }

    fn padding_symbol(&self) -> Option<u8> {
        None
    }

    /// Explicit stream terminators: decoding stops cleanly at them.
    fn is_eof_symbol(&self, _symbol: u8) -> bool {
        false
    }

    /// Characters skipped during decoding without affecting the result.
    fn should_ignore(&self, _symbol: u8) -> bool {
        false
    }

    /// Case folding and symbol aliasing for forgiving variants;
    /// identity for strict ones.
    fn normalized_symbol(&self, symbol: u8) -> u8 {
        symbol
    }

    /// The variant's inverse lookup table, built once and cached behind
    /// the variant's identity.
    fn lookup_table(&self) -> &LookupTable;
}

/// A variant descriptor built at runtime, typically from configuration.
///
/// Validation happens at construction; a successfully built
/// `CustomVariant` never fails later. Pair one with a block family via
/// [`Codec::new`](crate::Codec::new).
#[derive(Debug, Clone)]
pub struct CustomVariant {
    alphabet: Vec<u8>,
    padding: Option<u8>,
    generates_padding: bool,
    requires_padding: bool,
    ignore: Vec<u8>,
    eof: Vec<u8>,
    case_insensitive: bool,
    aliases: Vec<(u8, u8)>,
    table: OnceLock<LookupTable>,
}

impl CustomVariant {
    /// Create a descriptor from an ordered alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty, contains a non-ASCII
    /// byte, or contains duplicate symbols.
    pub fn new(alphabet: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        let alphabet = alphabet.as_ref().to_vec();
        if alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        for (i, &symbol) in alphabet.iter().enumerate() {
            if !symbol.is_ascii() {
                return Err(ConfigError::NonAsciiSymbol {
                    symbol: symbol as char,
                });
            }
            if alphabet[..i].contains(&symbol) {
                return Err(ConfigError::DuplicateSymbol {
                    symbol: symbol as char,
                });
            }
        }
        Ok(CustomVariant {
            alphabet,
            padding: None,
            generates_padding: false,
            requires_padding: false,
            ignore: Vec::new(),
            eof: Vec::new(),
            case_insensitive: false,
            aliases: Vec::new(),
            table: OnceLock::new(),
        })
    }

    /// Set the padding symbol. Enables both generating and requiring
    /// padding, the common RFC 4648 behavior; adjust with
    /// [`with_generates_padding`](Self::with_generates_padding) and
    /// [`with_requires_padding`](Self::with_requires_padding).
    pub fn with_padding(mut self, symbol: u8) -> Result<Self, ConfigError> {
        if !symbol.is_ascii() {
            return Err(ConfigError::NonAsciiSymbol {
                symbol: symbol as char,
            });
        }
        if self.alphabet.contains(&symbol) {
            return Err(ConfigError::PaddingInAlphabet {
                symbol: symbol as char,
            });
        }
        self.padding = Some(symbol);
        self.generates_padding = true;
        self.requires_padding = true;
        self.table = OnceLock::new();
        Ok(self)
    }

    pub fn with_generates_padding(mut self, generates: bool) -> Self {
        self.generates_padding = generates;
        self
    }

    pub fn with_requires_padding(mut self, requires: bool) -> Self {
        self.requires_padding = requires;
        self
    }

    /// Symbols to skip during decoding (e.g. hyphens or line breaks).
    pub fn with_ignored(mut self, symbols: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        for &symbol in symbols.as_ref() {
            if !symbol.is_ascii() {
                return Err(ConfigError::NonAsciiSymbol {
                    symbol: symbol as char,
                });
            }
            self.ignore.push(symbol);
        }
        self.table = OnceLock::new();
        Ok(self)
    }

    /// Symbols that terminate the encoded stream.
    pub fn with_eof(mut self, symbols: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        for &symbol in symbols.as_ref() {
            if !symbol.is_ascii() {
                return Err(ConfigError::NonAsciiSymbol {
                    symbol: symbol as char,
                });
            }
            self.eof.push(symbol);
        }
        self.table = OnceLock::new();
        Ok(self)
    }

    /// Fold input symbols to whichever case the alphabet uses.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self.table = OnceLock::new();
        self
    }

    /// Map an input symbol to a canonical one before classification,
    /// e.g. Crockford's `O` reading as `0`. Aliases are applied to the
    /// raw input symbol, before case folding.
    pub fn with_alias(mut self, from: u8, to: u8) -> Result<Self, ConfigError> {
        for symbol in [from, to] {
            if !symbol.is_ascii() {
                return Err(ConfigError::NonAsciiSymbol {
                    symbol: symbol as char,
                });
            }
        }
        self.aliases.push((from, to));
        self.table = OnceLock::new();
        Ok(self)
    }
}

impl Variant for CustomVariant {
    fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    fn generates_padding(&self) -> bool {
        self.generates_padding && self.padding.is_some()
    }

    fn requires_padding(&self) -> bool {
        self.requires_padding
    }

    fn padding_symbol(&self) -> Option<u8> {
        self.padding
    }

    fn is_eof_symbol(&self, symbol: u8) -> bool {
        self.eof.contains(&symbol)
    }

    fn should_ignore(&self, symbol: u8) -> bool {
        self.ignore.contains(&symbol)
    }

    fn normalized_symbol(&self, symbol: u8) -> u8 {
        if let Some(&(_, to)) = self.aliases.iter().find(|&&(from, _)| from == symbol) {
            return to;
        }
        if self.case_insensitive && symbol.is_ascii_alphabetic() {
            let lower = symbol.to_ascii_lowercase();
            if self.alphabet.contains(&lower) {
                return lower;
            }
            let upper = symbol.to_ascii_uppercase();
            if self.alphabet.contains(&upper) {
                return upper;
            }
        }
        symbol
    }

    fn lookup_table(&self) -> &LookupTable {
        self.table.get_or_init(|| LookupTable::build(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_alphabet() {
        assert_eq!(
            CustomVariant::new(b"").unwrap_err(),
            ConfigError::EmptyAlphabet
        );
    }

    #[test]
    fn test_rejects_duplicate_symbols() {
        assert_eq!(
            CustomVariant::new(b"abca").unwrap_err(),
            ConfigError::DuplicateSymbol { symbol: 'a' }
        );
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(matches!(
            CustomVariant::new([b'a', 0x80]),
            Err(ConfigError::NonAsciiSymbol { .. })
        ));
    }

    #[test]
    fn test_rejects_padding_inside_alphabet() {
        let variant = CustomVariant::new(b"abc").unwrap();
        assert_eq!(
            variant.with_padding(b'b').unwrap_err(),
            ConfigError::PaddingInAlphabet { symbol: 'b' }
        );
    }

    #[test]
    fn test_padding_defaults_to_generate_and_require() {
        let variant = CustomVariant::new(b"abc")
            .unwrap()
            .with_padding(b'=')
            .unwrap();
        assert!(variant.generates_padding());
        assert!(variant.requires_padding());
        assert_eq!(variant.padding_symbol(), Some(b'='));

        let unpadded = variant.with_generates_padding(false);
        assert!(!unpadded.generates_padding());
    }

    #[test]
    fn test_aliases_apply_before_case_folding() {
        let variant = CustomVariant::new(b"0123456789ABCDEF")
            .unwrap()
            .with_case_insensitive(true)
            .with_alias(b'O', b'0')
            .unwrap()
            .with_alias(b'o', b'0')
            .unwrap();
        assert_eq!(variant.normalized_symbol(b'O'), b'0');
        assert_eq!(variant.normalized_symbol(b'o'), b'0');
        assert_eq!(variant.normalized_symbol(b'a'), b'A');
        assert_eq!(variant.normalized_symbol(b'7'), b'7');
    }
}
