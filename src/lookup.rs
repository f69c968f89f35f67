use crate::variant::Variant;

/// Classification of one raw input byte against a variant's alphabet.
///
/// Exactly one of four disjoint categories; produced only by the lookup
/// table and never persisted beyond a single decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// A digit with its alphabet index, `0..alphabet_size`
    Valid(u8),
    /// The variant's padding symbol
    Padding,
    /// Not recognized by the variant at all
    Invalid,
    /// An explicit stream terminator
    Eof,
}

impl SymbolClass {
    /// Stop characters end the scanning phase of a decode.
    pub fn is_stop(self) -> bool {
        !matches!(self, SymbolClass::Valid(_))
    }
}

/// A 256-entry inverse map from raw byte value to classified alphabet
/// index.
///
/// Built once per variant and never mutated afterwards; safe to share
/// across arbitrarily many concurrent decode calls. Construction is
/// idempotent, so tables can be cached keyed by variant identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    entries: [SymbolClass; 256],
}

impl LookupTable {
    /// Classify every possible byte value for `variant`.
    ///
    /// Alphabet membership is checked on the normalized symbol and wins
    /// over the EOF and padding predicates, in that order.
    pub fn build<V: Variant>(variant: &V) -> Self {
        let alphabet = variant.alphabet();
        let mut entries = [SymbolClass::Invalid; 256];
        for byte in 0..=255u8 {
            let symbol = variant.normalized_symbol(byte);
            entries[byte as usize] = if let Some(index) =
                alphabet.iter().position(|&s| s == symbol)
            {
                SymbolClass::Valid(index as u8)
            } else if variant.is_eof_symbol(symbol) {
                SymbolClass::Eof
            } else if variant.padding_symbol() == Some(symbol) {
                SymbolClass::Padding
            } else {
                SymbolClass::Invalid
            };
        }
        LookupTable { entries }
    }

    pub fn classify(&self, byte: u8) -> SymbolClass {
        self.entries[byte as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::CustomVariant;

    fn variant() -> CustomVariant {
        CustomVariant::new(b"0123456789abcdef")
            .unwrap()
            .with_padding(b'=')
            .unwrap()
            .with_case_insensitive(true)
    }

    #[test]
    fn test_symbol_classes_are_disjoint() {
        let variant = variant();
        let table = LookupTable::build(&variant);

        assert_eq!(table.classify(b'0'), SymbolClass::Valid(0));
        assert_eq!(table.classify(b'f'), SymbolClass::Valid(15));
        assert_eq!(table.classify(b'='), SymbolClass::Padding);
        assert_eq!(table.classify(b'$'), SymbolClass::Invalid);
        assert_eq!(table.classify(0xFF), SymbolClass::Invalid);
    }

    #[test]
    fn test_case_folding_reaches_the_same_index() {
        let variant = variant();
        let table = LookupTable::build(&variant);
        assert_eq!(table.classify(b'A'), table.classify(b'a'));
        assert_eq!(table.classify(b'F'), SymbolClass::Valid(15));
    }

    #[test]
    fn test_construction_is_idempotent() {
        let variant = variant();
        assert_eq!(LookupTable::build(&variant), LookupTable::build(&variant));
    }

    #[test]
    fn test_valid_classification_inverts_symbol() {
        let variant = variant();
        let table = LookupTable::build(&variant);
        for index in 0..variant.alphabet_size() {
            let symbol = variant.symbol(index);
            assert_eq!(table.classify(symbol), SymbolClass::Valid(index as u8));
        }
    }
}
