//! Canonical character categories.

use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// The curated symbol alphabet (18 characters).
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}";

/// A class of characters a password can be built from.
///
/// Variants are declared in canonical order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharCategory {
    /// `a` through `z`.
    Lowercase,
    /// `A` through `Z`.
    Uppercase,
    /// `0` through `9`.
    Digits,
    /// The fixed [`SYMBOLS`] set.
    Symbols,
}

impl CharCategory {
    /// All categories in canonical order.
    pub const ALL: [CharCategory; 4] = [
        CharCategory::Lowercase,
        CharCategory::Uppercase,
        CharCategory::Digits,
        CharCategory::Symbols,
    ];

    /// Returns the category's alphabet. Always ASCII.
    #[inline]
    pub fn alphabet(self) -> &'static str {
        match self {
            CharCategory::Lowercase => LOWERCASE,
            CharCategory::Uppercase => UPPERCASE,
            CharCategory::Digits => DIGITS,
            CharCategory::Symbols => SYMBOLS,
        }
    }

    /// Returns the number of symbols in the alphabet.
    #[inline]
    pub fn size(self) -> usize {
        self.alphabet().len()
    }

    /// Classifies an arbitrary character.
    ///
    /// Anything that is not an ASCII letter or digit counts as a symbol,
    /// including whitespace and non-ASCII characters.
    pub fn classify(c: char) -> CharCategory {
        if c.is_ascii_lowercase() {
            CharCategory::Lowercase
        } else if c.is_ascii_uppercase() {
            CharCategory::Uppercase
        } else if c.is_ascii_digit() {
            CharCategory::Digits
        } else {
            CharCategory::Symbols
        }
    }

    /// Returns true if `c` belongs to the category's canonical alphabet.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(c)
    }

    /// Short label used in composition summaries.
    pub fn label(self) -> &'static str {
        match self {
            CharCategory::Lowercase => "lowercase",
            CharCategory::Uppercase => "UPPERCASE",
            CharCategory::Digits => "digits",
            CharCategory::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_sizes() {
        assert_eq!(CharCategory::Lowercase.size(), 26);
        assert_eq!(CharCategory::Uppercase.size(), 26);
        assert_eq!(CharCategory::Digits.size(), 10);
        assert_eq!(CharCategory::Symbols.size(), 18);
    }

    #[test]
    fn test_alphabets_are_disjoint_and_ascii() {
        for (i, a) in CharCategory::ALL.iter().enumerate() {
            assert!(a.alphabet().is_ascii());
            for b in &CharCategory::ALL[i + 1..] {
                assert!(!a.alphabet().chars().any(|c| b.contains(c)));
            }
        }
    }

    #[test]
    fn test_symbols_have_no_duplicates() {
        let mut seen: Vec<char> = SYMBOLS.chars().collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), SYMBOLS.len());
    }

    #[test]
    fn test_classify_matches_alphabets() {
        for category in CharCategory::ALL {
            for c in category.alphabet().chars() {
                assert_eq!(CharCategory::classify(c), category);
            }
        }
    }

    #[test]
    fn test_classify_other_characters_as_symbols() {
        assert_eq!(CharCategory::classify('~'), CharCategory::Symbols);
        assert_eq!(CharCategory::classify(' '), CharCategory::Symbols);
        assert_eq!(CharCategory::classify('é'), CharCategory::Symbols);
    }
}
