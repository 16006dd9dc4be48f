//! Alphabet derivation from validated criteria.

use super::CharCategory;
use crate::criteria::GenerationCriteria;

/// The concrete alphabets a password is drawn from.
///
/// Holds the enabled categories in canonical order plus the flattened,
/// deduplicated union used for the fill phase of assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetSpec {
    categories: Vec<CharCategory>,
    alphabet: Vec<u8>,
}

impl CharsetSpec {
    /// Builds the charset for the given criteria. Deterministic.
    pub fn build(criteria: &GenerationCriteria) -> Self {
        Self::from_categories(&criteria.categories())
    }

    /// Builds a charset from an explicit category list.
    ///
    /// Categories are reordered canonically and duplicates are dropped.
    pub fn from_categories(categories: &[CharCategory]) -> Self {
        let mut categories = categories.to_vec();
        categories.sort_unstable();
        categories.dedup();

        let mut alphabet: Vec<u8> = Vec::new();
        for category in &categories {
            for &b in category.alphabet().as_bytes() {
                if !alphabet.contains(&b) {
                    alphabet.push(b);
                }
            }
        }

        Self {
            categories,
            alphabet,
        }
    }

    /// Returns the enabled categories in canonical order.
    #[inline]
    pub fn categories(&self) -> &[CharCategory] {
        &self.categories
    }

    /// Returns the union of all enabled alphabets.
    #[inline]
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// Returns the number of distinct symbols across enabled categories.
    #[inline]
    pub fn charset_size(&self) -> usize {
        self.alphabet.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_always_present() {
        let spec = CharsetSpec::build(&GenerationCriteria::new(8, false, false));
        assert_eq!(
            spec.categories(),
            &[CharCategory::Lowercase, CharCategory::Uppercase]
        );
        assert_eq!(spec.charset_size(), 52);
    }

    #[test]
    fn test_sizes_per_flag_combination() {
        let cases = [
            (false, false, 52),
            (true, false, 62),
            (false, true, 70),
            (true, true, 80),
        ];
        for (numbers, symbols, expected) in cases {
            let spec = CharsetSpec::build(&GenerationCriteria::new(16, numbers, symbols));
            assert_eq!(spec.charset_size(), expected);
        }
    }

    #[test]
    fn test_alphabet_follows_canonical_order() {
        let spec = CharsetSpec::build(&GenerationCriteria::new(16, true, true));
        assert_eq!(spec.alphabet()[0], b'a');
        assert_eq!(spec.alphabet()[26], b'A');
        assert_eq!(spec.alphabet()[52], b'0');
        assert_eq!(spec.alphabet()[62], b'!');
    }

    #[test]
    fn test_duplicate_categories_collapse() {
        let spec = CharsetSpec::from_categories(&[
            CharCategory::Digits,
            CharCategory::Lowercase,
            CharCategory::Digits,
        ]);
        assert_eq!(
            spec.categories(),
            &[CharCategory::Lowercase, CharCategory::Digits]
        );
        assert_eq!(spec.charset_size(), 36);
    }

    #[test]
    fn test_build_is_deterministic() {
        let criteria = GenerationCriteria::default();
        assert_eq!(CharsetSpec::build(&criteria), CharsetSpec::build(&criteria));
    }
}
