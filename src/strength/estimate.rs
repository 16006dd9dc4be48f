//! Entropy-based strength estimation.
//!
//! Works on any string, not only passwords this crate produced. The
//! charset size is rebuilt from what the password actually contains,
//! so a password missing a category is scored against the smaller
//! alphabet.

use super::threshold::{StrengthLevel, StrengthThresholds};
use crate::charset::CharCategory;

/// Strength metrics for a single password.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    /// `length * log2(charset_size)`.
    pub entropy_bits: f64,
    /// Sum of canonical sizes of the detected categories.
    pub charset_size: usize,
    /// Classification of `entropy_bits`.
    pub strength_level: StrengthLevel,
    /// Contains at least one ASCII lowercase letter.
    pub has_lowercase: bool,
    /// Contains at least one ASCII uppercase letter.
    pub has_uppercase: bool,
    /// Contains at least one ASCII digit.
    pub has_digits: bool,
    /// Contains at least one character of any other kind.
    pub has_symbols: bool,
}

impl StrengthReport {
    /// Returns the detected categories in canonical order.
    pub fn categories(&self) -> Vec<CharCategory> {
        CharCategory::ALL
            .into_iter()
            .filter(|&category| self.has(category))
            .collect()
    }

    /// Returns true if the category was detected.
    pub fn has(&self, category: CharCategory) -> bool {
        match category {
            CharCategory::Lowercase => self.has_lowercase,
            CharCategory::Uppercase => self.has_uppercase,
            CharCategory::Digits => self.has_digits,
            CharCategory::Symbols => self.has_symbols,
        }
    }

    /// Returns a comma-separated summary such as `lowercase, UPPERCASE, digits`.
    pub fn composition(&self) -> String {
        self.categories()
            .iter()
            .map(|category| category.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Entropy in bits of `length` symbols drawn from `charset_size` options.
///
/// Alphabets of zero or one symbol carry no entropy.
pub fn entropy_bits(length: usize, charset_size: usize) -> f64 {
    if length == 0 || charset_size <= 1 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Scores arbitrary passwords against a set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct StrengthEstimator {
    thresholds: StrengthThresholds,
}

impl StrengthEstimator {
    /// Creates an estimator with the given thresholds.
    pub fn new(thresholds: StrengthThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the thresholds in use.
    pub fn thresholds(&self) -> &StrengthThresholds {
        &self.thresholds
    }

    /// Produces a report for `password`. Deterministic and infallible.
    pub fn estimate(&self, password: &str) -> StrengthReport {
        let mut has_lowercase = false;
        let mut has_uppercase = false;
        let mut has_digits = false;
        let mut has_symbols = false;
        let mut length = 0usize;

        for c in password.chars() {
            length += 1;
            match CharCategory::classify(c) {
                CharCategory::Lowercase => has_lowercase = true,
                CharCategory::Uppercase => has_uppercase = true,
                CharCategory::Digits => has_digits = true,
                CharCategory::Symbols => has_symbols = true,
            }
        }

        let charset_size = [
            (has_lowercase, CharCategory::Lowercase),
            (has_uppercase, CharCategory::Uppercase),
            (has_digits, CharCategory::Digits),
            (has_symbols, CharCategory::Symbols),
        ]
        .into_iter()
        .filter(|(present, _)| *present)
        .map(|(_, category)| category.size())
        .sum();

        let entropy_bits = entropy_bits(length, charset_size);

        StrengthReport {
            entropy_bits,
            charset_size,
            strength_level: self.thresholds.classify(entropy_bits),
            has_lowercase,
            has_uppercase,
            has_digits,
            has_symbols,
        }
    }
}
