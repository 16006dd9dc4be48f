//! Password generation criteria.

use crate::charset::CharCategory;
use serde::{Deserialize, Serialize};

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;

/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 128;

/// What the caller wants a generated password to look like.
///
/// Lowercase and uppercase letters are always part of the alphabet;
/// digits and symbols are optional additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationCriteria {
    /// Exact number of characters in the password.
    pub length: usize,
    /// Include the digit category.
    pub include_numbers: bool,
    /// Include the symbol category.
    pub include_symbols: bool,
}

impl Default for GenerationCriteria {
    fn default() -> Self {
        Self {
            length: 16,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationCriteria {
    /// Creates criteria with every optional category enabled.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Creates criteria from all three fields.
    pub fn new(length: usize, include_numbers: bool, include_symbols: bool) -> Self {
        Self {
            length,
            include_numbers,
            include_symbols,
        }
    }

    /// Returns the enabled categories in canonical order.
    pub fn categories(&self) -> Vec<CharCategory> {
        CharCategory::ALL
            .into_iter()
            .filter(|category| match category {
                CharCategory::Lowercase | CharCategory::Uppercase => true,
                CharCategory::Digits => self.include_numbers,
                CharCategory::Symbols => self.include_symbols,
            })
            .collect()
    }

    /// Validates the criteria.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.length < MIN_LENGTH || self.length > MAX_LENGTH {
            return Err(ValidationError::LengthOutOfRange {
                length: self.length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        // Letters are always enabled today; this guards variants that
        // make them optional.
        if self.categories().is_empty() {
            return Err(ValidationError::NoCategoryEnabled);
        }
        Ok(())
    }
}

/// Validates a generation request. Pure; consumes no randomness.
pub fn validate(criteria: &GenerationCriteria) -> Result<(), ValidationError> {
    criteria.validate()
}

/// Request validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Length falls outside `[min, max]`.
    #[error("password length {length} is out of range (must be between {min} and {max})")]
    LengthOutOfRange {
        /// Requested length.
        length: usize,
        /// Smallest accepted length.
        min: usize,
        /// Largest accepted length.
        max: usize,
    },
    /// No character category would be drawn from.
    #[error("at least one character category must be enabled")]
    NoCategoryEnabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria_valid() {
        let criteria = GenerationCriteria::default();
        assert_eq!(criteria.length, 16);
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(validate(&GenerationCriteria::with_length(MIN_LENGTH)).is_ok());
        assert!(validate(&GenerationCriteria::with_length(MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_too_short_rejected() {
        let err = validate(&GenerationCriteria::with_length(7)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthOutOfRange {
                length: 7,
                min: 8,
                max: 128
            }
        );
    }

    #[test]
    fn test_too_long_rejected() {
        assert!(matches!(
            validate(&GenerationCriteria::with_length(129)),
            Err(ValidationError::LengthOutOfRange { length: 129, .. })
        ));
    }

    #[test]
    fn test_error_message_names_value_and_bounds() {
        let err = validate(&GenerationCriteria::with_length(0)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains('0'));
        assert!(message.contains("8"));
        assert!(message.contains("128"));
    }

    #[test]
    fn test_categories_follow_flags() {
        let letters_only = GenerationCriteria::new(12, false, false);
        assert_eq!(
            letters_only.categories(),
            vec![CharCategory::Lowercase, CharCategory::Uppercase]
        );

        let everything = GenerationCriteria::new(12, true, true);
        assert_eq!(everything.categories(), CharCategory::ALL.to_vec());

        let symbols = GenerationCriteria::new(12, false, true);
        assert!(!symbols.categories().contains(&CharCategory::Digits));
        assert!(symbols.categories().contains(&CharCategory::Symbols));
    }
}
