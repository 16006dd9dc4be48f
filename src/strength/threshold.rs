//! Entropy thresholds for strength classification.
//!
//! Policy values, not derived from anything: adjust them through
//! configuration rather than editing call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal strength classification.
///
/// Ordered by increasing entropy: `Weak < Medium < Strong < VeryStrong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    /// Below the `medium` threshold.
    Weak,
    /// At least `medium`, below `strong`.
    Medium,
    /// At least `strong`, below `very_strong`.
    Strong,
    /// At or above `very_strong`.
    VeryStrong,
}

impl StrengthLevel {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower entropy bounds, in bits, of each level above `Weak`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthThresholds {
    /// Minimum bits for `Medium`.
    pub medium: f64,
    /// Minimum bits for `Strong`.
    pub strong: f64,
    /// Minimum bits for `VeryStrong`.
    pub very_strong: f64,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            medium: 40.0,
            strong: 60.0,
            very_strong: 80.0,
        }
    }
}

impl StrengthThresholds {
    /// Creates thresholds after validating them.
    pub fn new(medium: f64, strong: f64, very_strong: f64) -> Result<Self, ThresholdError> {
        let thresholds = Self {
            medium,
            strong,
            very_strong,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Checks that thresholds are finite, non-negative and strictly increasing.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        for (name, value) in [
            ("medium", self.medium),
            ("strong", self.strong),
            ("very_strong", self.very_strong),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ThresholdError::InvalidValue { name, value });
            }
        }

        if self.medium >= self.strong || self.strong >= self.very_strong {
            return Err(ThresholdError::NotIncreasing {
                medium: self.medium,
                strong: self.strong,
                very_strong: self.very_strong,
            });
        }

        Ok(())
    }

    /// Maps an entropy figure to exactly one level.
    ///
    /// Every input, NaN included, falls through to some arm; NaN
    /// compares false everywhere and lands on `Weak`.
    pub fn classify(&self, entropy_bits: f64) -> StrengthLevel {
        if entropy_bits >= self.very_strong {
            StrengthLevel::VeryStrong
        } else if entropy_bits >= self.strong {
            StrengthLevel::Strong
        } else if entropy_bits >= self.medium {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Weak
        }
    }
}

/// Threshold validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    #[error("threshold {name} = {value} must be a finite, non-negative number")]
    InvalidValue { name: &'static str, value: f64 },

    #[error("thresholds must increase: medium {medium} < strong {strong} < very_strong {very_strong}")]
    NotIncreasing {
        medium: f64,
        strong: f64,
        very_strong: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_valid() {
        assert!(StrengthThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_boundaries_belong_to_upper_level() {
        let t = StrengthThresholds::default();
        assert_eq!(t.classify(0.0), StrengthLevel::Weak);
        assert_eq!(t.classify(39.999), StrengthLevel::Weak);
        assert_eq!(t.classify(40.0), StrengthLevel::Medium);
        assert_eq!(t.classify(59.999), StrengthLevel::Medium);
        assert_eq!(t.classify(60.0), StrengthLevel::Strong);
        assert_eq!(t.classify(79.999), StrengthLevel::Strong);
        assert_eq!(t.classify(80.0), StrengthLevel::VeryStrong);
        assert_eq!(t.classify(f64::INFINITY), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_nan_is_weak() {
        assert_eq!(
            StrengthThresholds::default().classify(f64::NAN),
            StrengthLevel::Weak
        );
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(StrengthLevel::Weak < StrengthLevel::Medium);
        assert!(StrengthLevel::Medium < StrengthLevel::Strong);
        assert!(StrengthLevel::Strong < StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_non_increasing_rejected() {
        assert!(matches!(
            StrengthThresholds::new(60.0, 60.0, 80.0),
            Err(ThresholdError::NotIncreasing { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            StrengthThresholds::new(40.0, f64::NAN, 80.0),
            Err(ThresholdError::InvalidValue { name: "strong", .. })
        ));
        assert!(matches!(
            StrengthThresholds::new(-1.0, 60.0, 80.0),
            Err(ThresholdError::InvalidValue { name: "medium", .. })
        ));
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(StrengthLevel::VeryStrong.to_string(), "Very Strong");
        assert_eq!(StrengthLevel::Weak.to_string(), "Weak");
    }
}
