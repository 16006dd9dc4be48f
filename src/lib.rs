//! Passforge
//!
//! Randomized password generation with composition guarantees, and an
//! entropy-based strength report for any password.
//!
//! # Architecture
//!
//! ```text
//! criteria → charset → assembler → password
//!                         ↑
//!                       random
//!
//! password (any string) → strength → report
//! ```
//!
//! # Design Principles
//!
//! - **Validate first**: rejected requests never touch the random source
//! - **Guarantee, then shuffle**: every enabled category appears at least
//!   once, and the final shuffle removes any positional trace of that
//! - **Unbiased sampling**: indices come from rejection sampling, never `%`
//! - **Self-consistent scoring**: strength is rederived from the password
//!   itself, never from the request that produced it
//!
//! # Example
//!
//! ```
//! use passforge::{estimate_strength, generate, GenerationCriteria, StrengthLevel};
//!
//! let criteria = GenerationCriteria::new(20, true, true);
//! let password = generate(&criteria).unwrap();
//! assert_eq!(password.len(), 20);
//!
//! let report = estimate_strength(password.as_str());
//! assert_eq!(report.strength_level, StrengthLevel::VeryStrong);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod assembler;
pub mod charset;
pub mod config;
pub mod criteria;
pub mod generator;
pub mod random;
pub mod strength;

// Re-export commonly used types at crate root
pub use assembler::GeneratedPassword;
pub use charset::{CharCategory, CharsetSpec};
pub use config::{ConfigError, FileConfig};
pub use criteria::{GenerationCriteria, ValidationError};
pub use generator::PasswordGenerator;
pub use random::{ReseedingRng, SecureRandomSource};
pub use strength::{StrengthEstimator, StrengthLevel, StrengthReport, StrengthThresholds};

use rand_core::OsRng;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generates a password satisfying `criteria`.
///
/// Draws directly from the operating system CSPRNG, so concurrent calls
/// from any number of threads share no state.
pub fn generate(criteria: &GenerationCriteria) -> Result<GeneratedPassword, ValidationError> {
    PasswordGenerator::with_source(OsRng).generate(criteria)
}

/// Reports the strength of any password using the default thresholds.
///
/// Never fails; an empty string scores zero bits and `Weak`.
pub fn estimate_strength(password: &str) -> StrengthReport {
    StrengthEstimator::default().estimate(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_generate_rejects_out_of_range() {
        assert!(matches!(
            generate(&GenerationCriteria::with_length(7)),
            Err(ValidationError::LengthOutOfRange { .. })
        ));
        assert!(matches!(
            generate(&GenerationCriteria::with_length(129)),
            Err(ValidationError::LengthOutOfRange { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_both_operations() {
        let password = generate(&GenerationCriteria::new(12, true, false)).unwrap();
        let report = estimate_strength(password.as_str());

        assert!(report.has_lowercase && report.has_uppercase && report.has_digits);
        assert!(!report.has_symbols);
        assert_eq!(report.charset_size, 62);
    }

    #[test]
    fn test_concurrent_generation() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    (0..50)
                        .map(|_| {
                            generate(&GenerationCriteria::default())
                                .map(GeneratedPassword::into_string)
                        })
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();

        let mut all = Vec::new();
        for handle in handles {
            all.extend(handle.join().unwrap().unwrap());
        }

        assert_eq!(all.len(), 400);
        assert!(all.iter().all(|p| p.len() == 16));
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 400);
    }
}
