//! Password strength estimation.
//!
//! Entropy is the brute-force search space, `length * log2(charset)`,
//! assuming independent uniform symbols. It says nothing about
//! dictionary words or reuse.

mod estimate;
mod threshold;

pub use estimate::{entropy_bits, StrengthEstimator, StrengthReport};
pub use threshold::{StrengthLevel, StrengthThresholds, ThresholdError};
