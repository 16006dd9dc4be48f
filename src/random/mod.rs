//! Secure randomness.
//!
//! This is the only source of entropy in the crate. Sampling helpers
//! live on the [`SecureRandomSource`] trait; [`ReseedingRng`] is the
//! default generator behind it.

mod csprng;
mod source;

pub use csprng::{ReseedingRng, DEFAULT_RESEED_INTERVAL};
pub use source::SecureRandomSource;

use thiserror::Error;

/// Errors from the randomness layer.
#[derive(Debug, Error)]
pub enum RandomError {
    /// The operating system entropy source could not be read.
    #[error("failed to read OS entropy: {0}")]
    OsEntropy(#[from] rand_core::Error),
}
