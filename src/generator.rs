//! Generation façade.
//!
//! Ties validation, charset construction, assembly and estimation
//! together around an explicitly owned random source.

use crate::assembler::{assemble, GeneratedPassword};
use crate::charset::CharsetSpec;
use crate::config::FileConfig;
use crate::criteria::{GenerationCriteria, ValidationError};
use crate::random::{ReseedingRng, SecureRandomSource};
use crate::strength::{StrengthEstimator, StrengthReport, StrengthThresholds};

/// Generates passwords from an owned random source.
///
/// The source is passed in, never a process-wide singleton, so tests can
/// substitute a seeded one.
#[derive(Debug)]
pub struct PasswordGenerator<R = ReseedingRng> {
    source: R,
    estimator: StrengthEstimator,
}

impl PasswordGenerator<ReseedingRng> {
    /// Creates a generator backed by an OS-seeded CSPRNG.
    pub fn new() -> Self {
        Self::with_source(ReseedingRng::from_os_entropy())
    }

    /// Creates a generator from file configuration.
    pub fn from_config(config: &FileConfig) -> Self {
        Self::with_source(ReseedingRng::with_reseed_interval(
            config.random.reseed_interval_bytes,
        ))
        .with_thresholds(config.strength)
    }
}

impl Default for PasswordGenerator<ReseedingRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SecureRandomSource> PasswordGenerator<R> {
    /// Creates a generator around any secure random source.
    pub fn with_source(source: R) -> Self {
        Self {
            source,
            estimator: StrengthEstimator::default(),
        }
    }

    /// Replaces the strength thresholds.
    pub fn with_thresholds(mut self, thresholds: StrengthThresholds) -> Self {
        self.estimator = StrengthEstimator::new(thresholds);
        self
    }

    /// Generates a password satisfying `criteria`.
    ///
    /// Validation happens before any randomness is drawn. On error no
    /// partial password is produced.
    pub fn generate(
        &mut self,
        criteria: &GenerationCriteria,
    ) -> Result<GeneratedPassword, ValidationError> {
        if let Err(e) = criteria.validate() {
            tracing::debug!(error = %e, "Rejected generation request");
            return Err(e);
        }

        let spec = CharsetSpec::build(criteria);
        let password = assemble(&spec, criteria.length, &mut self.source);

        tracing::debug!(
            length = criteria.length,
            include_numbers = criteria.include_numbers,
            include_symbols = criteria.include_symbols,
            charset_size = spec.charset_size(),
            "Generated password"
        );

        Ok(password)
    }

    /// Scores any password with this generator's thresholds.
    pub fn estimate_strength(&self, password: &str) -> StrengthReport {
        self.estimator.estimate(password)
    }

    /// Returns the random source.
    pub fn source(&self) -> &R {
        &self.source
    }
}
