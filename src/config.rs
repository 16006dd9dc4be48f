//! Configuration file support.
//!
//! Everything is optional; missing sections and keys fall back to
//! built-in defaults.
//!
//! ```toml
//! [generation]
//! length = 20
//! include_numbers = true
//! include_symbols = false
//!
//! [strength]
//! medium = 40.0
//! strong = 60.0
//! very_strong = 80.0
//!
//! [random]
//! reseed_interval_bytes = 1048576
//! ```

use crate::criteria::{GenerationCriteria, ValidationError};
use crate::random::DEFAULT_RESEED_INTERVAL;
use crate::strength::{StrengthThresholds, ThresholdError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Random source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Output bytes between CSPRNG reseeds (0 disables reseeding).
    pub reseed_interval_bytes: u64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            reseed_interval_bytes: DEFAULT_RESEED_INTERVAL,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Default criteria for front-ends that do not override them.
    #[serde(default)]
    pub generation: GenerationCriteria,
    /// Strength classification policy.
    #[serde(default)]
    pub strength: StrengthThresholds,
    /// CSPRNG settings.
    #[serde(default)]
    pub random: RandomConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()?;
        self.strength.validate()?;
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    #[error("invalid generation defaults: {0}")]
    InvalidDefaults(#[from] ValidationError),
    #[error("invalid strength thresholds: {0}")]
    InvalidThresholds(#[from] ThresholdError),
}
