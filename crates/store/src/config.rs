//! Storage configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VERDANT_DATA_DIR` - Directory for persisted snapshots (default: `.verdant`)

use std::path::PathBuf;

use thiserror::Error;

const DATA_DIR_VAR: &str = "VERDANT_DATA_DIR";
const DEFAULT_DATA_DIR: &str = ".verdant";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the client keeps its persisted snapshots.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory the file persister writes `<key>.json` snapshots into.
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Create a configuration pointing at an explicit directory.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `VERDANT_DATA_DIR` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match std::env::var(DATA_DIR_VAR) {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    DATA_DIR_VAR.to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
        };

        Ok(Self { data_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_given_directory() {
        let config = StorageConfig::new("/tmp/verdant-test");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/verdant-test"));
    }
}
