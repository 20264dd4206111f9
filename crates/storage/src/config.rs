#![forbid(unsafe_code)]

use crate::backend::BatchPolicy;
use crate::store::DEFAULT_DATABASE_FILE;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CACHE_SIZE: usize = 256;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Settings for [`crate::DataProvider::open`].
///
/// ```toml
/// storage_dir = "data"
/// database_file = "plots.db"
/// cache_size = 256
/// batch_policy = "continue_on_error"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    pub storage_dir: PathBuf,
    pub database_file: String,
    /// Plots kept in memory; `0` disables the cache.
    pub cache_size: usize,
    pub batch_policy: BatchPolicy,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("."),
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            cache_size: DEFAULT_CACHE_SIZE,
            batch_policy: BatchPolicy::default(),
        }
    }
}

impl ProviderConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_file.trim().is_empty() {
            return Err(ConfigError::Invalid("database_file must not be empty"));
        }
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.storage_dir.join(&self.database_file)
    }
}
