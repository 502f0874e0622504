//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::LoggingConfig;
use crate::errors::ConfigError;
use crate::tracing::LOG_ENV_VAR;

/// Name of the project config file looked up by [`ParquetConfig::load`].
pub const CONFIG_FILE_NAME: &str = "parquet.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PARQUET_LOG`, `PARQUET_LOG_FORMAT`,
///    `PARQUET_LOG_THREAD_IDS`, `PARQUET_LOG_FILE_LINE`)
/// 2. Project config (`parquet.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParquetConfig {
    pub logging: LoggingConfig,
}

impl ParquetConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ParquetConfig) -> Result<(), ConfigError> {
        if let Some(ref filter) = config.logging.filter {
            if let Err(e) = EnvFilter::try_new(filter) {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.filter".to_string(),
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ParquetConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ParquetConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut ParquetConfig, other: &ParquetConfig) {
        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter.clone();
        }
        if other.logging.format.is_some() {
            base.logging.format = other.logging.format;
        }
        if other.logging.with_target.is_some() {
            base.logging.with_target = other.logging.with_target;
        }
        if other.logging.with_thread_ids.is_some() {
            base.logging.with_thread_ids = other.logging.with_thread_ids;
        }
        if other.logging.with_file_and_line.is_some() {
            base.logging.with_file_and_line = other.logging.with_file_and_line;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut ParquetConfig) {
        if let Ok(val) = std::env::var(LOG_ENV_VAR) {
            if EnvFilter::try_new(&val).is_ok() {
                config.logging.filter = Some(val);
            }
        }
        if let Ok(val) = std::env::var("PARQUET_LOG_FORMAT") {
            if let Ok(v) = val.parse() {
                config.logging.format = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PARQUET_LOG_THREAD_IDS") {
            if let Ok(v) = val.parse::<bool>() {
                config.logging.with_thread_ids = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PARQUET_LOG_FILE_LINE") {
            if let Ok(v) = val.parse::<bool>() {
                config.logging.with_file_and_line = Some(v);
            }
        }
    }
}
