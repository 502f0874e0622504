//! Errors raised while loading `parquet.toml`.

use super::error_code::{self, ParquetErrorCode};

/// Failure to read, parse or validate the Parquet configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `parquet.toml` exists but could not be read.
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    /// The file is not valid TOML, or a value has the wrong type.
    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    /// A value parsed but is unusable, e.g. a malformed `logging.filter` directive.
    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl ParquetErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
