//! Error handling for the Parquet core.
//! One error type per boundary, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod parquet_exception;

pub use config_error::ConfigError;
pub use error_code::ParquetErrorCode;
pub use parquet_exception::{FaultKind, ParquetException, Result};
