//! ParquetErrorCode trait for diagnostics.

/// Structured error code attached to every error type in the core.
/// Codes are used in logs; they never change how a fault is converted
/// into a status.
pub trait ParquetErrorCode {
    /// Returns the error code string (e.g., "END_OF_STREAM").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const PARQUET_ERROR: &str = "PARQUET_ERROR";
pub const END_OF_STREAM: &str = "END_OF_STREAM";
pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";
pub const ARROW_ERROR: &str = "ARROW_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
