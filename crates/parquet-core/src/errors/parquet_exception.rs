//! The fault type raised inside the format library.

use std::error::Error as StdError;

use super::config_error::ConfigError;
use super::error_code::{self, ParquetErrorCode};

/// Message of every end-of-stream fault; a detail, if any, follows after `": "`.
pub const EOF_MESSAGE: &str = "Unexpected end of stream";
/// Prefix of every not-implemented fault.
pub const NYI_PREFIX: &str = "Not yet implemented: ";
/// Prefix of every fault converted from a failed status.
pub const ARROW_PREFIX: &str = "Arrow error: ";

/// Which constructor produced a [`ParquetException`].
///
/// Only used for diagnostics. Every kind converts to the same status category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    General,
    EndOfStream,
    NotImplemented,
    Arrow,
}

/// Failure raised by the format library.
///
/// Carries a single message, fixed at construction. `Display` prints the
/// message and nothing else. Propagates as `Err` through `?`, or as a panic
/// payload via [`ParquetException::throw`] where a caller relies on unwinding.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ParquetException {
    message: String,
    kind: FaultKind,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

/// Result type for fault-raising operations.
pub type Result<T> = std::result::Result<T, ParquetException>;

impl ParquetException {
    /// Fault with `message` verbatim.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(FaultKind::General, message.into())
    }

    /// Fault with `message` verbatim that keeps `source` as its cause.
    /// The cause is reachable through [`std::error::Error::source`] and never
    /// changes the message.
    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..Self::new(message)
        }
    }

    /// `"Unexpected end of stream"`, followed by `": " + detail` when `detail` is non-empty.
    pub fn eof(detail: &str) -> Self {
        let message = if detail.is_empty() {
            EOF_MESSAGE.to_string()
        } else {
            format!("{EOF_MESSAGE}: {detail}")
        };
        Self::with_kind(FaultKind::EndOfStream, message)
    }

    /// `"Not yet implemented: " + detail + "."`.
    pub fn nyi(detail: &str) -> Self {
        Self::with_kind(FaultKind::NotImplemented, format!("{NYI_PREFIX}{detail}."))
    }

    /// `"Arrow error: " + description`, for a status that reported failure.
    pub fn arrow(description: &str) -> Self {
        Self::with_kind(FaultKind::Arrow, format!("{ARROW_PREFIX}{description}"))
    }

    fn with_kind(kind: FaultKind, message: String) -> Self {
        Self {
            message,
            kind,
            source: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Consume the fault and return its message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Unwind the current thread with this fault as the panic payload.
    ///
    /// The nearest [`catch_not_ok`](crate::bridge::catch_not_ok) converts it
    /// into a status; any other `catch_unwind` can downcast the payload to
    /// `ParquetException`.
    pub fn throw(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl ParquetErrorCode for ParquetException {
    fn error_code(&self) -> &'static str {
        match self.kind {
            FaultKind::General => error_code::PARQUET_ERROR,
            FaultKind::EndOfStream => error_code::END_OF_STREAM,
            FaultKind::NotImplemented => error_code::NOT_IMPLEMENTED,
            FaultKind::Arrow => error_code::ARROW_ERROR,
        }
    }
}

impl From<ConfigError> for ParquetException {
    fn from(e: ConfigError) -> Self {
        Self::with_source(e.to_string(), e)
    }
}
