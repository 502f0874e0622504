//! Bridge between the fault convention of this library and the status-code
//! convention of the underlying I/O library.
//!
//! Every crossing goes through one of three functions:
//!
//! - [`throw_not_ok`]: a failed status becomes a [`ParquetException`] whose
//!   message is `"Arrow error: " + description`.
//! - [`catch_not_ok`]: a [`ParquetException`], returned as `Err` or unwound as
//!   a panic payload, becomes an `IOError` status carrying the fault's message.
//!   Panics with any other payload keep unwinding.
//! - [`ignore_not_ok`]: a status is discarded on purpose.
//!
//! Converted faults always land in the I/O error category, whatever their
//! [`FaultKind`](crate::errors::FaultKind). The `parquet_*_not_ok!` macros are
//! call-site sugar over these functions.
//!
//! [`ParquetException`]: crate::errors::ParquetException

pub mod convert;
pub mod macros;
pub mod status;

pub use convert::{catch_not_ok, ignore_not_ok, raise, raise_eof, raise_nyi, throw_not_ok};
pub use status::ArrowStatus;
