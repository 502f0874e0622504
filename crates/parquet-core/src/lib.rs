//! Core of the Parquet format library: the fault type used internally, the
//! bridge to the status-code convention of the underlying I/O library,
//! configuration and tracing setup.

pub mod bridge;
pub mod config;
pub mod errors;
pub mod tracing;

pub use bridge::{catch_not_ok, ignore_not_ok, raise, raise_eof, raise_nyi, throw_not_ok};
pub use errors::{ParquetException, Result};
