//! Observability for the Parquet core.
//! `tracing` crate with `EnvFilter`, configured from `PARQUET_LOG` or [`LoggingConfig`].
//!
//! [`LoggingConfig`]: crate::config::LoggingConfig

pub mod fields;
pub mod setup;

pub use setup::{init_tracing, LOG_ENV_VAR};

/// Target of every event emitted by the status bridge.
pub const BRIDGE_TARGET: &str = "parquet::bridge";
