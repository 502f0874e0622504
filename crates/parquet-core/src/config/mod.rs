//! Configuration for the Parquet core.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod logging_config;
pub mod parquet_config;

pub use logging_config::{LogFormat, LoggingConfig};
pub use parquet_config::ParquetConfig;
