//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{logging_config::DEFAULT_FILTER, LogFormat, LoggingConfig};

/// Environment variable holding per-target log levels, e.g.
/// `PARQUET_LOG=parquet::bridge=debug,parquet_core=info`.
pub const LOG_ENV_VAR: &str = "PARQUET_LOG";

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Filter precedence: `PARQUET_LOG`, then `config.filter`, then `parquet=info`.
/// Idempotent. If another global subscriber is already installed, that one
/// stays in place.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(config.effective_filter()))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let with_file_and_line = config.effective_with_file_and_line();
        let layer = fmt::layer()
            .with_target(config.effective_with_target())
            .with_thread_ids(config.effective_with_thread_ids())
            .with_file(with_file_and_line)
            .with_line_number(with_file_and_line);

        let installed = match config.effective_format() {
            LogFormat::Full => tracing_subscriber::registry()
                .with(layer)
                .with(filter)
                .try_init(),
            LogFormat::Compact => tracing_subscriber::registry()
                .with(layer.compact())
                .with(filter)
                .try_init(),
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
