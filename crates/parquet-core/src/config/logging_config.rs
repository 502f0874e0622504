//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Default `EnvFilter` directive when neither `PARQUET_LOG` nor the config sets one.
pub const DEFAULT_FILTER: &str = "parquet=info";

/// Output format of the `fmt` layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `parquet=debug`. Default: `parquet=info`.
    pub filter: Option<String>,
    /// Output format. Default: full.
    pub format: Option<LogFormat>,
    /// Include the event target. Default: true.
    pub with_target: Option<bool>,
    /// Include thread ids. Default: true.
    pub with_thread_ids: Option<bool>,
    /// Include source file and line. Default: true.
    pub with_file_and_line: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_FILTER)
    }

    pub fn effective_format(&self) -> LogFormat {
        self.format.unwrap_or_default()
    }

    pub fn effective_with_target(&self) -> bool {
        self.with_target.unwrap_or(true)
    }

    pub fn effective_with_thread_ids(&self) -> bool {
        self.with_thread_ids.unwrap_or(true)
    }

    pub fn effective_with_file_and_line(&self) -> bool {
        self.with_file_and_line.unwrap_or(true)
    }
}
