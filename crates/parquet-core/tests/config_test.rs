//! Tests for the configuration system.

use std::sync::Mutex;

use parquet_core::config::{LogFormat, ParquetConfig};
use parquet_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all PARQUET_LOG* env vars to prevent cross-test contamination.
fn clear_parquet_env_vars() {
    for key in [
        "PARQUET_LOG",
        "PARQUET_LOG_FORMAT",
        "PARQUET_LOG_THREAD_IDS",
        "PARQUET_LOG_FILE_LINE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults() {
    let config = ParquetConfig::default();
    assert_eq!(config.logging.effective_filter(), "parquet=info");
    assert_eq!(config.logging.effective_format(), LogFormat::Full);
    assert!(config.logging.effective_with_target());
    assert!(config.logging.effective_with_thread_ids());
    assert!(config.logging.effective_with_file_and_line());
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_parquet_env_vars();

    let dir = tempdir();
    let config = ParquetConfig::load(dir.path()).unwrap();
    assert!(config.logging.filter.is_none());
    assert!(config.logging.format.is_none());
}

#[test]
fn test_env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_parquet_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("parquet.toml"),
        r#"
[logging]
filter = "parquet::bridge=debug"
format = "full"
with_thread_ids = true
"#,
    )
    .unwrap();

    std::env::set_var("PARQUET_LOG_FORMAT", "compact");
    std::env::set_var("PARQUET_LOG_THREAD_IDS", "false");

    let config = ParquetConfig::load(dir.path()).unwrap();
    assert_eq!(config.logging.effective_filter(), "parquet::bridge=debug");
    assert_eq!(config.logging.format, Some(LogFormat::Compact));
    assert_eq!(config.logging.with_thread_ids, Some(false));

    clear_parquet_env_vars();
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_parquet_env_vars();

    std::env::set_var("PARQUET_LOG_FORMAT", "fancy");
    std::env::set_var("PARQUET_LOG_FILE_LINE", "maybe");

    let dir = tempdir();
    let config = ParquetConfig::load(dir.path()).unwrap();
    assert!(config.logging.format.is_none());
    assert!(config.logging.with_file_and_line.is_none());

    clear_parquet_env_vars();
}

#[test]
fn test_log_env_var_overrides_project_filter() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_parquet_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("parquet.toml"),
        "[logging]\nfilter = \"parquet=warn\"\n",
    )
    .unwrap();

    std::env::set_var("PARQUET_LOG", "parquet::bridge=trace");
    let config = ParquetConfig::load(dir.path()).unwrap();
    assert_eq!(config.logging.effective_filter(), "parquet::bridge=trace");

    clear_parquet_env_vars();
    let config = ParquetConfig::load(dir.path()).unwrap();
    assert_eq!(config.logging.effective_filter(), "parquet=warn");
}

#[test]
fn test_invalid_log_env_var_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_parquet_env_vars();

    std::env::set_var("PARQUET_LOG", "parquet=loud");

    let dir = tempdir();
    let config = ParquetConfig::load(dir.path()).unwrap();
    assert!(config.logging.filter.is_none());

    clear_parquet_env_vars();
}

#[test]
fn test_invalid_toml_in_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_parquet_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("parquet.toml"), "[logging\nfilter = ").unwrap();

    let err = ParquetConfig::load(dir.path()).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("parquet.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_from_toml_unknown_keys_ignored() {
    let config = ParquetConfig::from_toml(
        r#"
[logging]
format = "compact"
retention_days = 7

[storage]
page_size = 1024
"#,
    )
    .unwrap();
    assert_eq!(config.logging.effective_format(), LogFormat::Compact);
}

#[test]
fn test_from_toml_rejects_unknown_format() {
    let err = ParquetConfig::from_toml("[logging]\nformat = \"json\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_bad_filter() {
    let err = ParquetConfig::from_toml("[logging]\nfilter = \"parquet=loud\"\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "logging.filter"),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn test_log_format_from_str() {
    assert_eq!("FULL".parse::<LogFormat>(), Ok(LogFormat::Full));
    assert_eq!("compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
    assert!("pretty".parse::<LogFormat>().is_err());
}
