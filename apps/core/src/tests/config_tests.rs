//! Configuration Tests
//!
//! Environment handling for the demo binary.

use crate::config::{DemoConfig, LogFormat, LOG_FORMAT_VAR, LOG_LEVEL_VAR};
use crate::error::AppError;
use crate::telemetry::build_filter;

#[test]
fn test_defaults_when_unset() {
    temp_env::with_vars_unset([LOG_LEVEL_VAR, LOG_FORMAT_VAR], || {
        let config = DemoConfig::from_env().unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
    });
}

#[test]
fn test_values_from_env() {
    temp_env::with_vars(
        [(LOG_LEVEL_VAR, Some("DEBUG")), (LOG_FORMAT_VAR, Some("json"))],
        || {
            let config = DemoConfig::from_env().unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.log_format, LogFormat::Json);
        },
    );
}

#[test]
fn test_invalid_level_is_config_error() {
    temp_env::with_vars(
        [(LOG_LEVEL_VAR, Some("loud")), (LOG_FORMAT_VAR, None)],
        || {
            let err = DemoConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        },
    );
}

#[test]
fn test_invalid_format_is_config_error() {
    temp_env::with_vars(
        [(LOG_LEVEL_VAR, None), (LOG_FORMAT_VAR, Some("xml"))],
        || {
            let err = DemoConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
            assert!(err.to_string().contains(LOG_FORMAT_VAR));
        },
    );
}

#[test]
fn test_filter_builds_without_rust_log() {
    temp_env::with_var_unset("RUST_LOG", || {
        assert!(build_filter("warn").is_ok());
    });
}
