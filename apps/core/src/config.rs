//! Demo configuration read from the environment.
//!
//! The responder core takes no configuration; only the `supportdesk` binary
//! reads these variables (after loading an optional `.env` file).

use std::env;
use std::str::FromStr;

use crate::error::AppError;

pub const LOG_LEVEL_VAR: &str = "SUPPORTDESK_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "SUPPORTDESK_LOG_FORMAT";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// How log events are rendered on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl DemoConfig {
    /// Build the configuration from `SUPPORTDESK_*` variables, falling back
    /// to defaults for unset ones.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(level) = env::var(LOG_LEVEL_VAR) {
            let level = level.trim().to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(AppError::Config(format!(
                    "{} must be one of {:?}, got '{}'",
                    LOG_LEVEL_VAR, LOG_LEVELS, level
                )));
            }
            config.log_level = level;
        }

        if let Ok(format) = env::var(LOG_FORMAT_VAR) {
            config.log_format = format.parse()?;
        }

        Ok(config)
    }
}
