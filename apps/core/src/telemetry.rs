//! Structured logging setup for the demo binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{DemoConfig, LogFormat};
use crate::error::AppError;

/// Build the filter: `RUST_LOG` wins over the configured level.
pub fn build_filter(log_level: &str) -> Result<EnvFilter, AppError> {
    let default_filter = format!("{},supportdesk_core={}", log_level, log_level);

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&default_filter))?;
    Ok(filter)
}

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// the demo transcript.
pub fn init_telemetry(config: &DemoConfig) -> Result<(), AppError> {
    let filter = build_filter(&config.log_level)?;

    let installed = match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_target(false).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| AppError::Config(format!("Failed to install log subscriber: {}", e)))
}
