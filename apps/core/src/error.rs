use std::io;
use thiserror::Error;

/// Crate-wide error type. The responder core itself is total; these variants
/// cover the edges around it (label parsing, demo configuration, output).
#[derive(Debug, Error)]
pub enum AppError {
    /// A value supplied by a caller could not be interpreted (e.g. an unknown
    /// intent or urgency label).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Represents configuration-related errors (e.g. a malformed environment variable).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents JSON serialization failures.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::InvalidInput(s) => AppError::InvalidInput(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Serialization(e) => {
                AppError::Io(io::Error::other(format!("Serialization error: {}", e)))
            }
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
        }
    }
}

impl From<tracing_subscriber::filter::ParseError> for AppError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        AppError::Config(format!("Log filter error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AppError::InvalidInput("unknown intent 'foo'".to_string());
        assert_eq!(err.to_string(), "Invalid input: unknown intent 'foo'");

        let err = AppError::Config("bad level".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad level");
    }

    #[test]
    fn test_clone_keeps_message() {
        let err = AppError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cloned = err.clone();
        assert!(matches!(cloned, AppError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
