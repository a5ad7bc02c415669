//! Error types for Periodize

use thiserror::Error;

/// Result type alias for Periodize operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Periodize operations
#[derive(Error, Debug)]
pub enum Error {
    /// Too few complete weeks between the start and the event
    #[error("The total number of weeks must be at least {minimum}.")]
    InsufficientWeeks { weeks: u32, minimum: u32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error means the plan window is too short
    pub fn is_insufficient_weeks(&self) -> bool {
        matches!(self, Error::InsufficientWeeks { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_weeks_message() {
        let err = Error::InsufficientWeeks {
            weeks: 3,
            minimum: 8,
        };
        assert_eq!(
            err.to_string(),
            "The total number of weeks must be at least 8."
        );
        assert!(err.is_insufficient_weeks());
    }

    #[test]
    fn test_config_message() {
        let err = Error::Config("bad date".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad date");
        assert!(!err.is_insufficient_weeks());
    }
}
