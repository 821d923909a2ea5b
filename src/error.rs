//! Error types for word-points.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when scoring input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// Input was not a string-like sequence of characters
    #[error("Invalid input: expected a string, got {0}")]
    InvalidInput(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ScoringError
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScoringError::InvalidInput("number".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input: expected a string, got number"
        );

        let err = ConfigError::Other("bad .env".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad .env");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            var: "WORD_POINTS_Y_AS_VOWEL".to_string(),
            reason: "Must be a boolean".to_string(),
        };
        assert!(err.to_string().contains("WORD_POINTS_Y_AS_VOWEL"));
        assert!(err.to_string().contains("Must be a boolean"));
    }
}
