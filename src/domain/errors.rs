//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided text does not name a known `y` policy.
    InvalidYPolicy(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidYPolicy(value) => write!(
                f,
                "Invalid y policy: {} (expected \"vowel\" or \"consonant\")",
                value
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidYPolicy("maybe".to_string());
        assert!(err.to_string().contains("maybe"));
        assert!(err.to_string().contains("consonant"));
    }
}
