//! Configuration management for word-points.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is loaded first if present.

use crate::domain::YPolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Environment variable selecting whether `y` scores as a vowel.
pub const Y_AS_VOWEL_VAR: &str = "WORD_POINTS_Y_AS_VOWEL";

/// Environment variable naming the `y` policy (`vowel` or `consonant`).
///
/// Takes precedence over `WORD_POINTS_Y_AS_VOWEL` when both are set.
pub const Y_POLICY_VAR: &str = "WORD_POINTS_Y_POLICY";

/// Environment variable holding the fallback log level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Configuration for the word scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    /// How `y` is classified (default: consonant)
    pub y_policy: YPolicy,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl ScoringConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `WORD_POINTS_Y_POLICY`: `vowel` or `consonant` (default: consonant)
    /// - `WORD_POINTS_Y_AS_VOWEL`: score `y` as a vowel (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::Other(format!("Failed to load .env file: {}", e)));
            }
        }

        let y_policy = match Self::parse_env_y_policy(Y_POLICY_VAR)? {
            Some(policy) => policy,
            None if Self::parse_env_bool(Y_AS_VOWEL_VAR, false)? => YPolicy::Vowel,
            None => YPolicy::Consonant,
        };

        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(ScoringConfig {
            y_policy,
            log_level,
        })
    }

    /// Parse an environment variable as a `YPolicy`, if set.
    fn parse_env_y_policy(var_name: &str) -> ConfigResult<Option<YPolicy>> {
        match env::var(var_name) {
            Ok(val) => val
                .parse::<YPolicy>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true/false, 1/0 or yes/no, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            y_policy: YPolicy::default(),
            log_level: "error".to_string(),
        }
    }
}
