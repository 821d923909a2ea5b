//! Word Points - deterministic word scoring.
//!
//! A word scores 1 point per vowel, 2 points per consonant and nothing for
//! any other character. Scoring is case-insensitive and pure, so a scorer can
//! be shared freely across threads.
//!
//! # Architecture
//!
//! - **domain**: Value objects for words, scores and character classes
//! - **scoring**: The word scorer
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **report**: Line rendering for the `word-points` binary

pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod scoring;

pub use config::ScoringConfig;
pub use domain::{CharacterClass, Score, ScoreBreakdown, Word, YPolicy};
pub use error::{ConfigError, ScoringError};
pub use scoring::{points_for_word, WordScorer};
