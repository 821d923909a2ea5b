//! Word scoring.
//!
//! This module provides the scorer that turns a word into a point total:
//! 1 point per vowel, 2 per consonant, nothing for anything else.

pub mod word_scorer;

pub use word_scorer::{points_for_word, WordScorer};
