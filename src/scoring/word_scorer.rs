//! Word scoring implementation.
//!
//! Characters are lowercased before classification, so mixed-case words score
//! the same as their lowercase form. Characters whose lowercase mapping
//! expands into several characters are scored by that expansion.

use crate::config::ScoringConfig;
use crate::domain::{CharacterClass, Score, ScoreBreakdown, Word, YPolicy};
use crate::error::{ScoringError, ScoringResult};
use serde_json::Value;
use tracing::{debug, trace};

/// Score a word with the default policy (`y` is a consonant).
///
/// # Example
///
/// ```
/// use word_points::points_for_word;
///
/// assert_eq!(points_for_word("test").value(), 7);
/// assert_eq!(points_for_word("").value(), 0);
/// ```
pub fn points_for_word(word: &str) -> Score {
    WordScorer::default().score(word)
}

/// Stateless word scorer carrying a classification policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordScorer {
    y_policy: YPolicy,
}

impl WordScorer {
    /// Create a scorer with the given `y` policy.
    pub fn new(y_policy: YPolicy) -> Self {
        Self { y_policy }
    }

    /// Create a scorer from loaded configuration.
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.y_policy)
    }

    /// The `y` policy in use.
    pub fn y_policy(&self) -> YPolicy {
        self.y_policy
    }

    /// Classify a single character.
    ///
    /// Uses the first character of the lowercase mapping of `c`.
    pub fn classify(&self, c: char) -> CharacterClass {
        let lower = c.to_lowercase().next().unwrap_or(c);
        CharacterClass::of(lower, self.y_policy)
    }

    /// Score a word.
    pub fn score(&self, word: &str) -> Score {
        let score = word
            .chars()
            .flat_map(char::to_lowercase)
            .map(|c| Score::new(CharacterClass::of(c, self.y_policy).points()))
            .sum();

        trace!(word, %score, "Scored word");
        score
    }

    /// Score a word and report how many characters fell into each class.
    pub fn breakdown(&self, word: &str) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();
        for c in Word::new(word).lowercase_chars() {
            breakdown.record(CharacterClass::of(c, self.y_policy));
        }
        breakdown
    }

    /// Total score over several words.
    pub fn score_words<I, S>(&self, words: I) -> Score
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().map(|w| self.score(w.as_ref())).sum()
    }

    /// Score a dynamically typed value.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::InvalidInput` if the value is not a JSON string.
    pub fn score_value(&self, value: &Value) -> ScoringResult<Score> {
        match value {
            Value::String(word) => Ok(self.score(word)),
            other => {
                let kind = json_type_name(other);
                debug!(kind, "Rejected non-string input");
                Err(ScoringError::InvalidInput(kind.to_string()))
            }
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
