//! Score value object.

use super::character_class::CharacterClass;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative point total for a word.
///
/// Serializes as a bare number.
///
/// # Example
///
/// ```
/// use word_points::domain::Score;
///
/// let score = Score::new(3) + Score::new(4);
/// assert_eq!(score.value(), 7);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Score(u64);

impl Score {
    /// The score of an empty word.
    pub const ZERO: Score = Score(0);

    /// Create a score from a raw point total.
    pub const fn new(points: u64) -> Self {
        Self(points)
    }

    /// Get the raw point total.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Score {
    fn from(points: u64) -> Self {
        Self(points)
    }
}

impl From<Score> for u64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::ZERO, Add::add)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-class character counts for a scored word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Number of vowels
    pub vowels: u64,

    /// Number of consonants
    pub consonants: u64,

    /// Number of characters that scored nothing
    pub others: u64,
}

impl ScoreBreakdown {
    /// Count one character of the given class.
    pub fn record(&mut self, class: CharacterClass) {
        match class {
            CharacterClass::Vowel => self.vowels += 1,
            CharacterClass::Consonant => self.consonants += 1,
            CharacterClass::Other => self.others += 1,
        }
    }

    /// Total score implied by the counts.
    pub fn total(&self) -> Score {
        Score::new(self.vowels * CharacterClass::Vowel.points())
            + Score::new(self.consonants * CharacterClass::Consonant.points())
            + Score::new(self.others * CharacterClass::Other.points())
    }

    /// Number of characters counted, after lowercasing.
    pub fn characters(&self) -> u64 {
        self.vowels + self.consonants + self.others
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_add_and_sum() {
        assert_eq!(Score::new(2) + Score::new(5), Score::new(7));

        let total: Score = [1, 2, 3].into_iter().map(Score::new).sum();
        assert_eq!(total.value(), 6);

        let mut score = Score::ZERO;
        score += Score::new(4);
        assert_eq!(u64::from(score), 4);
    }

    #[test]
    fn test_score_saturates() {
        assert_eq!(Score::new(u64::MAX) + Score::new(1), Score::new(u64::MAX));
    }

    #[test]
    fn test_score_display() {
        assert_eq!(format!("{}", Score::new(7)), "7");
    }

    #[test]
    fn test_score_serialization() {
        let json = serde_json::to_string(&Score::new(7)).unwrap();
        assert_eq!(json, "7");
        let score: Score = serde_json::from_str("12").unwrap();
        assert_eq!(score, Score::new(12));
    }

    #[test]
    fn test_breakdown_total() {
        let mut breakdown = ScoreBreakdown::default();
        breakdown.record(CharacterClass::Consonant);
        breakdown.record(CharacterClass::Vowel);
        breakdown.record(CharacterClass::Other);
        breakdown.record(CharacterClass::Consonant);

        assert_eq!(breakdown.vowels, 1);
        assert_eq!(breakdown.consonants, 2);
        assert_eq!(breakdown.others, 1);
        assert_eq!(breakdown.characters(), 4);
        assert_eq!(breakdown.total(), Score::new(5));
    }
}
