//! Character classification rules.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Points awarded for a vowel.
pub const VOWEL_POINTS: u64 = 1;

/// Points awarded for a consonant.
pub const CONSONANT_POINTS: u64 = 2;

/// Points awarded for any non-alphabetic character.
pub const OTHER_POINTS: u64 = 0;

/// How the letter `y` is classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YPolicy {
    /// `y` scores as a consonant (default)
    #[default]
    Consonant,

    /// `y` scores as a vowel
    Vowel,
}

impl FromStr for YPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consonant" => Ok(Self::Consonant),
            "vowel" => Ok(Self::Vowel),
            _ => Err(ValidationError::InvalidYPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for YPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consonant => write!(f, "consonant"),
            Self::Vowel => write!(f, "vowel"),
        }
    }
}

/// The scoring class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// One of a, e, i, o, u (and y under `YPolicy::Vowel`)
    Vowel,

    /// Any other alphabetic character
    Consonant,

    /// Digits, punctuation, whitespace, marks
    Other,
}

impl CharacterClass {
    /// Classify a character that has already been lowercased.
    ///
    /// Uppercase ASCII is tolerated, but callers scoring full words should
    /// apply Unicode lowercasing first so that expanding mappings are counted.
    pub fn of(c: char, y_policy: YPolicy) -> Self {
        match c.to_ascii_lowercase() {
            'a' | 'e' | 'i' | 'o' | 'u' => Self::Vowel,
            'y' if y_policy == YPolicy::Vowel => Self::Vowel,
            c if c.is_alphabetic() => Self::Consonant,
            _ => Self::Other,
        }
    }

    /// Points this class contributes to a score.
    pub const fn points(self) -> u64 {
        match self {
            Self::Vowel => VOWEL_POINTS,
            Self::Consonant => CONSONANT_POINTS,
            Self::Other => OTHER_POINTS,
        }
    }
}
