//! Word value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A word to be scored.
///
/// Any string is a valid word, including the empty string. Deserialization
/// only accepts JSON strings, so numbers, booleans and other shapes are
/// rejected before they reach the scorer.
///
/// # Example
///
/// ```
/// use word_points::domain::Word;
///
/// let word = Word::new("Test");
/// assert_eq!(word.as_str(), "Test");
/// assert_eq!(word.to_lowercase().as_str(), "test");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Create a new Word.
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }

    /// Get the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the word has no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The lowercase form used for classification.
    pub fn to_lowercase(&self) -> Word {
        Word(self.0.to_lowercase())
    }

    /// Lowercased characters in order.
    ///
    /// A single character may lowercase to several (for example `'İ'`), so
    /// this can yield more items than `as_str().chars()`.
    pub fn lowercase_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().flat_map(char::to_lowercase)
    }
}

impl From<&str> for Word {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

impl From<String> for Word {
    fn from(word: String) -> Self {
        Self(word)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Word {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string only
impl<'de> Deserialize<'de> for Word {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Word)
    }
}

// Display support
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_accepts_empty() {
        let word = Word::new("");
        assert!(word.is_empty());
        assert_eq!(word.lowercase_chars().count(), 0);
    }

    #[test]
    fn test_word_lowercase() {
        let word = Word::new("TeSt");
        assert_eq!(word.to_lowercase(), Word::new("test"));
        assert_eq!(word.lowercase_chars().collect::<String>(), "test");
    }

    #[test]
    fn test_word_lowercase_chars_expand() {
        let word = Word::new("\u{0130}");
        assert_eq!(word.as_str().chars().count(), 1);
        assert_eq!(word.lowercase_chars().count(), 2);
    }

    #[test]
    fn test_word_display() {
        assert_eq!(format!("{}", Word::from("hello")), "hello");
    }

    #[test]
    fn test_word_serialization() {
        let json = serde_json::to_string(&Word::new("test")).unwrap();
        assert_eq!(json, "\"test\"");
    }

    #[test]
    fn test_word_deserialization() {
        let word: Word = serde_json::from_str("\"test\"").unwrap();
        assert_eq!(word.as_str(), "test");
    }

    #[test]
    fn test_word_deserialization_non_string_fails() {
        assert!(serde_json::from_str::<Word>("42").is_err());
        assert!(serde_json::from_str::<Word>("null").is_err());
        assert!(serde_json::from_str::<Word>("[\"a\"]").is_err());
    }
}
