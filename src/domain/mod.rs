//! Domain value objects and types.
//!
//! This module contains the types the scorer works with: the word being
//! scored, the resulting score, and the character classification rules.

pub mod character_class;
pub mod errors;
pub mod score;
pub mod word;

pub use character_class::{CharacterClass, YPolicy};
pub use errors::ValidationError;
pub use score::{Score, ScoreBreakdown};
pub use word::Word;
