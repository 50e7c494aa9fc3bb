//! Validated, normalized words.

use super::adjacency;
use super::rejection::Rejection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty, lowercase, ASCII-alphabetic word.
///
/// Words are only constructed through [`Word::parse`] (or deserialization,
/// which runs the same checks), so every `Word` in the crate is already
/// normalized and can be compared with `==`.
///
/// # Example
///
/// ```rust
/// use wordchain::core::{Rejection, Word};
///
/// let word = Word::parse("  Care \n").unwrap();
/// assert_eq!(word.as_str(), "care");
///
/// assert_eq!(Word::parse("   "), Err(Rejection::EmptyInput));
/// assert_eq!(Word::parse("c4re"), Err(Rejection::InvalidCharacters));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Sanitize raw player input: trim, lowercase, then require A-Z only.
    pub fn parse(raw: &str) -> Result<Self, Rejection> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(Rejection::EmptyInput);
        }
        if !normalized.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(Rejection::InvalidCharacters);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `next` may legally follow this word in a chain.
    pub fn is_adjacent_to(&self, next: &Word) -> bool {
        adjacency::is_adjacent(&self.0, &next.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Word {
    type Error = Rejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Word {
    type Error = Rejection;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
