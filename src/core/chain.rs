//! The ordered chain of accepted words.
//!
//! Chains are immutable values: `append` and `truncated` return a new chain
//! and leave the original untouched, so a live chain and a persisted copy
//! never alias.

use super::word::Word;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural problems found when rebuilding a chain from stored words.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChainError {
    #[error("Chain must contain at least the source word")]
    Empty,

    #[error("Word '{word}' appears more than once")]
    DuplicateWord { word: String },

    #[error("'{next}' at position {index} does not link from '{previous}'")]
    NotAdjacent {
        index: usize,
        previous: String,
        next: String,
    },
}

/// Accepted words from the source word up to the latest link.
///
/// Invariants: never empty, no word appears twice, and each consecutive pair
/// is adjacent.
///
/// # Example
///
/// ```rust
/// use wordchain::core::{AttemptChain, Word};
///
/// let chain = AttemptChain::new(Word::parse("care").unwrap());
/// let longer = chain.append(Word::parse("cure").unwrap());
///
/// assert_eq!(chain.len(), 1); // original unchanged
/// assert_eq!(longer.link_count(), 1);
/// assert_eq!(longer.last().as_str(), "cure");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Word>", into = "Vec<Word>")]
pub struct AttemptChain {
    words: Vec<Word>,
}

impl AttemptChain {
    /// A chain holding only the source word.
    pub fn new(source: Word) -> Self {
        Self {
            words: vec![source],
        }
    }

    /// Rebuild a chain, checking every structural invariant.
    pub fn from_words(words: Vec<Word>) -> Result<Self, ChainError> {
        if words.is_empty() {
            return Err(ChainError::Empty);
        }

        for (index, word) in words.iter().enumerate() {
            if words[..index].contains(word) {
                return Err(ChainError::DuplicateWord {
                    word: word.to_string(),
                });
            }
            if index > 0 && !words[index - 1].is_adjacent_to(word) {
                return Err(ChainError::NotAdjacent {
                    index,
                    previous: words[index - 1].to_string(),
                    next: word.to_string(),
                });
            }
        }

        Ok(Self { words })
    }

    /// Return a new chain with `word` added at the end.
    ///
    /// Callers are responsible for checking reuse and adjacency first; the
    /// machine does this through its guards.
    pub fn append(&self, word: Word) -> Self {
        let mut words = self.words.clone();
        words.push(word);
        Self { words }
    }

    /// Return a new chain keeping positions `0..=index`, or `None` when
    /// `index` is past the end.
    pub fn truncated(&self, index: usize) -> Option<Self> {
        if index >= self.words.len() {
            return None;
        }
        Some(Self {
            words: self.words[..=index].to_vec(),
        })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words after the source word.
    pub fn links(&self) -> &[Word] {
        &self.words[1..]
    }

    pub fn source(&self) -> &Word {
        &self.words[0]
    }

    pub fn last(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; a chain holds at least its source word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of links, not counting the source word.
    pub fn link_count(&self) -> usize {
        self.words.len() - 1
    }
}

impl TryFrom<Vec<Word>> for AttemptChain {
    type Error = ChainError;

    fn try_from(words: Vec<Word>) -> Result<Self, Self::Error> {
        Self::from_words(words)
    }
}

impl From<AttemptChain> for Vec<Word> {
    fn from(chain: AttemptChain) -> Self {
        chain.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    fn chain_of(words: &[&str]) -> AttemptChain {
        AttemptChain::from_words(words.iter().map(|s| w(s)).collect()).unwrap()
    }

    #[test]
    fn new_chain_holds_source_only() {
        let chain = AttemptChain::new(w("wrong"));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.link_count(), 0);
        assert_eq!(chain.source(), chain.last());
        assert!(chain.links().is_empty());
    }

    #[test]
    fn append_is_copy_on_write() {
        let chain = AttemptChain::new(w("care"));
        let next = chain.append(w("cure"));

        assert_eq!(chain.words(), &[w("care")]);
        assert_eq!(next.words(), &[w("care"), w("cure")]);
    }

    #[test]
    fn truncated_keeps_prefix_inclusive() {
        let chain = chain_of(&["care", "cure", "curse"]);

        let cut = chain.truncated(1).unwrap();
        assert_eq!(cut.words(), &[w("care"), w("cure")]);
        assert_eq!(chain.len(), 3);

        assert_eq!(chain.truncated(0).unwrap().words(), &[w("care")]);
        assert_eq!(chain.truncated(2).unwrap(), chain);
        assert!(chain.truncated(3).is_none());
    }

    #[test]
    fn from_words_rejects_empty() {
        assert_eq!(AttemptChain::from_words(vec![]), Err(ChainError::Empty));
    }

    #[test]
    fn from_words_rejects_duplicates() {
        let result = AttemptChain::from_words(vec![w("care"), w("cure"), w("care")]);
        assert!(matches!(result, Err(ChainError::DuplicateWord { .. })));
    }

    #[test]
    fn from_words_rejects_broken_links() {
        let result = AttemptChain::from_words(vec![w("care"), w("dog")]);
        assert_eq!(
            result,
            Err(ChainError::NotAdjacent {
                index: 1,
                previous: "care".to_string(),
                next: "dog".to_string(),
            })
        );
    }

    #[test]
    fn chain_round_trips_through_json() {
        let chain = chain_of(&["grin", "ring", "rings"]);
        let json = serde_json::to_string(&chain).unwrap();
        assert_eq!(json, r#"["grin","ring","rings"]"#);

        let back: AttemptChain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chain);
    }

    #[test]
    fn deserialization_enforces_invariants() {
        assert!(serde_json::from_str::<AttemptChain>("[]").is_err());
        assert!(serde_json::from_str::<AttemptChain>(r#"["care","dog"]"#).is_err());
    }
}
