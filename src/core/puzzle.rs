//! Puzzle definitions: one source/destination pair per difficulty level.

use super::word::Word;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors raised while loading puzzle definitions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PuzzleError {
    #[error("Puzzle {id} could not be parsed: {message}")]
    Parse { id: PuzzleId, message: String },

    #[error("Puzzle {id} level '{level}' has an invalid {field}: '{value}'")]
    InvalidWord {
        id: PuzzleId,
        level: Level,
        field: &'static str,
        value: String,
    },

    #[error("Puzzle {id} level '{level}' uses '{word}' as both source and destination")]
    SameWords {
        id: PuzzleId,
        level: Level,
        word: String,
    },

    #[error("Puzzle {id} level '{level}' has no best path")]
    MissingBestPath { id: PuzzleId, level: Level },

    #[error("Puzzle {id} defines no levels")]
    NoLevels { id: PuzzleId },

    #[error("Puzzle {id} not found")]
    NotFound { id: PuzzleId },
}

/// Numeric identifier of a daily puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleId(pub u32);

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty level name. The set of levels is open-ended.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(String);

impl Level {
    pub const EASY: &'static str = "easy";
    pub const MEDIUM: &'static str = "medium";
    pub const HARD: &'static str = "hard";

    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_lowercase())
    }

    pub fn easy() -> Self {
        Self::new(Self::EASY)
    }

    pub fn medium() -> Self {
        Self::new(Self::MEDIUM)
    }

    pub fn hard() -> Self {
        Self::new(Self::HARD)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One level of one puzzle. Immutable once built.
///
/// `best_path_length` is the authored optimum link count. It is used for
/// scoring only and never for validating a player's chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PuzzleDefinition {
    id: PuzzleId,
    level: Level,
    source_word: Word,
    destination_word: Word,
    best_path_length: usize,
}

impl PuzzleDefinition {
    pub fn new(
        id: PuzzleId,
        level: Level,
        source_word: Word,
        destination_word: Word,
        best_path_length: usize,
    ) -> Result<Self, PuzzleError> {
        if source_word == destination_word {
            return Err(PuzzleError::SameWords {
                id,
                level,
                word: source_word.to_string(),
            });
        }
        if best_path_length == 0 {
            return Err(PuzzleError::MissingBestPath { id, level });
        }
        Ok(Self {
            id,
            level,
            source_word,
            destination_word,
            best_path_length,
        })
    }

    pub fn id(&self) -> PuzzleId {
        self.id
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn source_word(&self) -> &Word {
        &self.source_word
    }

    pub fn destination_word(&self) -> &Word {
        &self.destination_word
    }

    pub fn best_path_length(&self) -> usize {
        self.best_path_length
    }
}

/// The authored optimal path, either as a list or a comma-joined string.
#[derive(Deserialize)]
#[serde(untagged)]
enum BestPath {
    List(Vec<String>),
    Joined(String),
}

impl BestPath {
    fn words(self) -> Vec<String> {
        let raw = match self {
            Self::List(words) => words,
            Self::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect()
    }
}

#[derive(Deserialize)]
struct RawDefinition {
    source_word: String,
    destination_word: String,
    #[serde(default)]
    best_path: Option<BestPath>,
    #[serde(default)]
    best_path_length: Option<usize>,
}

impl RawDefinition {
    fn into_definition(self, id: PuzzleId, level: Level) -> Result<PuzzleDefinition, PuzzleError> {
        let invalid = |field: &'static str, value: &str| PuzzleError::InvalidWord {
            id,
            level: level.clone(),
            field,
            value: value.to_string(),
        };
        let source = Word::parse(&self.source_word)
            .map_err(|_| invalid("source_word", &self.source_word))?;
        let destination = Word::parse(&self.destination_word)
            .map_err(|_| invalid("destination_word", &self.destination_word))?;

        let best_path_length = match (self.best_path_length, self.best_path) {
            (Some(length), _) => length,
            (None, Some(path)) => {
                let words = path.words();
                let skip = usize::from(words.first().is_some_and(|w| source == w.as_str()));
                words.len() - skip
            }
            (None, None) => 0,
        };

        PuzzleDefinition::new(id, level, source, destination, best_path_length)
    }
}

/// Every level of one puzzle.
///
/// # Example
///
/// ```rust
/// use wordchain::core::{Level, PuzzleId, PuzzleSet};
///
/// let json = r#"{
///     "id": 7,
///     "easy": { "source_word": "care", "destination_word": "cure", "best_path_length": 1 },
///     "hard": { "source_word": "grin", "destination_word": "rings", "best_path": ["ring", "rings"] }
/// }"#;
///
/// let puzzle = PuzzleSet::from_json(PuzzleId(7), json).unwrap();
/// assert_eq!(puzzle.level(&Level::hard()).unwrap().best_path_length(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleSet {
    id: PuzzleId,
    levels: BTreeMap<Level, PuzzleDefinition>,
    default_level: Level,
}

impl PuzzleSet {
    pub fn new(
        id: PuzzleId,
        definitions: impl IntoIterator<Item = PuzzleDefinition>,
    ) -> Result<Self, PuzzleError> {
        let levels: BTreeMap<Level, PuzzleDefinition> = definitions
            .into_iter()
            .map(|d| (d.level().clone(), d))
            .collect();
        let easy = Level::easy();
        let default_level = if levels.contains_key(&easy) {
            easy
        } else {
            match levels.keys().next() {
                Some(first) => first.clone(),
                None => return Err(PuzzleError::NoLevels { id }),
            }
        };
        Ok(Self {
            id,
            levels,
            default_level,
        })
    }

    /// Parse a puzzle document.
    ///
    /// Accepts the per-level layout (`{"easy": {...}, "hard": {...}}`, with
    /// an optional `id` key) and the legacy flat layout, which becomes the
    /// `easy` level.
    pub fn from_json(id: PuzzleId, json: &str) -> Result<Self, PuzzleError> {
        let parse_error = |message: String| PuzzleError::Parse { id, message };

        let value: Value = serde_json::from_str(json).map_err(|e| parse_error(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(parse_error("expected a JSON object".to_string()));
        };

        let mut definitions = Vec::new();
        if map.contains_key("source_word") {
            let raw: RawDefinition = serde_json::from_value(Value::Object(map))
                .map_err(|e| parse_error(e.to_string()))?;
            definitions.push(raw.into_definition(id, Level::easy())?);
        } else {
            for (key, value) in map {
                if key == "id" {
                    continue;
                }
                let raw: RawDefinition = serde_json::from_value(value)
                    .map_err(|e| parse_error(format!("level '{key}': {e}")))?;
                definitions.push(raw.into_definition(id, Level::new(&key))?);
            }
        }

        Self::new(id, definitions)
    }

    pub fn id(&self) -> PuzzleId {
        self.id
    }

    pub fn level(&self, level: &Level) -> Option<&PuzzleDefinition> {
        self.levels.get(level)
    }

    pub fn levels(&self) -> impl Iterator<Item = &Level> {
        self.levels.keys()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &PuzzleDefinition> {
        self.levels.values()
    }

    /// `easy` when defined, otherwise the first level by name.
    pub fn default_level(&self) -> &Level {
        &self.default_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leveled_layout() {
        let json = r#"{
            "id": 3,
            "easy": { "source_word": "care", "destination_word": "cure", "best_path_length": 1 },
            "Medium": { "source_word": "kiss", "destination_word": "skit", "best_path": "skis,skit" }
        }"#;
        let puzzle = PuzzleSet::from_json(PuzzleId(3), json).unwrap();

        let levels: Vec<_> = puzzle.levels().map(Level::as_str).collect();
        assert_eq!(levels, vec!["easy", "medium"]);

        let medium = puzzle.level(&Level::medium()).unwrap();
        assert_eq!(medium.source_word(), "kiss");
        assert_eq!(medium.best_path_length(), 2);
        assert_eq!(medium.id(), PuzzleId(3));
    }

    #[test]
    fn legacy_flat_layout_becomes_easy() {
        let json = r#"{ "source_word": "Wrong", "destination_word": "right", "best_path": ["wrung", "wring", "right"] }"#;
        let puzzle = PuzzleSet::from_json(PuzzleId(1), json).unwrap();

        let easy = puzzle.level(&Level::easy()).unwrap();
        assert_eq!(easy.source_word(), "wrong");
        assert_eq!(easy.best_path_length(), 3);
        assert_eq!(puzzle.default_level(), &Level::easy());
    }

    #[test]
    fn best_path_starting_at_source_does_not_count_source() {
        let json = r#"{ "source_word": "care", "destination_word": "cure", "best_path": ["care", "cure"] }"#;
        let puzzle = PuzzleSet::from_json(PuzzleId(2), json).unwrap();
        assert_eq!(puzzle.level(&Level::easy()).unwrap().best_path_length(), 1);
    }

    #[test]
    fn default_level_falls_back_to_first_by_name() {
        let json = r#"{
            "hard": { "source_word": "grin", "destination_word": "rings", "best_path_length": 2 },
            "expert": { "source_word": "free", "destination_word": "reefs", "best_path_length": 2 }
        }"#;
        let puzzle = PuzzleSet::from_json(PuzzleId(4), json).unwrap();
        assert_eq!(puzzle.default_level().as_str(), "expert");
    }

    #[test]
    fn rejects_missing_best_path() {
        let json = r#"{ "source_word": "care", "destination_word": "cure" }"#;
        assert!(matches!(
            PuzzleSet::from_json(PuzzleId(5), json),
            Err(PuzzleError::MissingBestPath { .. })
        ));
    }

    #[test]
    fn rejects_identical_words() {
        let json = r#"{ "source_word": "care", "destination_word": "CARE", "best_path_length": 1 }"#;
        assert!(matches!(
            PuzzleSet::from_json(PuzzleId(6), json),
            Err(PuzzleError::SameWords { .. })
        ));
    }

    #[test]
    fn rejects_invalid_words() {
        let json = r#"{ "source_word": "ca re", "destination_word": "cure", "best_path_length": 1 }"#;
        match PuzzleSet::from_json(PuzzleId(8), json) {
            Err(PuzzleError::InvalidWord { field, .. }) => assert_eq!(field, "source_word"),
            other => panic!("Expected InvalidWord, got {other:?}"),
        }
    }

    #[test]
    fn rejects_documents_without_levels() {
        assert!(matches!(
            PuzzleSet::from_json(PuzzleId(9), r#"{ "id": 9 }"#),
            Err(PuzzleError::NoLevels { .. })
        ));
        assert!(matches!(
            PuzzleSet::from_json(PuzzleId(9), "[1, 2]"),
            Err(PuzzleError::Parse { .. })
        ));
    }
}
