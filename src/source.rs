//! Where puzzle definitions come from.

use crate::core::{PuzzleError, PuzzleId, PuzzleSet};
use async_trait::async_trait;
use std::collections::HashMap;

/// Loads the definition of a daily puzzle.
#[async_trait]
pub trait PuzzleSource: Send + Sync {
    async fn load(&self, id: PuzzleId) -> Result<PuzzleSet, PuzzleError>;
}

/// Serves puzzle documents held in memory.
///
/// Documents are parsed on every load, so a malformed one is reported when
/// its puzzle is requested rather than when it is inserted.
#[derive(Clone, Debug, Default)]
pub struct StaticPuzzleSource {
    documents: HashMap<PuzzleId, String>,
}

impl StaticPuzzleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the JSON document for `id`.
    pub fn with_document(mut self, id: PuzzleId, json: impl Into<String>) -> Self {
        self.documents.insert(id, json.into());
        self
    }
}

#[async_trait]
impl PuzzleSource for StaticPuzzleSource {
    async fn load(&self, id: PuzzleId) -> Result<PuzzleSet, PuzzleError> {
        let json = self
            .documents
            .get(&id)
            .ok_or(PuzzleError::NotFound { id })?;
        PuzzleSet::from_json(id, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;

    #[tokio::test]
    async fn serves_known_documents() {
        let source = StaticPuzzleSource::new().with_document(
            PuzzleId(1),
            r#"{ "source_word": "care", "destination_word": "cure", "best_path_length": 1 }"#,
        );

        let puzzle = source.load(PuzzleId(1)).await.unwrap();
        assert_eq!(puzzle.default_level(), &Level::easy());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let source = StaticPuzzleSource::new();
        assert_eq!(
            source.load(PuzzleId(8)).await,
            Err(PuzzleError::NotFound { id: PuzzleId(8) })
        );
    }

    #[tokio::test]
    async fn malformed_document_surfaces_on_load() {
        let source = StaticPuzzleSource::new().with_document(PuzzleId(2), "[]");
        assert!(matches!(
            source.load(PuzzleId(2)).await,
            Err(PuzzleError::Parse { .. })
        ));
    }
}
