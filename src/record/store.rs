//! Key-value persistence of attempt records.

use super::{AttemptRecord, RecordError};
use crate::core::PuzzleId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

const KEY_PREFIX: &str = "chain_letters.puzzles.";

/// Errors raised by an [`AttemptStore`]
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The underlying storage could not be read or written
    #[error("Store backend failed: {0}")]
    Backend(String),

    /// A stored value could not be decoded
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Storage key for a puzzle's record.
pub fn storage_key(id: PuzzleId) -> String {
    format!("{KEY_PREFIX}{id}")
}

/// Opaque key-value store for attempt records.
///
/// Implementations must not hand out storage that aliases the caller's
/// record; [`MemoryStore`] keeps encoded strings for that reason.
pub trait AttemptStore {
    fn load(&self, id: PuzzleId) -> Result<Option<AttemptRecord>, StoreError>;

    fn save(&self, record: &AttemptRecord) -> Result<(), StoreError>;
}

/// In-memory store holding JSON-encoded records.
///
/// Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value under `key`, as an external reader would see it.
    pub fn raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.get(key).cloned())
    }

    /// Replace the raw stored value under `key`.
    pub fn put_raw(&self, key: impl Into<String>, value: impl Into<String>) -> Result<(), StoreError> {
        self.entries()?.insert(key.into(), value.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }
}

impl AttemptStore for MemoryStore {
    fn load(&self, id: PuzzleId) -> Result<Option<AttemptRecord>, StoreError> {
        match self.raw(&storage_key(id))? {
            Some(json) if !json.is_empty() => Ok(Some(AttemptRecord::from_json(&json)?)),
            _ => Ok(None),
        }
    }

    fn save(&self, record: &AttemptRecord) -> Result<(), StoreError> {
        let json = record.to_json()?;
        self.put_raw(storage_key(record.puzzle_id), json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttemptChain, Level, Word};

    #[test]
    fn key_uses_puzzle_prefix() {
        assert_eq!(storage_key(PuzzleId(42)), "chain_letters.puzzles.42");
    }

    #[test]
    fn missing_and_empty_entries_load_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load(PuzzleId(1)), Ok(None));

        store.put_raw(storage_key(PuzzleId(1)), "").unwrap();
        assert_eq!(store.load(PuzzleId(1)), Ok(None));
    }

    #[test]
    fn saved_record_loads_back() {
        let store = MemoryStore::new();
        let record = AttemptRecord::new(PuzzleId(3)).with_chain(
            Level::easy(),
            AttemptChain::new(Word::parse("care").unwrap()),
        );

        store.save(&record).unwrap();

        assert_eq!(store.load(PuzzleId(3)).unwrap(), Some(record));
        assert!(store.raw("chain_letters.puzzles.3").unwrap().is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clones_share_storage() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.save(&AttemptRecord::new(PuzzleId(9))).unwrap();

        assert!(other.load(PuzzleId(9)).unwrap().is_some());
    }

    #[test]
    fn corrupt_entry_is_a_record_error() {
        let store = MemoryStore::new();
        store.put_raw(storage_key(PuzzleId(5)), "{oops").unwrap();

        assert!(matches!(
            store.load(PuzzleId(5)),
            Err(StoreError::Record(RecordError::DeserializationFailed(_)))
        ));
    }
}
