//! Persisted attempts and the key-value store seam.
//!
//! An [`AttemptRecord`] holds one player's chains for every level of a
//! puzzle. Records are plain values: the live machine never shares a chain
//! with a record, so saving and later mutation cannot alias.
//!
//! Records serialize to JSON for the store and to bincode for compact
//! snapshots. Both formats carry a version that is checked on load.

use crate::core::{AttemptChain, Level, PuzzleId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod error;
mod store;

pub use error::RecordError;
pub use store::{storage_key, AttemptStore, MemoryStore, StoreError};

/// Version identifier for the record format
pub const RECORD_VERSION: u32 = 1;

/// A player's chains for one puzzle, keyed by level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Record format version
    pub version: u32,

    pub puzzle_id: PuzzleId,

    /// Level the player last had open
    pub last_level: Option<Level>,

    pub chains: BTreeMap<Level, AttemptChain>,

    pub updated_at: DateTime<Utc>,
}

impl AttemptRecord {
    /// An empty record for `puzzle_id`.
    pub fn new(puzzle_id: PuzzleId) -> Self {
        Self {
            version: RECORD_VERSION,
            puzzle_id,
            last_level: None,
            chains: BTreeMap::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn chain_for(&self, level: &Level) -> Option<&AttemptChain> {
        self.chains.get(level)
    }

    /// Return a new record with `chain` stored under `level`.
    pub fn with_chain(&self, level: Level, chain: AttemptChain) -> Self {
        let mut next = self.clone();
        next.chains.insert(level, chain);
        next.updated_at = Utc::now();
        next
    }

    /// Return a new record with `level` marked as last opened.
    pub fn with_last_level(&self, level: Level) -> Self {
        let mut next = self.clone();
        next.last_level = Some(level);
        next.updated_at = Utc::now();
        next
    }

    /// Return a new record without the chain for `level`.
    pub fn without_chain(&self, level: &Level) -> Self {
        let mut next = self.clone();
        next.chains.remove(level);
        next
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string(self).map_err(|e| RecordError::SerializationFailed(e.to_string()))
    }

    /// Decode a JSON record, rejecting unsupported versions before reading
    /// the rest of the document.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| RecordError::DeserializationFailed(e.to_string()))?;

        let found = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| RecordError::DeserializationFailed("missing version".to_string()))?;
        check_version(u32::try_from(found).unwrap_or(u32::MAX))?;

        serde_json::from_value(value).map_err(|e| RecordError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        bincode::serialize(self).map_err(|e| RecordError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        let record: Self = bincode::deserialize(bytes)
            .map_err(|e| RecordError::DeserializationFailed(e.to_string()))?;
        check_version(record.version)?;
        Ok(record)
    }
}

fn check_version(found: u32) -> Result<(), RecordError> {
    if found == RECORD_VERSION {
        Ok(())
    } else {
        Err(RecordError::UnsupportedVersion {
            found,
            supported: RECORD_VERSION,
        })
    }
}
