//! Attempt record error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding an attempt record
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Record version is not supported by this version
    #[error("Unsupported record version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A stored chain does not fit the puzzle it was saved for
    #[error("Record validation failed: {0}")]
    ValidationFailed(String),
}
