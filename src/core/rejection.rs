//! Player-facing rejection reasons.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submitted word was not added to the chain.
///
/// Every rejection is recoverable: the chain is left untouched and the
/// player may try again with different input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("No word entered")]
    EmptyInput,

    #[error("Please use the letters A-Z only")]
    InvalidCharacters,

    #[error("No word reuse")]
    WordReused,

    #[error("Not close enough to the previous word")]
    NotAdjacent,

    #[error("Word not found in the dictionary")]
    WordNotFound,

    #[error("Couldn't reach the dictionary, try again")]
    OracleUnavailable,

    #[error("This puzzle is already finished")]
    AlreadyFinished,

    #[error("Still checking the previous word")]
    SubmissionPending,
}

impl Rejection {
    /// Stable identifier for logs and analytics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::InvalidCharacters => "InvalidCharacters",
            Self::WordReused => "WordReused",
            Self::NotAdjacent => "NotAdjacent",
            Self::WordNotFound => "WordNotFound",
            Self::OracleUnavailable => "OracleUnavailable",
            Self::AlreadyFinished => "AlreadyFinished",
            Self::SubmissionPending => "SubmissionPending",
        }
    }

    /// Whether retrying the same word later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::OracleUnavailable | Self::SubmissionPending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_oracle_and_pending_are_transient() {
        assert!(Rejection::OracleUnavailable.is_transient());
        assert!(Rejection::SubmissionPending.is_transient());
        assert!(!Rejection::WordNotFound.is_transient());
        assert!(!Rejection::NotAdjacent.is_transient());
    }

    #[test]
    fn rejection_serializes_by_name() {
        let json = serde_json::to_string(&Rejection::WordReused).unwrap();
        assert_eq!(json, "\"WordReused\"");
        let back: Rejection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rejection::WordReused);
    }

    #[test]
    fn display_is_player_readable() {
        assert_eq!(Rejection::WordReused.to_string(), "No word reuse");
        assert_eq!(Rejection::EmptyInput.code(), "EmptyInput");
    }
}
