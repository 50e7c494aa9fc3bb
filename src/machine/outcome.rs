//! Results of driving an attempt.

use crate::core::{Level, LinkKind, PuzzleId, Rejection, Word};
use crate::oracle::DefinitionBundle;
use thiserror::Error;

/// Result of applying an oracle verdict to a pending submission
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Word appended to the chain
    Accepted {
        word: Word,
        /// Which adjacency rule linked it to the previous word
        link: Option<LinkKind>,
        /// Whether the word was the destination
        finished: bool,
        definition: Option<DefinitionBundle>,
    },

    /// Chain untouched; the reason is also kept as the last rejection
    Rejected(Rejection),

    /// The chain moved on while the oracle was consulted; result discarded
    Stale,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

/// A submission that passed every local check and awaits the oracle.
///
/// Hand it back to `complete_submit` together with the oracle's verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub(crate) puzzle: PuzzleId,
    pub(crate) level: Level,
    pub(crate) ticket: u64,
    pub(crate) revision: u64,
    pub(crate) word: Word,
}

impl PendingSubmission {
    /// The sanitized candidate to look up.
    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// The level whose chain the word was checked against.
    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn puzzle(&self) -> PuzzleId {
        self.puzzle
    }
}

/// Errors from attempt operations that are caller mistakes rather than
/// player rejections
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttemptError {
    #[error("Cannot revert to position {index}; the chain has {len} words")]
    IndexOutOfRange { index: usize, len: usize },
}
