//! Attempt lifecycle states.

use serde::{Deserialize, Serialize};

/// Where a player's attempt at one puzzle level stands.
///
/// An attempt is `Finished` exactly when its chain ends at the destination
/// word. Reverting to an earlier link moves it back to `InProgress`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttemptState {
    #[default]
    InProgress,
    Finished,
}

impl AttemptState {
    /// The state's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InProgress => "InProgress",
            Self::Finished => "Finished",
        }
    }

    /// Whether no further links may be added.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Finished)
    }

    pub(crate) fn for_chain_end(reached_destination: bool) -> Self {
        if reached_destination {
            Self::Finished
        } else {
            Self::InProgress
        }
    }
}
