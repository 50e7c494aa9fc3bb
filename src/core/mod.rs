//! Pure puzzle core.
//!
//! This module contains everything that decides puzzle rules without I/O:
//! - `Word` sanitization and the `Rejection` taxonomy
//! - The adjacency rules that link one word to the next
//! - Immutable `AttemptChain` values and the guards that extend them
//! - `AttemptState` and puzzle definitions
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

pub mod adjacency;
mod chain;
mod guard;
mod puzzle;
mod rejection;
mod state;
mod word;

pub use adjacency::{is_adjacent, link_kind, LinkKind};
pub use chain::{AttemptChain, ChainError};
pub use guard::{check_all, LinkGuard};
pub use puzzle::{Level, PuzzleDefinition, PuzzleError, PuzzleId, PuzzleSet};
pub use rejection::Rejection;
pub use state::AttemptState;
pub use word::Word;
