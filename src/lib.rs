//! Wordchain: the rules engine of a daily word-chain puzzle
//!
//! A player turns a source word into a destination word one link at a time.
//! Each new word must be close to the previous one (a single edit, a swap of
//! two letters, a reversal, or a one-letter shift) and must be a real word.
//!
//! Wordchain is built on Stillwater's "pure core, imperative shell" philosophy.
//! The rules are pure functions with no side effects, while dictionary
//! lookups and persistence live at the edges.
//!
//! # Core Concepts
//!
//! - **Adjacency**: Pure rules deciding whether one word may follow another
//! - **Judge**: Dictionary oracle calls composed with an acceptance policy
//! - **Attempt machine**: Immutable chains, guards, completion and scoring
//! - **Session**: Level selection and saving through store effects
//!
//! # Example
//!
//! ```rust
//! use wordchain::core::{is_adjacent, Level, PuzzleDefinition, PuzzleId, Word};
//! use wordchain::machine::{AttemptMachine, SubmitOutcome};
//! use wordchain::oracle::WordVerdict;
//!
//! assert!(is_adjacent("grin", "ring"));
//!
//! let definition = PuzzleDefinition::new(
//!     PuzzleId(1),
//!     Level::easy(),
//!     Word::parse("care").unwrap(),
//!     Word::parse("cure").unwrap(),
//!     1,
//! )
//! .unwrap();
//! let mut machine = AttemptMachine::new(definition);
//!
//! let pending = machine.begin_submit("cure").unwrap();
//! let outcome = machine.complete_submit(pending, Ok(WordVerdict::Accepted(None)));
//!
//! assert!(matches!(outcome, SubmitOutcome::Accepted { finished: true, .. }));
//! assert!(machine.is_perfect_score());
//! ```

pub mod core;
pub mod machine;
pub mod oracle;
pub mod record;
pub mod settings;
pub mod source;

// Re-export commonly used types
pub use core::{AttemptChain, AttemptState, Level, PuzzleDefinition, PuzzleId, Rejection, Word};
pub use machine::{AttemptMachine, PuzzleSession, SessionError, SubmitOutcome};
pub use oracle::{AcceptancePolicy, DictionaryOracle, WordJudge, WordVerdict};
pub use record::{AttemptRecord, AttemptStore, MemoryStore};
pub use settings::PlayerSettings;
pub use source::{PuzzleSource, StaticPuzzleSource};
