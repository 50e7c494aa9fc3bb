//! Attempt state machine and the session shell that drives it.
//!
//! This module provides the "imperative shell" around the pure core:
//!
//! - **AttemptMachine**: pure transitions over one level's chain, with a
//!   ticketed two-phase submit so late dictionary verdicts are discarded
//! - **PuzzleSession**: opens a puzzle, restores saved chains, switches
//!   levels, and saves through stillwater effects
//!
//! # Zero-Cost Abstractions
//!
//! Following Stillwater 0.11.0 conventions, store access is expressed as
//! functions returning `impl Effect` built with `from_fn()`, run against the
//! session's environment.

mod attempt;
mod outcome;
mod session;

pub use attempt::AttemptMachine;
pub use outcome::{AttemptError, PendingSubmission, SubmitOutcome};
pub use session::{load_record, save_record, PuzzleSession, SessionError};
