//! Oracle error types.

use thiserror::Error;

/// The dictionary could not be consulted.
///
/// This is distinct from a word being rejected: callers report it as
/// "couldn't check" rather than "not a word".
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OracleError {
    /// The oracle could not be reached or answered with a transport failure
    #[error("Dictionary unavailable: {message}")]
    Unavailable { message: String },

    /// A caller-imposed deadline expired before the oracle answered
    #[error("Dictionary lookup timed out")]
    Timeout,
}

impl OracleError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
