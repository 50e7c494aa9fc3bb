//! Dictionary half of the word-link judge.
//!
//! The adjacency rules in [`crate::core`] decide whether a word is *close
//! enough*; this module decides whether it is a *real word*. It composes the
//! calls to an external [`DictionaryOracle`] and runs an
//! [`AcceptancePolicy`] over the result.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use wordchain::core::Word;
//! use wordchain::oracle::{DictionaryOracle, OracleError, WordJudge, WordVerdict};
//!
//! struct TinyList;
//!
//! #[async_trait]
//! impl DictionaryOracle for TinyList {
//!     async fn word_exists(&self, word: &Word) -> Result<bool, OracleError> {
//!         Ok(matches!(word.as_str(), "care" | "cure"))
//!     }
//! }
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let judge = WordJudge::new(TinyList);
//! let verdict = runtime
//!     .block_on(judge.is_word_accepted(&Word::parse("cure").unwrap()))
//!     .unwrap();
//! assert_eq!(verdict, WordVerdict::Accepted(None));
//! ```

mod builder;
pub mod definition;
mod error;
mod judge;
mod policy;

pub use builder::AcceptancePolicyBuilder;
pub use definition::{Citation, Definition, DefinitionBundle, ExampleUse, Label, LabelKind};
pub use error::OracleError;
pub use judge::{DictionaryOracle, WordJudge, WordVerdict};
pub use policy::{
    AcceptancePolicy, DefinitionCounts, PolicyViolation, WordEvidence, DEFAULT_MIN_ACCEPTABLE_RATIO,
    DEFAULT_MIN_FREQUENCY,
};
