//! Dictionary half of the word-link judge.

use super::definition::{Definition, DefinitionBundle};
use super::error::OracleError;
use super::policy::{AcceptancePolicy, DefinitionCounts, PolicyViolation, WordEvidence};
use crate::core::Word;
use async_trait::async_trait;
use std::sync::Arc;
use stillwater::validation::Validation;
use tracing::{debug, warn};

/// External dictionary consulted for candidate words.
///
/// Only `word_exists` is required. The optional signals default to
/// `Ok(None)`, meaning "this oracle does not provide it". An oracle that
/// provides definitions but cannot fetch them must return `Err`.
#[async_trait]
pub trait DictionaryOracle: Send + Sync {
    /// Permissive existence check.
    async fn word_exists(&self, word: &Word) -> Result<bool, OracleError>;

    /// Usage count. A word the source does not know is `Some(0)`.
    async fn usage_frequency(&self, _word: &Word) -> Result<Option<u64>, OracleError> {
        Ok(None)
    }

    /// Raw senses. A word with no entry is `Some(vec![])`.
    async fn definitions(&self, _word: &Word) -> Result<Option<Vec<Definition>>, OracleError> {
        Ok(None)
    }
}

#[async_trait]
impl<O: DictionaryOracle + ?Sized> DictionaryOracle for Arc<O> {
    async fn word_exists(&self, word: &Word) -> Result<bool, OracleError> {
        (**self).word_exists(word).await
    }

    async fn usage_frequency(&self, word: &Word) -> Result<Option<u64>, OracleError> {
        (**self).usage_frequency(word).await
    }

    async fn definitions(&self, word: &Word) -> Result<Option<Vec<Definition>>, OracleError> {
        (**self).definitions(word).await
    }
}

/// Outcome of asking whether a word is a legitimate dictionary word.
#[derive(Clone, Debug, PartialEq)]
pub enum WordVerdict {
    /// Accepted; carries ranked senses when definitions were consulted.
    Accepted(Option<DefinitionBundle>),
    /// Rejected, with every policy rule the word broke.
    Rejected(Vec<PolicyViolation>),
}

impl WordVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn definition(&self) -> Option<&DefinitionBundle> {
        match self {
            Self::Accepted(bundle) => bundle.as_ref(),
            Self::Rejected(_) => None,
        }
    }
}

/// Composes oracle lookups with an [`AcceptancePolicy`].
pub struct WordJudge<O> {
    oracle: O,
    policy: AcceptancePolicy,
}

impl<O: DictionaryOracle> WordJudge<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_policy(oracle, AcceptancePolicy::default())
    }

    pub fn with_policy(oracle: O, policy: AcceptancePolicy) -> Self {
        Self { oracle, policy }
    }

    pub fn policy(&self) -> &AcceptancePolicy {
        &self.policy
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Decide whether `word` is a legitimate dictionary word.
    ///
    /// A failed existence check rejects immediately. A usage frequency that
    /// errors is skipped with a warning. `Err` is returned when either the
    /// existence check or the definitions lookup cannot be made.
    pub async fn is_word_accepted(&self, word: &Word) -> Result<WordVerdict, OracleError> {
        if !self.oracle.word_exists(word).await? {
            debug!(%word, "not in the permissive word list");
            return Ok(WordVerdict::Rejected(vec![PolicyViolation::NotInWordList]));
        }

        let frequency = match self.oracle.usage_frequency(word).await {
            Ok(frequency) => frequency,
            Err(error) => {
                warn!(%word, %error, "usage frequency unavailable, skipping check");
                None
            }
        };

        let bundle = match self.oracle.definitions(word).await {
            Ok(Some(raw)) => Some(DefinitionBundle::from_definitions(
                word.clone(),
                raw,
                &self.policy,
            )),
            Ok(None) => None,
            Err(error) => {
                warn!(%word, %error, "definitions unavailable");
                return Err(error);
            }
        };

        let evidence = WordEvidence {
            exists: true,
            frequency,
            definitions: bundle.as_ref().map(|b| DefinitionCounts {
                total: b.total_definition_count,
                acceptable: b.acceptable_count(),
            }),
        };

        match self.policy.enforce(&evidence) {
            Validation::Success(_) => Ok(WordVerdict::Accepted(bundle)),
            Validation::Failure(violations) => {
                let violations: Vec<PolicyViolation> = violations.iter().cloned().collect();
                debug!(%word, ?violations, "word rejected by acceptance policy");
                Ok(WordVerdict::Rejected(violations))
            }
        }
    }
}
