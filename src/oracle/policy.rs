//! Acceptance policy for dictionary words, evaluated with `Validation`.
//!
//! Every available signal is checked and ALL violations are collected, so a
//! rejected word reports each reason it failed rather than only the first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

pub const DEFAULT_MIN_FREQUENCY: u64 = 100;
pub const DEFAULT_MIN_ACCEPTABLE_RATIO: f64 = 0.5;
pub const DEFAULT_RATIO_CHECK_ABOVE: usize = 3;
pub const DEFAULT_ALLOWED_REGION: &str = "US";

const DEFAULT_IGNORED_LABELS: [&str; 10] = [
    "obsolete",
    "slang",
    "urban",
    "informal",
    "dialect",
    "obs",
    "obs.",
    "prov. eng.",
    "obs. or prov. eng.",
    "archaic",
];

/// Reasons a word fails the acceptance policy.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PolicyViolation {
    #[error("Not in the permissive word list")]
    NotInWordList,

    #[error("Usage frequency {count} is below the minimum of {minimum}")]
    TooRare { count: u64, minimum: u64 },

    #[error("No acceptable definitions")]
    NoAcceptableDefinitions,

    #[error("Only {ratio:.2} of definitions are acceptable (minimum {minimum:.2})")]
    LowAcceptableRatio { ratio: f64, minimum: f64 },
}

/// Definition counts gathered from the definitions oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefinitionCounts {
    pub total: usize,
    pub acceptable: usize,
}

/// Everything the oracles reported about one word.
///
/// `None` means the signal was not available and is not checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordEvidence {
    pub exists: bool,
    pub frequency: Option<u64>,
    pub definitions: Option<DefinitionCounts>,
}

/// Tunable thresholds for accepting a dictionary word.
///
/// Loadable from JSON; missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use wordchain::oracle::AcceptancePolicy;
///
/// let policy = AcceptancePolicy::from_json(r#"{ "min_frequency": 250 }"#).unwrap();
/// assert_eq!(policy.min_frequency, 250);
/// assert_eq!(policy.ratio_check_above, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptancePolicy {
    /// Words with a known usage count below this are rejected.
    pub min_frequency: u64,
    /// Minimum share of acceptable senses...
    pub min_acceptable_ratio: f64,
    /// ...enforced only when a word has more than this many senses.
    pub ratio_check_above: usize,
    /// Label texts (lowercase) that disqualify a sense.
    pub ignored_labels: BTreeSet<String>,
    /// The one region label a sense may carry.
    pub allowed_region: String,
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            min_acceptable_ratio: DEFAULT_MIN_ACCEPTABLE_RATIO,
            ratio_check_above: DEFAULT_RATIO_CHECK_ABOVE,
            ignored_labels: DEFAULT_IGNORED_LABELS
                .iter()
                .map(|l| l.to_string())
                .collect(),
            allowed_region: DEFAULT_ALLOWED_REGION.to_string(),
        }
    }
}

impl AcceptancePolicy {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_ignored_label(&self, text: &str) -> bool {
        self.ignored_labels.contains(&text.to_lowercase())
    }

    /// Enforce every rule, accumulating ALL violations.
    /// Returns Validation::Success(()) if the word is acceptable.
    pub fn enforce(&self, evidence: &WordEvidence) -> Validation<(), NonEmptyVec<PolicyViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<PolicyViolation>>> = Vec::new();

        checks.push(if evidence.exists {
            Validation::success(())
        } else {
            Validation::fail(PolicyViolation::NotInWordList)
        });

        if let Some(count) = evidence.frequency {
            let check = if count < self.min_frequency {
                Validation::fail(PolicyViolation::TooRare {
                    count,
                    minimum: self.min_frequency,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if let Some(counts) = evidence.definitions {
            if counts.acceptable == 0 {
                checks.push(Validation::fail(PolicyViolation::NoAcceptableDefinitions));
            } else if counts.total > self.ratio_check_above {
                let ratio = counts.acceptable as f64 / counts.total as f64;
                let check = if ratio < self.min_acceptable_ratio {
                    Validation::fail(PolicyViolation::LowAcceptableRatio {
                        ratio,
                        minimum: self.min_acceptable_ratio,
                    })
                } else {
                    Validation::success(())
                };
                checks.push(check);
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
