//! Dictionary senses: filtering out unsuitable ones and ranking the rest.

use super::policy::AcceptancePolicy;
use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const REJECTED_GLOSS_PREFIXES: [&str; 4] = [
    "obsolete ",
    "archaic ",
    "acronym ",
    "<xref>acronym</xref> ",
];

const REJECTED_GLOSS_FRAGMENTS: [&str; 2] = ["dialectal ", "obsolete spelling of "];

/// What a sense label describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    /// Regional usage, e.g. "British"
    Region,
    /// Subject field, e.g. "Nautical"
    #[serde(alias = "fld")]
    Field,
    #[default]
    #[serde(other)]
    Other,
}

/// A usage label attached to a sense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: LabelKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExampleUse {
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Citation {
    pub cite: Option<String>,
    pub source: Option<String>,
}

/// One sense of a word as returned by the definitions oracle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Definition {
    pub text: Option<String>,
    #[serde(alias = "part_of_speech")]
    pub part_of_speech: Option<String>,
    pub labels: Vec<Label>,
    #[serde(alias = "example_uses")]
    pub example_uses: Vec<ExampleUse>,
    pub citations: Vec<Citation>,
    /// Dictionary ordering hint; lower comes first.
    pub sequence: Option<u32>,
}

impl Definition {
    /// A sense with just a gloss.
    pub fn gloss(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First example usage, if any survived refinement.
    pub fn example(&self) -> Option<&str> {
        self.example_uses.first().map(|e| e.text.as_str())
    }

    /// Whether this sense is suitable evidence that a word is in common use.
    ///
    /// Drops empty and abbreviation glosses, obsolete/archaic/acronym/dialect
    /// glosses, ignored labels, regions other than the allowed one, and any
    /// subject-field label.
    pub fn is_acceptable(&self, policy: &AcceptancePolicy) -> bool {
        let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) else {
            return false;
        };
        if text == "abbreviation" {
            return false;
        }

        let lower = text.to_lowercase();
        if REJECTED_GLOSS_PREFIXES.iter().any(|p| lower.starts_with(p))
            || REJECTED_GLOSS_FRAGMENTS.iter().any(|f| lower.contains(f))
        {
            return false;
        }

        self.labels.iter().all(|label| {
            !policy.is_ignored_label(&label.text)
                && match label.kind {
                    LabelKind::Region => label.text == policy.allowed_region,
                    LabelKind::Field => false,
                    LabelKind::Other => true,
                }
        })
    }

    /// Keep only examples that actually use `word`, falling back to
    /// citations that do when none remain.
    fn with_relevant_examples(mut self, word: &str) -> Self {
        let mentions = |text: &str| text.to_lowercase().contains(word);

        self.example_uses.retain(|e| mentions(e.text.as_str()));
        if self.example_uses.is_empty() {
            self.example_uses = self
                .citations
                .iter()
                .filter_map(|c| c.cite.as_deref())
                .filter(|cite| mentions(*cite))
                .map(|cite| ExampleUse {
                    text: cite.to_string(),
                })
                .collect();
        }
        self
    }
}

/// More examples first; then explicit sequence ascending, with sequenced
/// senses ahead of unsequenced ones.
fn rank(a: &Definition, b: &Definition) -> Ordering {
    b.example_uses
        .len()
        .cmp(&a.example_uses.len())
        .then_with(|| match (a.sequence, b.sequence) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Acceptable senses of a word, best first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefinitionBundle {
    pub word: Word,
    /// Senses the oracle returned before filtering.
    pub total_definition_count: usize,
    /// Acceptable senses, ranked.
    pub definitions: Vec<Definition>,
}

impl DefinitionBundle {
    /// Filter, refine and rank raw senses.
    pub fn from_definitions(
        word: Word,
        raw: Vec<Definition>,
        policy: &AcceptancePolicy,
    ) -> Self {
        let total_definition_count = raw.len();
        let mut definitions: Vec<Definition> = raw
            .into_iter()
            .filter(|d| d.is_acceptable(policy))
            .map(|d| d.with_relevant_examples(word.as_str()))
            .collect();
        definitions.sort_by(rank);

        Self {
            word,
            total_definition_count,
            definitions,
        }
    }

    pub fn acceptable_count(&self) -> usize {
        self.definitions.len()
    }

    /// Share of senses that survived filtering; zero when there were none.
    pub fn acceptable_ratio(&self) -> f64 {
        if self.total_definition_count == 0 {
            0.0
        } else {
            self.definitions.len() as f64 / self.total_definition_count as f64
        }
    }

    /// The sense to display after a word is accepted.
    pub fn primary(&self) -> Option<&Definition> {
        self.definitions.first()
    }
}
