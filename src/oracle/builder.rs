//! Builder API for acceptance policies.

use super::policy::AcceptancePolicy;

/// Builder for creating an [`AcceptancePolicy`] starting from the defaults.
///
/// # Example
///
/// ```rust
/// use wordchain::oracle::AcceptancePolicyBuilder;
///
/// let policy = AcceptancePolicyBuilder::new()
///     .min_frequency(500)
///     .ignore_label("Rare")
///     .build();
///
/// assert_eq!(policy.min_frequency, 500);
/// assert!(policy.is_ignored_label("rare"));
/// ```
pub struct AcceptancePolicyBuilder {
    policy: AcceptancePolicy,
}

impl AcceptancePolicyBuilder {
    pub fn new() -> Self {
        Self {
            policy: AcceptancePolicy::default(),
        }
    }

    /// Set the minimum usage frequency
    pub fn min_frequency(mut self, count: u64) -> Self {
        self.policy.min_frequency = count;
        self
    }

    /// Set the minimum share of acceptable senses
    pub fn min_acceptable_ratio(mut self, ratio: f64) -> Self {
        self.policy.min_acceptable_ratio = ratio;
        self
    }

    /// Only enforce the ratio for words with more senses than this
    pub fn ratio_check_above(mut self, total: usize) -> Self {
        self.policy.ratio_check_above = total;
        self
    }

    /// Add a label text that disqualifies a sense
    pub fn ignore_label(mut self, text: impl AsRef<str>) -> Self {
        self.policy
            .ignored_labels
            .insert(text.as_ref().to_lowercase());
        self
    }

    /// Stop ignoring every default label
    pub fn clear_ignored_labels(mut self) -> Self {
        self.policy.ignored_labels.clear();
        self
    }

    /// Set the one region label a sense may carry
    pub fn allowed_region(mut self, region: impl Into<String>) -> Self {
        self.policy.allowed_region = region.into();
        self
    }

    pub fn build(self) -> AcceptancePolicy {
        self.policy
    }
}

impl Default for AcceptancePolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
