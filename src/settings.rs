//! Player settings passed into a session.

use crate::core::Level;
use serde::{Deserialize, Serialize};

/// Per-player preferences.
///
/// # Example
///
/// ```rust
/// use wordchain::settings::PlayerSettings;
///
/// let settings = PlayerSettings::from_json(r#"{ "preferred_level": "hard" }"#).unwrap();
/// assert!(settings.new_player);
/// assert_eq!(settings.preferred_level.unwrap().as_str(), "hard");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Whether the player has yet to complete a link
    pub new_player: bool,

    /// Level to open when a puzzle has no saved choice
    pub preferred_level: Option<Level>,

    /// Last release notes the player has seen
    pub last_seen_version: Option<String>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            new_player: true,
            preferred_level: None,
            last_seen_version: None,
        }
    }
}

impl PlayerSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Whether release notes for `version` still need showing.
    pub fn has_unseen_version(&self, version: &str) -> bool {
        self.last_seen_version.as_deref() != Some(version)
    }

    pub fn mark_version_seen(&mut self, version: impl Into<String>) {
        self.last_seen_version = Some(version.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_new_player() {
        let settings = PlayerSettings::default();
        assert!(settings.new_player);
        assert!(settings.preferred_level.is_none());
    }

    #[test]
    fn preferred_level_loads_from_json() {
        let settings =
            PlayerSettings::from_json(r#"{ "new_player": false, "preferred_level": "medium" }"#)
                .unwrap();
        assert!(!settings.new_player);
        assert_eq!(settings.preferred_level, Some(Level::medium()));
    }

    #[test]
    fn version_tracking() {
        let mut settings = PlayerSettings::default();
        assert!(settings.has_unseen_version("1.2.0"));

        settings.mark_version_seen("1.2.0");
        assert!(!settings.has_unseen_version("1.2.0"));
        assert!(settings.has_unseen_version("1.3.0"));

        let restored = PlayerSettings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(restored, settings);
    }
}
