//! User profile and onboarding preferences
//!
//! Free-form per-profile data: display identity chosen during profile
//! setup, and the preference answers collected by the onboarding modal.
//! Stored under their own top-level keys, independent of ledgers and
//! completion flags.

use minerva_store::{keys, ProfileStore, Result};
use serde::{Deserialize, Serialize};

/// Display identity chosen during profile setup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    /// Avatar path, e.g. `/images/profile3.png`
    pub profile_image: String,
}

impl UserProfile {
    /// Load the stored profile, empty if none was saved yet
    pub fn load(store: &ProfileStore) -> Self {
        store.read_json(keys::USER_PROFILE)
    }

    /// Persist the profile, plus the display-name convenience key
    pub fn save(&self, store: &ProfileStore) -> Result<()> {
        store.write_json(keys::USER_PROFILE, self)?;
        store.write_json(keys::USER_NAME, &self.display_name)
    }
}

/// Onboarding preference answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub age_group: String,
    pub has_disability: bool,
    pub interests: Vec<String>,
}

impl UserPreferences {
    pub fn load(store: &ProfileStore) -> Self {
        store.read_json(keys::USER_PREFERENCES)
    }

    pub fn save(&self, store: &ProfileStore) -> Result<()> {
        store.write_json(keys::USER_PREFERENCES, self)
    }

    /// Toggle an interest on or off
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_profile_roundtrip_and_name_key() {
        let (_dir, store) = temp_store();

        let profile = UserProfile {
            display_name: "Ada".into(),
            profile_image: "/images/profile2.png".into(),
        };
        profile.save(&store).unwrap();

        assert_eq!(UserProfile::load(&store), profile);
        let name: String = store.read_json(keys::USER_NAME);
        assert_eq!(name, "Ada");
    }

    #[test]
    fn test_missing_profile_is_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(UserProfile::load(&store), UserProfile::default());
    }

    #[test]
    fn test_toggle_interest() {
        let mut prefs = UserPreferences::default();

        prefs.toggle_interest("AI");
        prefs.toggle_interest("History");
        assert_eq!(prefs.interests, vec!["AI", "History"]);

        prefs.toggle_interest("AI");
        assert_eq!(prefs.interests, vec!["History"]);
    }

    #[test]
    fn test_preferences_roundtrip() {
        let (_dir, store) = temp_store();

        let prefs = UserPreferences {
            age_group: "18-24".into(),
            has_disability: false,
            interests: vec!["AI".into(), "Sign Language".into()],
        };
        prefs.save(&store).unwrap();

        assert_eq!(UserPreferences::load(&store), prefs);
    }
}
