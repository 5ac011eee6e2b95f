//! Minerva progress layer - completion flags, badges, and user profile
//!
//! Completion is deliberately *not* account-scoped: it is tracked per
//! profile regardless of which wallet is connected, unlike purchases.
//! That asymmetry is inherited product behavior and preserved here.
//!
//! Badges are pure derivations of the completed count, recomputed from
//! the full set on every mutation rather than kept as incremental
//! counters, so the cached flags can never drift from the underlying
//! completion set.

mod profile;

use minerva_store::{keys, ProfileStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use profile::{UserPreferences, UserProfile};

/// Completed courses needed for the beginner badge
pub const BEGINNER_BADGE_AT: usize = 2;

/// Completed courses needed for the intermediate badge
pub const INTERMEDIATE_BADGE_AT: usize = 4;

/// Derived achievement flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeState {
    pub beginner_badge: bool,
    pub intermediate_badge: bool,
}

impl BadgeState {
    /// Pure function of the completed count
    pub fn from_count(completed: usize) -> Self {
        Self {
            beginner_badge: completed >= BEGINNER_BADGE_AT,
            intermediate_badge: completed >= INTERMEDIATE_BADGE_AT,
        }
    }
}

/// Per-profile completion flags, keyed by course id
#[derive(Debug)]
pub struct CompletionTracker {
    store: ProfileStore,
    completed: HashMap<String, bool>,
}

impl CompletionTracker {
    /// Open the tracker, degrading to empty on missing or corrupt storage
    pub fn open(store: ProfileStore) -> Self {
        let completed = store.read_json(keys::COMPLETED_COURSES);
        Self { store, completed }
    }

    /// Is this course marked completed? Unknown ids are not completed.
    pub fn is_completed(&self, course_id: &str) -> bool {
        self.completed.get(course_id).copied().unwrap_or(false)
    }

    /// Toggle completion, persisting the set and the derived badges
    ///
    /// Unchecking removes the entry entirely; the mapping only ever holds
    /// completed courses, so its size is the completed count.
    pub fn set_completed(&mut self, course_id: &str, completed: bool) {
        if completed {
            self.completed.insert(course_id.to_string(), true);
        } else {
            self.completed.remove(course_id);
        }

        if let Err(e) = self.store.write_json(keys::COMPLETED_COURSES, &self.completed) {
            tracing::warn!(course_id, error = %e, "completion persist failed");
        }

        // Cached convenience copy of the derived flags
        let badges = self.badge_state();
        if let Err(e) = self.store.write_json(keys::USER_BADGES, &badges) {
            tracing::warn!(error = %e, "badge persist failed");
        }
    }

    /// Number of completed courses
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Badge flags derived from the current completion set
    pub fn badge_state(&self) -> BadgeState {
        BadgeState::from_count(self.completed_count())
    }

    /// Ids of every completed course
    pub fn completed_ids(&self) -> Vec<&str> {
        self.completed.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_tracker() -> (tempfile::TempDir, CompletionTracker) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path()).unwrap();
        let tracker = CompletionTracker::open(store);
        (dir, tracker)
    }

    #[test]
    fn test_unknown_id_not_completed() {
        let (_dir, tracker) = temp_tracker();
        assert!(!tracker.is_completed("python-ai"));
        assert_eq!(tracker.completed_count(), 0);
    }

    #[test]
    fn test_set_completed_is_idempotent() {
        let (_dir, mut tracker) = temp_tracker();

        tracker.set_completed("python-ai", true);
        tracker.set_completed("python-ai", true);

        assert!(tracker.is_completed("python-ai"));
        assert_eq!(tracker.completed_count(), 1);
        assert_eq!(tracker.badge_state(), BadgeState::from_count(1));
    }

    #[test]
    fn test_uncheck_removes_entry() {
        let (_dir, mut tracker) = temp_tracker();

        tracker.set_completed("python-ai", true);
        tracker.set_completed("python-ai", false);

        assert!(!tracker.is_completed("python-ai"));
        assert_eq!(tracker.completed_count(), 0);
    }

    #[test]
    fn test_badge_boundaries() {
        assert_eq!(
            BadgeState::from_count(1),
            BadgeState { beginner_badge: false, intermediate_badge: false }
        );
        assert_eq!(
            BadgeState::from_count(2),
            BadgeState { beginner_badge: true, intermediate_badge: false }
        );
        assert_eq!(
            BadgeState::from_count(4),
            BadgeState { beginner_badge: true, intermediate_badge: true }
        );
    }

    #[test]
    fn test_badges_follow_mutations() {
        let (_dir, mut tracker) = temp_tracker();

        for id in ["a", "b", "c", "d"] {
            tracker.set_completed(id, true);
        }
        assert!(tracker.badge_state().intermediate_badge);

        tracker.set_completed("d", false);
        let badges = tracker.badge_state();
        assert!(badges.beginner_badge);
        assert!(!badges.intermediate_badge);
    }

    #[test]
    fn test_persists_across_reopen() {
        let (dir, mut tracker) = temp_tracker();
        tracker.set_completed("python-ai", true);
        tracker.set_completed("ai-mastery", true);

        let store = ProfileStore::open(dir.path()).unwrap();
        let reopened = CompletionTracker::open(store.clone());
        assert!(reopened.is_completed("python-ai"));
        assert_eq!(reopened.completed_count(), 2);

        // The cached badge document matches the derived state
        let cached: BadgeState = store.read_json(minerva_store::keys::USER_BADGES);
        assert_eq!(cached, reopened.badge_state());
    }

    #[test]
    fn test_corrupt_storage_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("completed_courses.json"), "not json").unwrap();

        let tracker = CompletionTracker::open(store);
        assert_eq!(tracker.completed_count(), 0);
    }
}
