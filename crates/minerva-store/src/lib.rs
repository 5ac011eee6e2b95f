//! Minerva profile store - durable per-profile JSON key-value storage
//!
//! The Rust rendition of the browser's per-origin local storage: each
//! top-level key is an independent JSON document on disk, never merged
//! into a single blob.
//!
//! ```text
//! <data dir>/minerva/
//!       ├── purchased_courses.json
//!       ├── purchased_books.json
//!       ├── completed_courses.json
//!       ├── user_badges.json
//!       ├── user_profile.json
//!       └── ...
//! ```
//!
//! Reads are tolerant by contract: a missing, unreadable, or corrupt
//! document degrades to the type's default value. "Nothing stored yet"
//! and "storage corrupt" are indistinguishable to callers, and neither
//! is an error.

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No data directory available on this platform")]
    NoDataDir,

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Well-known top-level store keys
///
/// One document per key; the mappings are never merged.
pub mod keys {
    /// Course purchase ledger (keyed by course title)
    pub const PURCHASED_COURSES: &str = "purchased_courses";
    /// Book purchase ledger (keyed by book title)
    pub const PURCHASED_BOOKS: &str = "purchased_books";
    /// Completion flags (keyed by course id)
    pub const COMPLETED_COURSES: &str = "completed_courses";
    /// Cached badge flags derived from completion counts
    pub const USER_BADGES: &str = "user_badges";
    /// Free-form user profile (display name, avatar)
    pub const USER_PROFILE: &str = "user_profile";
    /// Onboarding preferences (age group, accessibility, interests)
    pub const USER_PREFERENCES: &str = "user_preferences";
    /// Last connected wallet address (convenience, not an auth token)
    pub const WALLET_ADDRESS: &str = "wallet_address";
    /// Display name convenience key, set before the full profile exists
    pub const USER_NAME: &str = "user_name";
}

/// Durable key-value store for one user profile
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Open a store rooted at the platform data directory
    pub fn open_default() -> Result<Self> {
        let root = dirs::data_dir().ok_or(Error::NoDataDir)?.join("minerva");
        Self::open(root)
    }

    /// Open a store rooted at an explicit directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a document, degrading to the default value on any failure
    ///
    /// Missing file, unreadable file, and parse failure are all treated
    /// the same way as "nothing stored yet". Corruption is logged but
    /// never propagated.
    pub fn read_json<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed, using default");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "store document corrupt, using default");
                T::default()
            }
        }
    }

    /// Write a document, overwriting any existing value
    ///
    /// Last writer wins; there is no merge and no concurrency check.
    pub fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    /// Remove a document entirely
    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether a document exists
    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).is_file()
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}
