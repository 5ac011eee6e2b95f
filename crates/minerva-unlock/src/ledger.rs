//! Purchase ledger - durable content-key → purchase-record mapping
//!
//! Records are created on confirmed payment and never updated or soft
//! deleted afterwards; absence is the only "not purchased" state. Writes
//! are unconditional overwrites (last writer wins), which is safe because
//! a profile only ever records its own completed purchases.

use chrono::{DateTime, Utc};
use minerva_store::{keys, ProfileStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Evidence that an address paid for one piece of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Always true once a record exists
    pub purchased: bool,
    /// The paying account, exact case as the wallet returned it
    pub address: String,
    /// External proof of payment, when the provider returned one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    /// When the purchase was recorded (RFC 3339)
    pub purchase_date: DateTime<Utc>,
}

impl PurchaseRecord {
    /// Record a purchase made just now by `address`
    pub fn new(address: impl Into<String>, transaction_hash: Option<String>) -> Self {
        Self {
            purchased: true,
            address: address.into(),
            transaction_hash,
            purchase_date: Utc::now(),
        }
    }
}

/// Which of the two independent ledgers to open
///
/// Courses and books are separate top-level mappings, both keyed by the
/// display title (inherited behavior; completion tracking uses ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerKind {
    Courses,
    Books,
}

impl LedgerKind {
    fn store_key(self) -> &'static str {
        match self {
            LedgerKind::Courses => keys::PURCHASED_COURSES,
            LedgerKind::Books => keys::PURCHASED_BOOKS,
        }
    }
}

/// Durable purchase ledger over one store document
#[derive(Debug)]
pub struct PurchaseLedger {
    store: ProfileStore,
    kind: LedgerKind,
    entries: HashMap<String, PurchaseRecord>,
}

impl PurchaseLedger {
    /// Open a ledger, degrading to empty on missing or corrupt storage
    pub fn open(store: ProfileStore, kind: LedgerKind) -> Self {
        let entries = store.read_json(kind.store_key());
        Self { store, kind, entries }
    }

    /// Look up the record for a content key; absence means unpurchased
    pub fn get(&self, content_key: &str) -> Option<&PurchaseRecord> {
        self.entries.get(content_key)
    }

    /// Record a purchase, overwriting any existing record
    ///
    /// The in-memory entry is authoritative the moment this returns; a
    /// disk write failure for the local store is logged, not propagated,
    /// since the flow has already confirmed payment.
    pub fn put(&mut self, content_key: impl Into<String>, record: PurchaseRecord) {
        self.entries.insert(content_key.into(), record);
        if let Err(e) = self.store.write_json(self.kind.store_key(), &self.entries) {
            tracing::warn!(kind = ?self.kind, error = %e, "ledger persist failed");
        }
    }

    /// The full mapping, for building a per-account view in one pass
    pub fn all(&self) -> &HashMap<String, PurchaseRecord> {
        &self.entries
    }

    /// Re-read the ledger from storage
    pub fn reload(&mut self) {
        self.entries = self.store.read_json(self.kind.store_key());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_ledger(kind: LedgerKind) -> (tempfile::TempDir, PurchaseLedger) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path()).unwrap();
        let ledger = PurchaseLedger::open(store, kind);
        (dir, ledger)
    }

    #[test]
    fn test_absent_is_unpurchased() {
        let (_dir, ledger) = temp_ledger(LedgerKind::Courses);
        assert!(ledger.get("AI Mastery").is_none());
        assert!(ledger.all().is_empty());
    }

    #[test]
    fn test_write_read_roundtrip() {
        let (dir, mut ledger) = temp_ledger(LedgerKind::Courses);

        let record = PurchaseRecord::new("0xAAA", Some("0xdeadbeef".into()));
        ledger.put("AI Mastery", record.clone());

        assert_eq!(ledger.get("AI Mastery"), Some(&record));

        // And back through the disk
        let store = ProfileStore::open(dir.path()).unwrap();
        let reopened = PurchaseLedger::open(store, LedgerKind::Courses);
        let loaded = reopened.get("AI Mastery").unwrap();
        assert_eq!(loaded.address, record.address);
        assert_eq!(loaded.transaction_hash, record.transaction_hash);
        assert_eq!(loaded.purchase_date, record.purchase_date);
        assert!(loaded.purchased);
    }

    #[test]
    fn test_overwrite_wins() {
        let (_dir, mut ledger) = temp_ledger(LedgerKind::Books);

        ledger.put("Introduction to Blockchain", PurchaseRecord::new("0xAAA", None));
        ledger.put("Introduction to Blockchain", PurchaseRecord::new("0xBBB", None));

        assert_eq!(ledger.get("Introduction to Blockchain").unwrap().address, "0xBBB");
        assert_eq!(ledger.all().len(), 1);
    }

    #[test]
    fn test_course_and_book_ledgers_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path()).unwrap();

        let mut courses = PurchaseLedger::open(store.clone(), LedgerKind::Courses);
        courses.put("AI Mastery", PurchaseRecord::new("0xAAA", None));

        let books = PurchaseLedger::open(store, LedgerKind::Books);
        assert!(books.get("AI Mastery").is_none());
    }

    #[test]
    fn test_corrupt_storage_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("purchased_courses.json"), "][ nonsense").unwrap();

        let ledger = PurchaseLedger::open(store, LedgerKind::Courses);
        assert!(ledger.get("AI Mastery").is_none());
        assert!(ledger.all().is_empty());
    }

    #[test]
    fn test_reload_picks_up_external_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path()).unwrap();
        let mut ledger = PurchaseLedger::open(store.clone(), LedgerKind::Courses);

        let mut writer = PurchaseLedger::open(store, LedgerKind::Courses);
        writer.put("AI Mastery", PurchaseRecord::new("0xAAA", None));

        assert!(ledger.get("AI Mastery").is_none());
        ledger.reload();
        assert!(ledger.get("AI Mastery").is_some());
    }
}
