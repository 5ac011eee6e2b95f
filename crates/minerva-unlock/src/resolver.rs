//! Unlock resolver - per-account view over the purchase ledger
//!
//! The view is a cache, never a source of truth: it must be recomputed
//! when the account becomes known, whenever the account changes, and may
//! be updated in place right after a purchase write (the writer just
//! wrote the authoritative value).

use crate::PurchaseLedger;
use std::collections::HashMap;

/// Derived unlock state for the currently connected account
#[derive(Debug, Default)]
pub struct UnlockResolver {
    account: Option<String>,
    view: HashMap<String, bool>,
}

impl UnlockResolver {
    /// Empty view: nothing unlocked, no account known
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the view for `account` in one pass over the ledger
    ///
    /// Address comparison is byte-exact and case-sensitive; the wallet
    /// returns addresses in a canonical form and none is applied here.
    pub fn recompute(&mut self, ledger: &PurchaseLedger, account: Option<&str>) {
        self.account = account.map(str::to_string);
        self.view = ledger
            .all()
            .iter()
            .map(|(key, record)| {
                let owned = account.is_some_and(|a| record.address == a);
                (key.clone(), owned)
            })
            .collect();
    }

    /// Optimistic in-place unlock after a confirmed purchase write
    pub fn mark_unlocked(&mut self, content_key: &str) {
        self.view.insert(content_key.to_string(), true);
    }

    /// Is this content accessible right now?
    ///
    /// Free content is always unlocked and never consults the ledger;
    /// paid content is locked unless the view says otherwise.
    pub fn is_unlocked(&self, is_paid: bool, content_key: &str) -> bool {
        if !is_paid {
            return true;
        }
        self.view.get(content_key).copied().unwrap_or(false)
    }

    /// The account the view was computed for
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// The raw per-key view (paid content only)
    pub fn view(&self) -> &HashMap<String, bool> {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LedgerKind, PurchaseRecord};
    use minerva_store::ProfileStore;

    fn ledger_with(entries: &[(&str, &str)]) -> (tempfile::TempDir, PurchaseLedger) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path()).unwrap();
        let mut ledger = PurchaseLedger::open(store, LedgerKind::Courses);
        for (key, address) in entries {
            ledger.put(*key, PurchaseRecord::new(*address, None));
        }
        (dir, ledger)
    }

    #[test]
    fn test_free_content_always_unlocked() {
        let (_dir, ledger) = ledger_with(&[]);
        let mut resolver = UnlockResolver::new();

        resolver.recompute(&ledger, None);
        assert!(resolver.is_unlocked(false, "Python for AI"));

        resolver.recompute(&ledger, Some("0xAAA"));
        assert!(resolver.is_unlocked(false, "Python for AI"));
    }

    #[test]
    fn test_paid_without_record_locked_for_everyone() {
        let (_dir, ledger) = ledger_with(&[]);
        let mut resolver = UnlockResolver::new();

        resolver.recompute(&ledger, None);
        assert!(!resolver.is_unlocked(true, "AI Mastery"));

        resolver.recompute(&ledger, Some("0xAAA"));
        assert!(!resolver.is_unlocked(true, "AI Mastery"));
    }

    #[test]
    fn test_unlock_requires_exact_address_match() {
        let (_dir, ledger) = ledger_with(&[("AI Mastery", "0xAAA")]);
        let mut resolver = UnlockResolver::new();

        resolver.recompute(&ledger, Some("0xAAA"));
        assert!(resolver.is_unlocked(true, "AI Mastery"));

        resolver.recompute(&ledger, Some("0xBBB"));
        assert!(!resolver.is_unlocked(true, "AI Mastery"));

        // Case differs: no normalization, no match
        resolver.recompute(&ledger, Some("0xaaa"));
        assert!(!resolver.is_unlocked(true, "AI Mastery"));
    }

    #[test]
    fn test_no_account_locks_all_paid_content() {
        let (_dir, ledger) = ledger_with(&[("AI Mastery", "0xAAA")]);
        let mut resolver = UnlockResolver::new();

        resolver.recompute(&ledger, None);
        assert!(!resolver.is_unlocked(true, "AI Mastery"));
    }

    #[test]
    fn test_account_switch_flips_without_reload() {
        let (_dir, ledger) = ledger_with(&[("history-101", "0xAAA")]);
        let mut resolver = UnlockResolver::new();

        resolver.recompute(&ledger, Some("0xAAA"));
        assert!(resolver.is_unlocked(true, "history-101"));

        // Simulated accountsChanged: same ledger, new account
        resolver.recompute(&ledger, Some("0xBBB"));
        assert!(!resolver.is_unlocked(true, "history-101"));

        resolver.recompute(&ledger, Some("0xAAA"));
        assert!(resolver.is_unlocked(true, "history-101"));
    }

    #[test]
    fn test_mark_unlocked_is_in_place() {
        let (_dir, ledger) = ledger_with(&[]);
        let mut resolver = UnlockResolver::new();
        resolver.recompute(&ledger, Some("0xAAA"));

        assert!(!resolver.is_unlocked(true, "AI Mastery"));
        resolver.mark_unlocked("AI Mastery");
        assert!(resolver.is_unlocked(true, "AI Mastery"));
    }
}
