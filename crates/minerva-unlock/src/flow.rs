//! Purchase flow state machine
//!
//! One flow instance per buy action. The engine serializes flows per
//! content key (two different items may be bought concurrently; a second
//! buy of the *same* item is rejected until the first reaches a terminal
//! state) and guarantees the ledger write is acknowledged before the item
//! is reported unlocked.

use crate::{
    Notice, PurchaseLedger, PurchaseRecord, UnlockResolver, PAYMENT_GAS_LIMIT, TREASURY_ADDRESS,
};
use minerva_catalog::{Book, Course};
use minerva_wallet::{eth, Error as WalletError, WalletEvent, WalletSession};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// States a purchase flow moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    AwaitingAccount,
    AwaitingPaymentConfirmation,
    Recording,
    Unlocked,
    Cancelled,
    Failed,
}

/// What a buy action is for: the ledger key plus pricing
#[derive(Debug, Clone)]
pub struct Listing {
    pub content_key: String,
    pub is_paid: bool,
    pub price_eth: f64,
}

impl From<&Course> for Listing {
    fn from(course: &Course) -> Self {
        Self {
            content_key: course.content_key().to_string(),
            is_paid: course.is_paid,
            price_eth: course.price,
        }
    }
}

impl From<&Book> for Listing {
    fn from(book: &Book) -> Self {
        Self {
            content_key: book.content_key().to_string(),
            is_paid: book.is_paid,
            price_eth: book.price,
        }
    }
}

/// Terminal result of one buy action
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Payment sent and recorded; the item is now accessible
    Unlocked { transaction_hash: String },
    /// Free item, or already owned by the current account
    AlreadyUnlocked,
    /// A flow for this content key is still pending
    InProgress,
    /// No wallet extension present; prompt to install/connect
    NoWallet(Notice),
    /// The user declined the account grant or the signature
    Cancelled(Notice),
    /// Submission failed for any other reason
    Failed(Notice),
}

/// Purchase engine: wallet session + one ledger + derived unlock view
pub struct PurchaseEngine {
    session: Arc<WalletSession>,
    ledger: Mutex<PurchaseLedger>,
    resolver: Mutex<UnlockResolver>,
    in_flight: Mutex<HashSet<String>>,
}

/// Holds one content key in the in-flight set for the guard's lifetime
///
/// Dropping the guard releases the key, so a flow future that is dropped
/// mid-await (timeout, abort) frees its slot the same as a terminal state.
struct FlowSlot<'a> {
    in_flight: &'a Mutex<HashSet<String>>,
    key: String,
}

impl<'a> FlowSlot<'a> {
    fn acquire(in_flight: &'a Mutex<HashSet<String>>, key: &str) -> Option<Self> {
        let mut held = in_flight.lock().expect("guard lock poisoned");
        if !held.insert(key.to_string()) {
            return None;
        }
        Some(Self {
            in_flight,
            key: key.to_string(),
        })
    }
}

impl Drop for FlowSlot<'_> {
    fn drop(&mut self) {
        if let Ok(mut held) = self.in_flight.lock() {
            held.remove(&self.key);
        }
    }
}

impl PurchaseEngine {
    /// Build an engine and derive the initial unlock view
    pub fn new(session: Arc<WalletSession>, ledger: PurchaseLedger) -> Self {
        let engine = Self {
            session,
            ledger: Mutex::new(ledger),
            resolver: Mutex::new(UnlockResolver::new()),
            in_flight: Mutex::new(HashSet::new()),
        };
        engine.resync();
        engine
    }

    /// Recompute the unlock view for the session's current account
    ///
    /// Run on initial load, and again on every account change; cached
    /// state from a previous account is never reused.
    pub fn resync(&self) {
        let account = self.session.current_account();
        let ledger = self.ledger.lock().expect("ledger lock poisoned");
        self.resolver
            .lock()
            .expect("resolver lock poisoned")
            .recompute(&ledger, account.as_deref());
    }

    /// Apply a wallet notification, then re-derive unlock state
    pub fn handle_event(&self, event: &WalletEvent) {
        self.session.handle_event(event);
        self.resync();
    }

    /// Is this content accessible to the current account right now?
    pub fn is_unlocked(&self, listing: &Listing) -> bool {
        self.resolver
            .lock()
            .expect("resolver lock poisoned")
            .is_unlocked(listing.is_paid, &listing.content_key)
    }

    /// Snapshot of the per-key unlock view
    pub fn unlocked_view(&self) -> HashMap<String, bool> {
        self.resolver
            .lock()
            .expect("resolver lock poisoned")
            .view()
            .clone()
    }

    /// The purchase record for a key, if any address bought it here
    pub fn record(&self, content_key: &str) -> Option<PurchaseRecord> {
        self.ledger
            .lock()
            .expect("ledger lock poisoned")
            .get(content_key)
            .cloned()
    }

    /// Run one purchase flow to a terminal state
    pub async fn buy(&self, listing: &Listing) -> Outcome {
        if !listing.is_paid {
            return Outcome::AlreadyUnlocked;
        }
        if self.is_unlocked(listing) {
            return Outcome::AlreadyUnlocked;
        }

        // Re-entrancy guard, keyed by content key; the slot is released on
        // every exit, including the flow future being dropped mid-await
        let Some(_slot) = FlowSlot::acquire(&self.in_flight, &listing.content_key) else {
            tracing::debug!(key = %listing.content_key, "purchase already pending, ignoring");
            return Outcome::InProgress;
        };

        self.run_flow(listing).await
    }

    async fn run_flow(&self, listing: &Listing) -> Outcome {
        let key = listing.content_key.as_str();
        Self::enter(FlowState::Idle, key);

        let account = match self.session.current_account() {
            Some(account) => account,
            None => {
                Self::enter(FlowState::AwaitingAccount, key);
                match self.session.request_connect().await {
                    Ok(account) => {
                        self.resync();
                        account
                    }
                    Err(WalletError::NoWallet) => {
                        return Outcome::NoWallet(Notice::info(
                            "No wallet detected. Please install one.",
                        ));
                    }
                    Err(e) if e.is_rejection() => {
                        Self::enter(FlowState::Cancelled, key);
                        return Outcome::Cancelled(Notice::cancelled("Wallet connection cancelled"));
                    }
                    Err(e) => {
                        Self::enter(FlowState::Failed, key);
                        return Outcome::Failed(Notice::error(e.to_string()));
                    }
                }
            }
        };

        let Some(provider) = self.session.provider() else {
            return Outcome::NoWallet(Notice::info("No wallet detected. Please install one."));
        };

        Self::enter(FlowState::AwaitingPaymentConfirmation, key);
        let amount_wei = eth::to_wei(listing.price_eth);
        let sent = provider
            .send_payment(TREASURY_ADDRESS, amount_wei, PAYMENT_GAS_LIMIT)
            .await;

        let transaction_hash = match sent {
            Ok(hash) => hash,
            Err(WalletError::Rejected) => {
                Self::enter(FlowState::Cancelled, key);
                return Outcome::Cancelled(Notice::cancelled("Transaction cancelled by user"));
            }
            Err(WalletError::NoWallet) => {
                return Outcome::NoWallet(Notice::info("No wallet detected. Please install one."));
            }
            Err(WalletError::PaymentFailed(message)) => {
                Self::enter(FlowState::Failed, key);
                return Outcome::Failed(Notice::error(message));
            }
        };

        // Payment is on its way; record before reporting unlocked
        Self::enter(FlowState::Recording, key);
        {
            let mut ledger = self.ledger.lock().expect("ledger lock poisoned");
            ledger.put(key, PurchaseRecord::new(account.as_str(), Some(transaction_hash.clone())));
        }
        self.resolver
            .lock()
            .expect("resolver lock poisoned")
            .mark_unlocked(key);

        Self::enter(FlowState::Unlocked, key);
        tracing::info!(key, account = %account, tx = %transaction_hash, "content unlocked");
        Outcome::Unlocked { transaction_hash }
    }

    fn enter(state: FlowState, key: &str) {
        tracing::debug!(?state, key, "purchase flow");
    }
}
