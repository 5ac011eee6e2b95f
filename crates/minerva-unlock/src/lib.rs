//! Minerva unlock system - who may access which paid content
//!
//! Three pieces working together:
//!
//! ```text
//! PURCHASE LEDGER (durable, per profile)
//!       │  content key → { address, tx hash, date }
//!       │
//! UNLOCK RESOLVER (derived, per account)
//!       │  unlocked iff record.address == current account (exact match)
//!       │
//! PURCHASE FLOW (one state machine per buy click)
//!       Idle → AwaitingAccount → AwaitingPaymentConfirmation
//!            → Recording → Unlocked
//!       (Cancelled / Failed exits from the two awaiting states)
//! ```
//!
//! Ownership is account-scoped, not browser-scoped: a record proves that
//! *some* address paid, and switching accounts re-derives access instead
//! of reusing it. Free content never consults the ledger at all.

mod flow;
mod ledger;
mod notice;
mod resolver;

pub use flow::{FlowState, Listing, Outcome, PurchaseEngine};
pub use ledger::{LedgerKind, PurchaseLedger, PurchaseRecord};
pub use notice::{Notice, NoticeKind, NOTICE_DISMISS_SECS};
pub use resolver::UnlockResolver;

/// Address every content payment is sent to
pub const TREASURY_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

/// Gas limit attached to every content payment
pub const PAYMENT_GAS_LIMIT: u64 = 100_000;
