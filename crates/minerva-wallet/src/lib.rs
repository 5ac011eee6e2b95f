//! Minerva wallet layer - browser-wallet style account and payment access
//!
//! Models the wallet extension the platform talks to:
//!
//! ```text
//! WALLET PROVIDER (external, user-confirmed)
//!       │
//!       ├── accounts()          silent; already-granted accounts
//!       ├── request_accounts()  prompts the user; rejectable
//!       ├── send_payment()      prompts for a signature; rejectable
//!       └── subscribe()         account / chain change events
//! ```
//!
//! The provider may simply be absent (no extension installed). That is a
//! steady state, not an error: paid content stays locked and the UI keeps
//! showing an install/connect prompt.
//!
//! Addresses are carried exactly as the provider returns them. No case
//! normalization is performed anywhere; unlock checks are byte-exact.

pub mod eth;
mod provider;
mod session;
mod simulated;

pub use provider::{WalletEvent, WalletProvider};
pub use session::WalletSession;
pub use simulated::{SentPayment, SignerBehavior, SimulatedWallet};

/// Result type for wallet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from wallet operations
///
/// `Rejected` is the explicit user-declined classification (the provider's
/// rejection code, not free-text matching); everything else that goes
/// wrong during submission is `PaymentFailed` with the provider's message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("No wallet detected")]
    NoWallet,

    #[error("Request rejected by user")]
    Rejected,

    #[error("Payment failed: {0}")]
    PaymentFailed(String),
}

impl Error {
    /// True when the user explicitly declined a prompt
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Rejected)
    }
}
