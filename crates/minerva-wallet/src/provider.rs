//! Wallet provider trait and event stream

use crate::Result;
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Notifications pushed by the wallet extension
#[derive(Debug, Clone)]
pub enum WalletEvent {
    /// The granted account list changed; empty means disconnected
    AccountsChanged(Vec<String>),
    /// The connected chain changed (the UI reloads on this)
    ChainChanged(String),
}

/// A browser-wallet style provider
///
/// Every operation suspends the caller without blocking; account-grant and
/// payment prompts resolve only after external user confirmation.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Accounts already granted to this origin, without prompting
    async fn accounts(&self) -> Result<Vec<String>>;

    /// Prompt the user to grant account access; rejectable
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Submit a payment; resolves once the transaction is sent (not mined)
    ///
    /// Returns the transaction hash. User refusal to sign surfaces as
    /// [`crate::Error::Rejected`]; any other submission problem as
    /// [`crate::Error::PaymentFailed`].
    async fn send_payment(&self, to: &str, amount_wei: u128, gas_limit: u64) -> Result<String>;

    /// Subscribe to account and chain change notifications
    fn subscribe(&self) -> broadcast::Receiver<WalletEvent>;

    /// Human-readable chain name
    fn chain(&self) -> String;
}
