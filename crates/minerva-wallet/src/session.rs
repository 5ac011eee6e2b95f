//! Wallet session - current-account state for one page/process lifetime
//!
//! Constructed once and passed by reference to whatever needs it, instead
//! of living in ambient globals. The session tracks which account is
//! currently connected and turns provider events into state updates.

use crate::{Error, Result, WalletEvent, WalletProvider};
use std::sync::{Arc, RwLock};

/// Session over an optional wallet provider
///
/// `None` provider is the "no wallet installed" steady state: queries
/// succeed and report nothing connected, prompting operations return
/// [`Error::NoWallet`].
pub struct WalletSession {
    provider: Option<Arc<dyn WalletProvider>>,
    account: RwLock<Option<String>>,
}

impl WalletSession {
    /// Create a session, detecting whether a provider is present
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            provider,
            account: RwLock::new(None),
        }
    }

    /// Whether a wallet extension is present at all
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// The provider, if present
    pub fn provider(&self) -> Option<Arc<dyn WalletProvider>> {
        self.provider.clone()
    }

    /// The currently connected account, exact case as the wallet returned it
    pub fn current_account(&self) -> Option<String> {
        self.account.read().expect("account lock poisoned").clone()
    }

    /// Silent connect: adopt an already-granted account if there is one
    ///
    /// Mirrors the page-load path: no prompt, no error when nothing is
    /// granted yet or no wallet exists.
    pub async fn connect(&self) -> Result<Option<String>> {
        let Some(provider) = &self.provider else {
            return Ok(None);
        };
        let accounts = provider.accounts().await?;
        let account = accounts.into_iter().next();
        self.set_account(account.clone());
        if let Some(addr) = &account {
            tracing::info!(account = %addr, "wallet connected");
        }
        Ok(account)
    }

    /// Prompting connect: ask the user to grant account access
    ///
    /// Rejection and an empty grant both leave the session disconnected;
    /// rejection is reported so the flow can distinguish "you cancelled".
    pub async fn request_connect(&self) -> Result<String> {
        let provider = self.provider.as_ref().ok_or(Error::NoWallet)?;
        let accounts = provider.request_accounts().await?;
        match accounts.into_iter().next() {
            Some(account) => {
                self.set_account(Some(account.clone()));
                tracing::info!(account = %account, "wallet access granted");
                Ok(account)
            }
            None => Err(Error::Rejected),
        }
    }

    /// Apply a provider notification to session state
    ///
    /// Account changes swap or clear the current account; the unlock view
    /// must be recomputed by the caller afterwards, never reused.
    pub fn handle_event(&self, event: &WalletEvent) {
        match event {
            WalletEvent::AccountsChanged(accounts) => {
                let account = accounts.first().cloned();
                match &account {
                    Some(addr) => tracing::info!(account = %addr, "account changed"),
                    None => tracing::info!("wallet disconnected"),
                }
                self.set_account(account);
            }
            WalletEvent::ChainChanged(chain) => {
                tracing::info!(chain = %chain, "chain changed");
            }
        }
    }

    /// Status line for the header, mirroring the product's wording
    pub fn status(&self) -> String {
        if !self.has_provider() {
            return "No wallet detected. Please install one.".to_string();
        }
        match self.current_account() {
            Some(account) => format!("Connected: {account}"),
            None => "Wallet detected. Please connect.".to_string(),
        }
    }

    fn set_account(&self, account: Option<String>) {
        *self.account.write().expect("account lock poisoned") = account;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SignerBehavior, SimulatedWallet};

    #[tokio::test]
    async fn test_no_provider_is_steady_state() {
        let session = WalletSession::new(None);

        assert!(!session.has_provider());
        assert_eq!(session.connect().await.unwrap(), None);
        assert!(matches!(
            session.request_connect().await,
            Err(Error::NoWallet)
        ));
        assert_eq!(session.status(), "No wallet detected. Please install one.");
    }

    #[tokio::test]
    async fn test_silent_connect_adopts_granted_account() {
        let wallet = Arc::new(SimulatedWallet::new(vec!["0xAAA".into()]));
        wallet.grant();
        let session = WalletSession::new(Some(wallet));

        let account = session.connect().await.unwrap();
        assert_eq!(account.as_deref(), Some("0xAAA"));
        assert_eq!(session.status(), "Connected: 0xAAA");
    }

    #[tokio::test]
    async fn test_silent_connect_without_grant_stays_disconnected() {
        let wallet = Arc::new(SimulatedWallet::new(vec!["0xAAA".into()]));
        let session = WalletSession::new(Some(wallet));

        assert_eq!(session.connect().await.unwrap(), None);
        assert_eq!(session.status(), "Wallet detected. Please connect.");
    }

    #[tokio::test]
    async fn test_request_connect_rejection() {
        let wallet = Arc::new(SimulatedWallet::new(vec!["0xAAA".into()]));
        wallet.set_behavior(SignerBehavior::RejectConnect);
        let session = WalletSession::new(Some(wallet));

        let err = session.request_connect().await.unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(session.current_account(), None);
    }

    #[tokio::test]
    async fn test_account_change_event_swaps_account() {
        let wallet = Arc::new(SimulatedWallet::new(vec!["0xAAA".into(), "0xBBB".into()]));
        let session = WalletSession::new(Some(wallet.clone()));
        session.request_connect().await.unwrap();
        assert_eq!(session.current_account().as_deref(), Some("0xAAA"));

        session.handle_event(&WalletEvent::AccountsChanged(vec!["0xBBB".into()]));
        assert_eq!(session.current_account().as_deref(), Some("0xBBB"));

        session.handle_event(&WalletEvent::AccountsChanged(vec![]));
        assert_eq!(session.current_account(), None);
        assert_eq!(session.status(), "Wallet detected. Please connect.");
    }

    #[tokio::test]
    async fn test_address_case_is_preserved() {
        let mixed = "0xAbCdEf0123456789aBcDeF0123456789AbCdEf01";
        let wallet = Arc::new(SimulatedWallet::new(vec![mixed.into()]));
        let session = WalletSession::new(Some(wallet));

        let account = session.request_connect().await.unwrap();
        assert_eq!(account, mixed);
    }
}
