//! Simulated wallet provider
//!
//! Deterministic stand-in for a real browser extension, used by the test
//! suites and the CLI demo. The signer's decisions are scripted through
//! [`SignerBehavior`], and account switches are injected as events the
//! same way a real extension would push them.

use crate::{Error, Result, WalletEvent, WalletProvider};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;
use tokio::sync::{broadcast, Semaphore};

/// Scripted signer decision for prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignerBehavior {
    /// Approve every prompt
    Approve,
    /// Decline the account-grant prompt
    RejectConnect,
    /// Decline the payment signature prompt
    RejectPayment,
    /// Fail payment submission with a provider message
    FailPayment(String),
    /// Park payment prompts until [`SimulatedWallet::release_payments`]
    HoldPayment,
}

/// A payment the simulated wallet has sent
#[derive(Debug, Clone)]
pub struct SentPayment {
    pub from: String,
    pub to: String,
    pub amount_wei: u128,
    pub gas_limit: u64,
    pub hash: String,
}

/// Scriptable in-process wallet provider
pub struct SimulatedWallet {
    accounts: RwLock<Vec<String>>,
    granted: AtomicBool,
    behavior: RwLock<SignerBehavior>,
    chain: String,
    nonce: AtomicU64,
    sent: RwLock<Vec<SentPayment>>,
    events: broadcast::Sender<WalletEvent>,
    payment_gate: Semaphore,
}

impl SimulatedWallet {
    /// Create a wallet holding the given accounts, not yet granted
    pub fn new(accounts: Vec<String>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            accounts: RwLock::new(accounts),
            granted: AtomicBool::new(false),
            behavior: RwLock::new(SignerBehavior::Approve),
            chain: "sepolia".to_string(),
            nonce: AtomicU64::new(0),
            sent: RwLock::new(Vec::new()),
            events,
            payment_gate: Semaphore::new(0),
        }
    }

    /// Mark the origin as already granted (a returning visitor)
    pub fn grant(&self) {
        self.granted.store(true, Ordering::SeqCst);
    }

    /// Script the signer's next decisions
    pub fn set_behavior(&self, behavior: SignerBehavior) {
        *self.behavior.write().expect("behavior lock poisoned") = behavior;
    }

    /// Switch the active account and notify subscribers
    pub fn switch_account(&self, address: &str) {
        {
            let mut accounts = self.accounts.write().expect("accounts lock poisoned");
            accounts.retain(|a| a != address);
            accounts.insert(0, address.to_string());
        }
        let snapshot = self.granted_accounts();
        let _ = self.events.send(WalletEvent::AccountsChanged(snapshot));
    }

    /// Revoke the grant and notify subscribers with an empty account list
    pub fn disconnect(&self) {
        self.granted.store(false, Ordering::SeqCst);
        let _ = self.events.send(WalletEvent::AccountsChanged(Vec::new()));
    }

    /// Let one parked payment proceed (see [`SignerBehavior::HoldPayment`])
    pub fn release_payments(&self) {
        self.payment_gate.add_permits(1);
    }

    /// Payments sent so far
    pub fn sent_payments(&self) -> Vec<SentPayment> {
        self.sent.read().expect("sent lock poisoned").clone()
    }

    fn granted_accounts(&self) -> Vec<String> {
        if self.granted.load(Ordering::SeqCst) {
            self.accounts.read().expect("accounts lock poisoned").clone()
        } else {
            Vec::new()
        }
    }

    fn behavior_snapshot(&self) -> SignerBehavior {
        self.behavior.read().expect("behavior lock poisoned").clone()
    }

    fn derive_hash(&self, from: &str, to: &str, amount_wei: u128) -> String {
        let nonce = self.nonce.fetch_add(1, Ordering::SeqCst);
        let mut hasher = Sha256::new();
        hasher.update(b"minerva-sim-tx:");
        hasher.update(from.as_bytes());
        hasher.update(to.as_bytes());
        hasher.update(amount_wei.to_be_bytes());
        hasher.update(nonce.to_be_bytes());
        format!("0x{}", hex::encode(hasher.finalize()))
    }
}

#[async_trait]
impl WalletProvider for SimulatedWallet {
    async fn accounts(&self) -> Result<Vec<String>> {
        Ok(self.granted_accounts())
    }

    async fn request_accounts(&self) -> Result<Vec<String>> {
        if self.behavior_snapshot() == SignerBehavior::RejectConnect {
            return Err(Error::Rejected);
        }
        self.grant();
        Ok(self.granted_accounts())
    }

    async fn send_payment(&self, to: &str, amount_wei: u128, gas_limit: u64) -> Result<String> {
        let from = self
            .granted_accounts()
            .into_iter()
            .next()
            .ok_or_else(|| Error::PaymentFailed("no account connected".to_string()))?;

        match self.behavior_snapshot() {
            SignerBehavior::RejectConnect | SignerBehavior::Approve => {}
            SignerBehavior::RejectPayment => return Err(Error::Rejected),
            SignerBehavior::FailPayment(message) => return Err(Error::PaymentFailed(message)),
            SignerBehavior::HoldPayment => {
                let permit = self
                    .payment_gate
                    .acquire()
                    .await
                    .map_err(|_| Error::PaymentFailed("signer gone".to_string()))?;
                permit.forget();
            }
        }

        let hash = self.derive_hash(&from, to, amount_wei);
        tracing::debug!(%from, %to, amount_wei, gas_limit, %hash, "simulated payment sent");
        self.sent.write().expect("sent lock poisoned").push(SentPayment {
            from,
            to: to.to_string(),
            amount_wei,
            gas_limit,
            hash: hash.clone(),
        });
        Ok(hash)
    }

    fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
        self.events.subscribe()
    }

    fn chain(&self) -> String {
        self.chain.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accounts_empty_until_granted() {
        let wallet = SimulatedWallet::new(vec!["0xAAA".into()]);
        assert!(wallet.accounts().await.unwrap().is_empty());

        let granted = wallet.request_accounts().await.unwrap();
        assert_eq!(granted, vec!["0xAAA".to_string()]);
        assert_eq!(wallet.accounts().await.unwrap(), granted);
    }

    #[tokio::test]
    async fn test_payment_approval_records_hash() {
        let wallet = SimulatedWallet::new(vec!["0xAAA".into()]);
        wallet.grant();

        let hash = wallet.send_payment("0xFEE", 10, 100_000).await.unwrap();
        assert!(hash.starts_with("0x"));
        assert_eq!(hash.len(), 66);

        let sent = wallet.sent_payments();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].hash, hash);
        assert_eq!(sent[0].from, "0xAAA");
    }

    #[tokio::test]
    async fn test_payment_hashes_are_unique() {
        let wallet = SimulatedWallet::new(vec!["0xAAA".into()]);
        wallet.grant();

        let a = wallet.send_payment("0xFEE", 10, 100_000).await.unwrap();
        let b = wallet.send_payment("0xFEE", 10, 100_000).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_rejection_and_failure_are_distinguishable() {
        let wallet = SimulatedWallet::new(vec!["0xAAA".into()]);
        wallet.grant();

        wallet.set_behavior(SignerBehavior::RejectPayment);
        let err = wallet.send_payment("0xFEE", 10, 100_000).await.unwrap_err();
        assert!(err.is_rejection());

        wallet.set_behavior(SignerBehavior::FailPayment("insufficient funds".into()));
        let err = wallet.send_payment("0xFEE", 10, 100_000).await.unwrap_err();
        assert!(!err.is_rejection());
        assert!(err.to_string().contains("insufficient funds"));
    }

    #[tokio::test]
    async fn test_switch_account_emits_event() {
        let wallet = SimulatedWallet::new(vec!["0xAAA".into(), "0xBBB".into()]);
        wallet.grant();
        let mut events = wallet.subscribe();

        wallet.switch_account("0xBBB");
        match events.recv().await.unwrap() {
            WalletEvent::AccountsChanged(accounts) => {
                assert_eq!(accounts.first().map(String::as_str), Some("0xBBB"));
            }
            other => panic!("unexpected event: {other:?}"),
        }

        wallet.disconnect();
        match events.recv().await.unwrap() {
            WalletEvent::AccountsChanged(accounts) => assert!(accounts.is_empty()),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
