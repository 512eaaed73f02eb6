//! Shared fixtures for client integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chainstream_client::{
    ClientError, Notification, Result, WalletEvent, WalletProvider, WalletRequest,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::broadcast;

pub const ALICE: &str = "0x1234567890123456789012345678901234567890";
pub const BOB: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";

pub const SEPOLIA: &str = "0xaa36a7";

/// Chains the mock wallet can switch to
pub const KNOWN_CHAINS: [&str; 3] = ["0x1", SEPOLIA, "0x5"];

/// 1 ETH
pub const ONE_ETH_WEI: &str = "0xde0b6b3a7640000";

/// Scriptable wallet provider
pub struct MockWallet {
    accounts: Mutex<Vec<String>>,
    balance_wei: Mutex<String>,
    authorized: AtomicBool,
    reject: AtomicBool,
    hang: AtomicBool,
    chain_id: Mutex<String>,
    requests: Mutex<Vec<WalletRequest>>,
    events: broadcast::Sender<WalletEvent>,
}

impl MockWallet {
    pub fn new(accounts: &[&str]) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            accounts: Mutex::new(accounts.iter().map(|a| a.to_string()).collect()),
            balance_wei: Mutex::new(ONE_ETH_WEI.to_string()),
            authorized: AtomicBool::new(false),
            reject: AtomicBool::new(false),
            hang: AtomicBool::new(false),
            chain_id: Mutex::new(SEPOLIA.to_string()),
            requests: Mutex::new(Vec::new()),
            events,
        }
    }

    /// A wallet the user already connected in an earlier visit
    pub fn authorized(accounts: &[&str]) -> Self {
        let wallet = Self::new(accounts);
        wallet.authorized.store(true, Ordering::SeqCst);
        wallet
    }

    /// Decline every `eth_requestAccounts`
    pub fn rejecting(self) -> Self {
        self.reject.store(true, Ordering::SeqCst);
        self
    }

    /// Never answer any request
    pub fn hanging(self) -> Self {
        self.hang.store(true, Ordering::SeqCst);
        self
    }

    pub fn set_balance(&self, wei_hex: &str) {
        *self.balance_wei.lock().unwrap() = wei_hex.to_string();
    }

    pub fn emit(&self, event: WalletEvent) {
        let _ = self.events.send(event);
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.method())
            .collect()
    }

    pub fn requests(&self) -> Vec<WalletRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request(&self, request: WalletRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());

        if self.hang.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }

        match request {
            WalletRequest::RequestAccounts => {
                if self.reject.load(Ordering::SeqCst) {
                    return Err(ClientError::Wallet {
                        method: request.method().to_string(),
                        code: Some(4001),
                        message: "User rejected the request.".to_string(),
                    });
                }
                self.authorized.store(true, Ordering::SeqCst);
                Ok(json!(*self.accounts.lock().unwrap()))
            }
            WalletRequest::Accounts => {
                if self.authorized.load(Ordering::SeqCst) {
                    Ok(json!(*self.accounts.lock().unwrap()))
                } else {
                    Ok(json!([]))
                }
            }
            WalletRequest::GetBalance { .. } => Ok(json!(*self.balance_wei.lock().unwrap())),
            WalletRequest::ChainId => Ok(json!(*self.chain_id.lock().unwrap())),
            WalletRequest::SwitchChain { chain_id } => {
                if !KNOWN_CHAINS.contains(&chain_id.as_str()) {
                    return Err(ClientError::Wallet {
                        method: "wallet_switchEthereumChain".to_string(),
                        code: Some(4902),
                        message: format!("Unrecognized chain ID \"{chain_id}\"."),
                    });
                }
                *self.chain_id.lock().unwrap() = chain_id.clone();
                self.emit(WalletEvent::ChainChanged(chain_id));
                Ok(Value::Null)
            }
            WalletRequest::SendTransaction { .. } => Ok(json!(format!("0x{}", "ab".repeat(32)))),
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<WalletEvent> {
        self.events.subscribe()
    }
}

/// Titles of every notification received so far
pub fn titles(rx: &mut broadcast::Receiver<Notification>) -> Vec<String> {
    let mut titles = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        titles.push(notification.title);
    }
    titles
}
