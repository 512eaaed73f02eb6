//! Wallet provider boundary
//!
//! The browser-extension protocol is somebody else's problem. This module
//! names the handful of requests ChainStream sends through it and the two
//! events it listens for, and wraps them in a `WalletSession`.

mod session;
pub mod units;

pub use session::{WalletSession, WalletState};

use crate::error::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::broadcast;

/// Gas limit of a plain value transfer
pub const TRANSFER_GAS: &str = "0x5208";

/// Provider error code for a chain the wallet has not been told about
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

/// Requests understood by an injected wallet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletRequest {
    /// Ask the user to connect; prompts if not yet authorized
    RequestAccounts,
    /// Accounts already authorized, without prompting
    Accounts,
    GetBalance { address: String },
    SendTransaction {
        from: String,
        to: String,
        /// Value in wei as a `0x` hex string
        value_wei: String,
    },
    ChainId,
    /// Ask the wallet to move to another chain
    SwitchChain {
        /// `0x`-prefixed hex chain id
        chain_id: String,
    },
}

impl WalletRequest {
    /// JSON-RPC method name
    pub fn method(&self) -> &'static str {
        match self {
            Self::RequestAccounts => "eth_requestAccounts",
            Self::Accounts => "eth_accounts",
            Self::GetBalance { .. } => "eth_getBalance",
            Self::SendTransaction { .. } => "eth_sendTransaction",
            Self::ChainId => "eth_chainId",
            Self::SwitchChain { .. } => "wallet_switchEthereumChain",
        }
    }

    /// JSON-RPC params array
    pub fn params(&self) -> Value {
        match self {
            Self::RequestAccounts | Self::Accounts | Self::ChainId => json!([]),
            Self::GetBalance { address } => json!([address, "latest"]),
            Self::SendTransaction {
                from,
                to,
                value_wei,
            } => json!([{
                "from": from,
                "to": to,
                "value": value_wei,
                "gas": TRANSFER_GAS,
            }]),
            Self::SwitchChain { chain_id } => json!([{ "chainId": chain_id }]),
        }
    }
}

/// Notifications pushed by the wallet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// The authorized account list changed; empty means disconnected
    AccountsChanged(Vec<String>),
    ChainChanged(String),
}

/// An injected wallet (browser extension, mobile bridge, test double)
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Send one request and return its raw JSON result
    async fn request(&self, request: WalletRequest) -> Result<Value>;

    /// Subscribe to wallet events
    fn subscribe(&self) -> broadcast::Receiver<WalletEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_request_asks_for_latest_block() {
        let request = WalletRequest::GetBalance {
            address: "0xabc".to_string(),
        };
        assert_eq!(request.method(), "eth_getBalance");
        assert_eq!(request.params(), json!(["0xabc", "latest"]));
    }

    #[test]
    fn switch_chain_wraps_id_in_object() {
        let request = WalletRequest::SwitchChain {
            chain_id: "0x1".to_string(),
        };
        assert_eq!(request.method(), "wallet_switchEthereumChain");
        assert_eq!(request.params(), json!([{ "chainId": "0x1" }]));
    }

    #[test]
    fn transfer_carries_fixed_gas() {
        let request = WalletRequest::SendTransaction {
            from: "0xfrom".to_string(),
            to: "0xto".to_string(),
            value_wei: "0x2386f26fc10000".to_string(),
        };
        let params = request.params();
        assert_eq!(params[0]["gas"], TRANSFER_GAS);
        assert_eq!(params[0]["value"], "0x2386f26fc10000");
    }
}
