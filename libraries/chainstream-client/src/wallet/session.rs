//! Connected-wallet state
//!
//! A `WalletSession` owns a root cancellation token. Every async operation
//! takes a caller token as well and is abandoned when either fires; state is
//! only written after the provider answered and neither token was cancelled.

use super::units::{chain_name, eth_to_wei_hex, format_address, wei_hex_to_eth};
use super::{WalletEvent, WalletProvider, WalletRequest, UNRECOGNIZED_CHAIN_CODE};
use crate::cancel::until_cancelled;
use crate::error::{ClientError, Result};
use crate::notification::{notify, Notification};
use chainstream_core::validation::{validate_amount, validate_wallet_address};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Snapshot of the wallet as last observed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletState {
    pub account: Option<String>,
    /// Balance in ETH, 4 decimals
    pub balance: f64,
    pub chain_id: Option<String>,
}

pub struct WalletSession {
    provider: Option<Arc<dyn WalletProvider>>,
    state: RwLock<WalletState>,
    notifications: broadcast::Sender<Notification>,
    root: CancellationToken,
}

impl WalletSession {
    /// `provider` is `None` when no wallet is installed
    pub fn new(
        provider: Option<Arc<dyn WalletProvider>>,
        notifications: broadcast::Sender<Notification>,
    ) -> Self {
        Self {
            provider,
            state: RwLock::new(WalletState::default()),
            notifications,
            root: CancellationToken::new(),
        }
    }

    pub fn with_provider(
        provider: Arc<dyn WalletProvider>,
        notifications: broadcast::Sender<Notification>,
    ) -> Self {
        Self::new(Some(provider), notifications)
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn state(&self) -> WalletState {
        self.state.read().await.clone()
    }

    pub async fn account(&self) -> Option<String> {
        self.state.read().await.account.clone()
    }

    pub async fn balance(&self) -> f64 {
        self.state.read().await.balance
    }

    pub async fn is_connected(&self) -> bool {
        self.state.read().await.account.is_some()
    }

    /// Display form of the connected account
    pub async fn display_address(&self) -> Option<String> {
        self.account().await.map(|account| format_address(&account))
    }

    /// Name of the last observed chain
    pub async fn network_name(&self) -> Option<String> {
        self.state
            .read()
            .await
            .chain_id
            .as_deref()
            .map(chain_name)
    }

    /// Token cancelled together with this session
    pub fn child_token(&self) -> CancellationToken {
        self.root.child_token()
    }

    pub fn is_disposed(&self) -> bool {
        self.root.is_cancelled()
    }

    /// Cancel every in-flight operation and the event listener
    pub fn dispose(&self) {
        debug!("Disposing wallet session");
        self.root.cancel();
    }

    /// Pick up an already authorized account without prompting
    ///
    /// Returns whether an account was found.
    pub async fn restore(&self, cancel: &CancellationToken) -> Result<bool> {
        let Some(provider) = &self.provider else {
            return Ok(false);
        };

        let accounts = self.call(provider, WalletRequest::Accounts, cancel).await?;
        let Some(account) = first_account(accounts)? else {
            return Ok(false);
        };
        validate_wallet_address(&account)?;

        self.adopt(account, cancel).await?;
        Ok(true)
    }

    /// Ask the wallet for an account
    ///
    /// Failures are reported as a destructive notification and
    /// `ConnectionRejected`; cancellation is returned as is.
    pub async fn connect(&self, cancel: &CancellationToken) -> Result<String> {
        let Some(provider) = &self.provider else {
            notify(
                &self.notifications,
                Notification::destructive(
                    "Wallet not found",
                    "Please install MetaMask or another Web3 wallet to continue.",
                ),
            );
            return Err(ClientError::WalletUnavailable);
        };

        let requested = async {
            let accounts = self
                .call(provider, WalletRequest::RequestAccounts, cancel)
                .await?;
            let account = first_account(accounts)?.ok_or_else(|| {
                ClientError::ConnectionRejected("wallet returned no accounts".to_string())
            })?;
            validate_wallet_address(&account)?;
            Ok::<_, ClientError>(account)
        };

        match requested.await {
            Ok(account) => {
                self.adopt(account.clone(), cancel).await?;
                info!(account = %format_address(&account), "Wallet connected");
                notify(
                    &self.notifications,
                    Notification::info(
                        "Wallet Connected",
                        "Your wallet has been successfully connected.",
                    ),
                );
                Ok(account)
            }
            Err(ClientError::Cancelled) => Err(ClientError::Cancelled),
            Err(e) => {
                warn!(error = %e, "Wallet connection failed");
                notify(
                    &self.notifications,
                    Notification::destructive(
                        "Connection Failed",
                        "Failed to connect to your wallet. Please try again.",
                    ),
                );
                Err(match e {
                    ClientError::ConnectionRejected(_) => e,
                    other => ClientError::ConnectionRejected(other.to_string()),
                })
            }
        }
    }

    /// Forget the account locally; the wallet keeps its authorization
    pub async fn disconnect(&self) {
        self.clear().await;
        notify(
            &self.notifications,
            Notification::info("Wallet Disconnected", "Your wallet has been disconnected."),
        );
    }

    /// Re-read the balance of the connected account
    pub async fn refresh_balance(&self, cancel: &CancellationToken) -> Result<f64> {
        let provider = self.provider.as_ref().ok_or(ClientError::WalletUnavailable)?;
        let Some(address) = self.account().await else {
            return Ok(0.0);
        };

        let balance = self.fetch_balance(provider, &address, cancel).await?;

        let mut state = self.state.write().await;
        // The account may have switched while the request was in flight
        if state.account.as_deref() == Some(address.as_str()) {
            state.balance = balance;
        }
        Ok(balance)
    }

    /// Ask the wallet which chain it is on
    pub async fn refresh_chain(&self, cancel: &CancellationToken) -> Result<String> {
        let provider = self.provider.as_ref().ok_or(ClientError::WalletUnavailable)?;
        let value = self.call(provider, WalletRequest::ChainId, cancel).await?;
        let chain_id = as_string(&value, "eth_chainId")?;

        self.state.write().await.chain_id = Some(chain_id.clone());
        Ok(chain_id)
    }

    /// Ask the wallet to move to `chain_id`
    ///
    /// A chain the wallet has never seen fails with `ChainNotAdded`. The new
    /// chain is recorded as soon as the wallet accepts.
    pub async fn switch_chain(&self, chain_id: &str, cancel: &CancellationToken) -> Result<()> {
        let provider = self.provider.as_ref().ok_or(ClientError::WalletUnavailable)?;
        let request = WalletRequest::SwitchChain {
            chain_id: chain_id.to_string(),
        };

        match self.call(provider, request, cancel).await {
            Ok(_) => {
                info!(chain = %chain_name(chain_id), "Switched network");
                self.state.write().await.chain_id = Some(chain_id.to_string());
                Ok(())
            }
            Err(ClientError::Wallet {
                code: Some(UNRECOGNIZED_CHAIN_CODE),
                ..
            }) => Err(ClientError::ChainNotAdded(chain_id.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Send a plain value transfer from the connected account
    ///
    /// Returns the transaction hash reported by the wallet.
    pub async fn send_transfer(
        &self,
        to: &str,
        amount_eth: f64,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let provider = self.provider.as_ref().ok_or(ClientError::WalletUnavailable)?;
        validate_amount(amount_eth)?;
        validate_wallet_address(to)?;
        let from = self.account().await.ok_or_else(|| {
            ClientError::ConnectionRejected("no connected account".to_string())
        })?;

        let request = WalletRequest::SendTransaction {
            from,
            to: to.to_string(),
            value_wei: eth_to_wei_hex(amount_eth),
        };
        let value = self.call(provider, request, cancel).await?;
        as_string(&value, "eth_sendTransaction")
    }

    /// Apply a wallet event
    pub async fn handle_event(&self, event: WalletEvent, cancel: &CancellationToken) -> Result<()> {
        match event {
            WalletEvent::AccountsChanged(accounts) => match accounts.into_iter().next() {
                None => {
                    info!("Wallet reported no accounts; disconnecting");
                    self.clear().await;
                }
                Some(account) => {
                    validate_wallet_address(&account)?;
                    self.adopt(account, cancel).await?;
                }
            },
            WalletEvent::ChainChanged(chain_id) => {
                debug!(chain = %chain_name(&chain_id), "Chain changed");
                self.state.write().await.chain_id = Some(chain_id);
            }
        }
        Ok(())
    }

    /// Apply wallet events in the background until the session is disposed
    pub fn listen(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let mut events = self.provider.as_ref()?.subscribe();
        let session = Arc::clone(self);
        let root = self.root.clone();

        Some(tokio::spawn(async move {
            loop {
                let event = tokio::select! {
                    () = root.cancelled() => break,
                    event = events.recv() => event,
                };

                match event {
                    Ok(event) => {
                        if let Err(e) = session.handle_event(event, &root).await {
                            warn!(error = %e, "Failed to apply wallet event");
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Wallet event listener lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            debug!("Wallet event listener stopped");
        }))
    }

    /// Make `account` current and fetch its balance
    ///
    /// A failed balance read leaves the balance at zero.
    async fn adopt(&self, account: String, cancel: &CancellationToken) -> Result<()> {
        let balance = match &self.provider {
            Some(provider) => match self.fetch_balance(provider, &account, cancel).await {
                Ok(balance) => balance,
                Err(ClientError::Cancelled) => return Err(ClientError::Cancelled),
                Err(e) => {
                    warn!(error = %e, "Failed to read wallet balance");
                    0.0
                }
            },
            None => 0.0,
        };

        let mut state = self.state.write().await;
        state.account = Some(account);
        state.balance = balance;
        Ok(())
    }

    async fn clear(&self) {
        let mut state = self.state.write().await;
        state.account = None;
        state.balance = 0.0;
    }

    async fn fetch_balance(
        &self,
        provider: &Arc<dyn WalletProvider>,
        address: &str,
        cancel: &CancellationToken,
    ) -> Result<f64> {
        let request = WalletRequest::GetBalance {
            address: address.to_string(),
        };
        let value = self.call(provider, request, cancel).await?;
        wei_hex_to_eth(&as_string(&value, "eth_getBalance")?)
    }

    /// One provider round trip, abandoned if either token fires
    async fn call(
        &self,
        provider: &Arc<dyn WalletProvider>,
        request: WalletRequest,
        cancel: &CancellationToken,
    ) -> Result<Value> {
        debug!(method = request.method(), "Wallet request");
        until_cancelled(cancel, until_cancelled(&self.root, provider.request(request))).await
    }
}

impl Drop for WalletSession {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

fn first_account(value: Value) -> Result<Option<String>> {
    let accounts: Vec<String> = serde_json::from_value(value)
        .map_err(|e| ClientError::ParseError(format!("invalid account list: {e}")))?;
    Ok(accounts.into_iter().next())
}

fn as_string(value: &Value, method: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ClientError::ParseError(format!("{method} did not return a string")))
}
