//! "Support the artist" payments
//!
//! A payment needs a connected wallet account as its source address. When
//! none is connected the recorder asks the wallet first and carries on once
//! the user accepted. The backend does the bookkeeping; nothing is signed or
//! sent on-chain here.

use crate::backend::{PayRequest, PaymentBackend};
use crate::cancel::until_cancelled;
use crate::error::{ClientError, Result};
use crate::notification::{notify, Notification};
use crate::wallet::WalletSession;
use chainstream_core::validation::{validate_amount, validate_wallet_address};
use chainstream_core::{ArtistId, Transaction};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub struct PaymentRecorder {
    wallet: Arc<WalletSession>,
    backend: Arc<dyn PaymentBackend>,
    notifications: broadcast::Sender<Notification>,
}

impl PaymentRecorder {
    pub fn new(
        wallet: Arc<WalletSession>,
        backend: Arc<dyn PaymentBackend>,
        notifications: broadcast::Sender<Notification>,
    ) -> Self {
        Self {
            wallet,
            backend,
            notifications,
        }
    }

    pub fn wallet(&self) -> &Arc<WalletSession> {
        &self.wallet
    }

    /// Pay `amount` ETH to `artist_id` from the connected account
    pub async fn pay_artist(
        &self,
        artist_id: ArtistId,
        amount: f64,
        cancel: &CancellationToken,
    ) -> Result<Transaction> {
        if let Err(e) = validate_amount(amount) {
            self.notify_failure();
            return Err(e.into());
        }

        let from_address = match self.wallet.account().await {
            Some(account) => account,
            None => {
                notify(
                    &self.notifications,
                    Notification::destructive(
                        "Wallet Not Connected",
                        "Please connect your wallet to make payments.",
                    ),
                );
                // connect() reports its own failure
                self.wallet.connect(cancel).await?
            }
        };

        if let Err(e) = validate_wallet_address(&from_address) {
            self.notify_failure();
            return Err(e.into());
        }

        notify(
            &self.notifications,
            Notification::info("Processing Payment", "Your payment is being processed..."),
        );

        let request = PayRequest {
            amount,
            from_address,
        };
        let submitted = until_cancelled(
            cancel,
            until_cancelled(
                &self.wallet.child_token(),
                self.backend.pay_artist(artist_id, &request),
            ),
        )
        .await;

        match submitted {
            Ok(receipt) => {
                info!(
                    artist_id,
                    amount,
                    tx_hash = %receipt.transaction.tx_hash,
                    "Payment recorded"
                );

                if let Err(e) = self.wallet.refresh_balance(cancel).await {
                    warn!(error = %e, "Failed to refresh balance after payment");
                }

                notify(
                    &self.notifications,
                    Notification::info(
                        "Payment Successful",
                        format!("You have successfully supported the artist with {amount} ETH."),
                    ),
                );
                Ok(receipt.transaction)
            }
            Err(ClientError::Cancelled) => Err(ClientError::Cancelled),
            Err(e) => {
                warn!(artist_id, error = %e, "Payment failed");
                self.notify_failure();
                Err(e)
            }
        }
    }

    fn notify_failure(&self) {
        notify(
            &self.notifications,
            Notification::destructive(
                "Payment Failed",
                "There was an error processing your payment. Please try again.",
            ),
        );
    }
}
