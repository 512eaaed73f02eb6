//! Simulated payment records
//!
//! A `Transaction` is the append-only receipt of one "support the artist"
//! payment. Nothing here touches a chain: the hash is synthetic and is
//! generated by whoever builds the `NewPayment`.

use crate::error::Result;
use crate::types::{Artist, ArtistId, UserId};
use crate::validation::{validate_amount, validate_wallet_address};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TransactionId = i64;

/// Status recorded for every simulated payment
pub const STATUS_COMPLETED: &str = "Completed";

/// Recorded payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: Option<UserId>,
    /// Artist display name at the time of payment
    pub artist: String,
    pub artist_id: ArtistId,
    pub artist_img: String,
    /// Amount in ETH
    pub amount: f64,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub status: String,
    pub tx_hash: String,
    pub from_address: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build the receipt for `payment` against `artist`
    pub fn completed(
        id: TransactionId,
        payment: &NewPayment,
        artist: &Artist,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id: payment.user_id,
            artist: artist.name.clone(),
            artist_id: artist.id,
            artist_img: artist.image_url.clone(),
            amount: payment.amount,
            date: created_at.format("%Y-%m-%d").to_string(),
            status: STATUS_COMPLETED.to_string(),
            tx_hash: payment.tx_hash.clone(),
            from_address: payment.from_address.clone(),
            created_at,
        }
    }
}

/// A payment waiting to be recorded
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub artist_id: ArtistId,
    pub amount: f64,
    pub from_address: String,
    pub user_id: Option<UserId>,
    pub tx_hash: String,
}

impl NewPayment {
    /// Validate amount and source address, rejecting the whole payment on failure
    pub fn validated(
        artist_id: ArtistId,
        amount: f64,
        from_address: impl Into<String>,
        user_id: Option<UserId>,
        tx_hash: impl Into<String>,
    ) -> Result<Self> {
        let from_address = from_address.into();
        validate_amount(amount)?;
        validate_wallet_address(&from_address)?;

        Ok(Self {
            artist_id,
            amount,
            from_address,
            user_id,
            tx_hash: tx_hash.into(),
        })
    }
}
