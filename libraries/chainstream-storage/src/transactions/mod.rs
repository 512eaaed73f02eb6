use crate::{artists, Catalog};
use chainstream_core::{error::Result, types::*, ChainError};
use chrono::{DateTime, Utc};

/// All transactions in creation order
pub fn get_all(catalog: &Catalog) -> Result<Vec<Transaction>> {
    Ok(catalog.transactions.values().cloned().collect())
}

pub fn get_by_user(catalog: &Catalog, user_id: UserId) -> Result<Vec<Transaction>> {
    Ok(catalog
        .transactions
        .values()
        .filter(|tx| tx.user_id == Some(user_id))
        .cloned()
        .collect())
}

/// Append the receipt and credit the artist
///
/// The artist is looked up before anything is written, so an unknown artist
/// leaves the catalog untouched.
pub fn record(
    catalog: &mut Catalog,
    payment: &NewPayment,
    created_at: DateTime<Utc>,
) -> Result<Transaction> {
    let artist = catalog
        .artists
        .get(&payment.artist_id)
        .cloned()
        .ok_or(ChainError::ArtistNotFound(payment.artist_id))?;

    let id = catalog.allocate_transaction_id();
    let transaction = Transaction::completed(id, payment, &artist, created_at);

    artists::record_support(catalog, artist.id, payment.amount)?;
    catalog.transactions.insert(id, transaction.clone());

    Ok(transaction)
}
