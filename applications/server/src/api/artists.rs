/// Artists API routes, including payments
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chainstream_core::{Artist, ArtistId, NewPayment, Playlist, Track, Transaction};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Bytes in a synthetic transaction hash
const TX_HASH_BYTES: usize = 32;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub from_address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PayResponse {
    pub message: String,
    pub transaction: Transaction,
}

/// GET /api/artists
pub async fn list_artists(State(app_state): State<AppState>) -> Result<Json<Vec<Artist>>> {
    let artists = app_state.store.get_artists().await?;
    Ok(Json(artists))
}

/// GET /api/artists/featured
pub async fn featured_artists(State(app_state): State<AppState>) -> Result<Json<Vec<Artist>>> {
    let artists = app_state.store.get_featured_artists().await?;
    Ok(Json(artists))
}

/// GET /api/artists/:id
pub async fn get_artist(
    Path(id): Path<ArtistId>,
    State(app_state): State<AppState>,
) -> Result<Json<Artist>> {
    let artist = app_state
        .store
        .get_artist(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Artist not found".to_string()))?;

    Ok(Json(artist))
}

/// GET /api/artists/:id/tracks
pub async fn artist_tracks(
    Path(id): Path<ArtistId>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Track>>> {
    let tracks = app_state.store.get_tracks_by_artist(id).await?;
    Ok(Json(tracks))
}

/// GET /api/artists/:id/playlists
pub async fn artist_playlists(
    Path(id): Path<ArtistId>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Playlist>>> {
    let playlists = app_state.store.get_playlists_by_artist(id).await?;
    Ok(Json(playlists))
}

/// POST /api/artists/:id/pay
/// Record a simulated payment and credit the artist
pub async fn pay_artist(
    Path(id): Path<ArtistId>,
    State(app_state): State<AppState>,
    body: std::result::Result<Json<PayRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PayResponse>)> {
    if app_state.store.get_artist(id).await?.is_none() {
        return Err(ServerError::NotFound("Artist not found".to_string()));
    }

    // Body problems are reported only once the artist is known to exist
    let Json(req) = body?;

    let (amount, from_address) = match (req.amount, req.from_address) {
        (Some(amount), Some(address)) if amount != 0.0 && !address.is_empty() => {
            (amount, address)
        }
        _ => {
            return Err(ServerError::BadRequest(
                "Amount and fromAddress are required".to_string(),
            ))
        }
    };

    let payment = NewPayment::validated(
        id,
        amount,
        from_address,
        Some(app_state.config.catalog.default_user_id),
        synthetic_tx_hash(),
    )?;

    // Artist lookup and credit happen again under the store's write lock
    let transaction = app_state.store.record_payment(payment).await?;

    tracing::info!(
        artist_id = id,
        amount,
        transaction_id = transaction.id,
        "Payment successful"
    );

    Ok((
        StatusCode::CREATED,
        Json(PayResponse {
            message: "Payment successful".to_string(),
            transaction,
        }),
    ))
}

/// `0x` followed by 64 random hex digits
pub fn synthetic_tx_hash() -> String {
    let mut rng = rand::thread_rng();
    let hex: String = (0..TX_HASH_BYTES)
        .map(|_| format!("{:02x}", rng.gen::<u8>()))
        .collect();
    format!("0x{hex}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_hash_is_prefixed_hex() {
        let hash = synthetic_tx_hash();
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tx_hashes_differ() {
        assert_ne!(synthetic_tx_hash(), synthetic_tx_hash());
    }
}
