/// Transaction API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use chainstream_core::Transaction;

/// GET /api/transactions
pub async fn list_transactions(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Transaction>>> {
    let transactions = app_state.store.get_transactions().await?;
    Ok(Json(transactions))
}
