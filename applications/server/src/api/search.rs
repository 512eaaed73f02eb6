/// Search API route
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use chainstream_core::SearchResults;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/search?q=
/// A blank query returns the whole catalog
pub async fn search(
    State(app_state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResults>> {
    tracing::debug!(query = %query.q, "Search");
    let results = app_state.store.search(&query.q).await?;
    Ok(Json(results))
}
