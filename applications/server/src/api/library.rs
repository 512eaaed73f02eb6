/// Library API routes
///
/// There is no sign-in: the library belongs to the configured default user
/// and "followed" artists are all artists.
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use chainstream_core::{Artist, Playlist};

/// GET /api/library/playlists
pub async fn library_playlists(State(app_state): State<AppState>) -> Result<Json<Vec<Playlist>>> {
    let user_id = app_state.config.catalog.default_user_id;
    let playlists = app_state.store.get_user_playlists(user_id).await?;
    Ok(Json(playlists))
}

/// GET /api/library/artists
pub async fn library_artists(State(app_state): State<AppState>) -> Result<Json<Vec<Artist>>> {
    let artists = app_state.store.get_artists().await?;
    Ok(Json(artists))
}
