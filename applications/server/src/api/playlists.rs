/// Playlists API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use chainstream_core::{Playlist, PlaylistId, Track};

/// GET /api/playlists
pub async fn list_playlists(State(app_state): State<AppState>) -> Result<Json<Vec<Playlist>>> {
    let playlists = app_state.store.get_playlists().await?;
    Ok(Json(playlists))
}

/// GET /api/playlists/recommended
pub async fn recommended_playlists(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Playlist>>> {
    let playlists = app_state.store.get_recommended_playlists().await?;
    Ok(Json(playlists))
}

/// GET /api/playlists/:id
pub async fn get_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
) -> Result<Json<Playlist>> {
    let playlist = app_state
        .store
        .get_playlist(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    Ok(Json(playlist))
}

/// GET /api/playlists/:id/tracks
/// Tracks in playlist order; an unknown playlist has none
pub async fn playlist_tracks(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Track>>> {
    let tracks = app_state.store.get_playlist_tracks(id).await?;
    Ok(Json(tracks))
}
