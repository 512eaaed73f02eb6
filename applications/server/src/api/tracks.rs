/// Tracks API routes
use crate::{config::CatalogSettings, error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chainstream_core::{ArtistId, CreateTrack, Track, TrackId};
use serde::{Deserialize, Serialize};

/// Upload form; everything optional so missing fields get a proper 400
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadTrackRequest {
    pub title: Option<String>,
    pub album: Option<String>,
    pub duration: Option<String>,
    pub artist_id: Option<ArtistId>,
    pub audio_url: Option<String>,
    pub album_cover: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadTrackResponse {
    pub message: String,
    pub track: Track,
}

/// GET /api/tracks
pub async fn list_tracks(State(app_state): State<AppState>) -> Result<Json<Vec<Track>>> {
    let tracks = app_state.store.get_all_tracks().await?;
    Ok(Json(tracks))
}

/// GET /api/tracks/recent
pub async fn recent_tracks(State(app_state): State<AppState>) -> Result<Json<Vec<Track>>> {
    let tracks = app_state.store.get_recent_tracks().await?;
    Ok(Json(tracks))
}

/// GET /api/tracks/:id
pub async fn get_track(
    Path(id): Path<TrackId>,
    State(app_state): State<AppState>,
) -> Result<Json<Track>> {
    let track = app_state
        .store
        .get_track(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Track not found".to_string()))?;

    Ok(Json(track))
}

/// POST /api/tracks
/// Add an uploaded track to the catalog
pub async fn upload_track(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<UploadTrackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UploadTrackResponse>)> {
    let Json(req) = body?;
    let (Some(title), Some(album), Some(duration)) = (
        non_blank(req.title),
        non_blank(req.album),
        non_blank(req.duration),
    ) else {
        return Err(ServerError::Validation {
            message: "Missing required fields".to_string(),
            details: "Title, album, and duration are required".to_string(),
        });
    };

    let catalog = &app_state.config.catalog;
    let artist_id = req.artist_id.unwrap_or(catalog.default_artist_id);
    let artist = app_state
        .store
        .get_artist(artist_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Artist not found".to_string()))?;

    let create = CreateTrack {
        title,
        artist: artist.name,
        artist_id,
        album,
        duration,
        album_cover: non_blank(req.album_cover)
            .unwrap_or_else(|| catalog.default_cover_url.clone()),
        audio_url: playable_audio_url(req.audio_url, catalog),
        earnings: 0.0,
        play_count: 0,
    };

    let track = app_state.store.create_track(create).await?;
    tracing::info!(track_id = track.id, title = %track.title, "Track uploaded");

    Ok((
        StatusCode::CREATED,
        Json(UploadTrackResponse {
            message: "Track uploaded successfully".to_string(),
            track,
        }),
    ))
}

/// Keep real URLs; local `blob:` URLs and placeholders get the demo audio
fn playable_audio_url(audio_url: Option<String>, catalog: &CatalogSettings) -> String {
    match non_blank(audio_url) {
        Some(url) if !url.starts_with("blob:") && !url.contains("example.com") => url,
        _ => catalog.demo_audio_url.clone(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
