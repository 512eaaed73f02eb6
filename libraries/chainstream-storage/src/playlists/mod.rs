use crate::Catalog;
use chainstream_core::{error::Result, types::*, ChainError};

/// Number of playlists offered as recommendations
pub const RECOMMENDED_LIMIT: usize = 5;

pub fn get_all(catalog: &Catalog) -> Result<Vec<Playlist>> {
    Ok(catalog.playlists.values().cloned().collect())
}

/// The first few playlists in creation order
pub fn get_recommended(catalog: &Catalog) -> Result<Vec<Playlist>> {
    Ok(catalog
        .playlists
        .values()
        .take(RECOMMENDED_LIMIT)
        .cloned()
        .collect())
}

pub fn get_by_id(catalog: &Catalog, id: PlaylistId) -> Result<Option<Playlist>> {
    Ok(catalog.playlists.get(&id).cloned())
}

/// Playlists whose creator name is the artist's name
///
/// An unknown artist has no playlists.
pub fn get_by_artist(catalog: &Catalog, artist_id: ArtistId) -> Result<Vec<Playlist>> {
    let Some(artist) = catalog.artists.get(&artist_id) else {
        return Ok(Vec::new());
    };

    Ok(catalog
        .playlists
        .values()
        .filter(|playlist| playlist.creator == artist.name)
        .cloned()
        .collect())
}

pub fn get_user_playlists(catalog: &Catalog, user_id: UserId) -> Result<Vec<Playlist>> {
    Ok(catalog
        .playlists
        .values()
        .filter(|playlist| playlist.user_id == Some(user_id))
        .cloned()
        .collect())
}

pub fn create(catalog: &mut Catalog, playlist: CreatePlaylist) -> Result<Playlist> {
    if playlist.name.trim().is_empty() {
        return Err(ChainError::invalid_input("playlist name cannot be empty"));
    }

    let id = catalog.allocate_playlist_id();
    let playlist = playlist.into_playlist(id);
    catalog.playlists.insert(id, playlist.clone());

    Ok(playlist)
}

/// Tracks of a playlist in ascending position
///
/// Entries pointing at tracks that no longer exist are skipped.
pub fn get_tracks(catalog: &Catalog, playlist_id: PlaylistId) -> Result<Vec<Track>> {
    let mut entries: Vec<&PlaylistTrack> = catalog
        .playlist_tracks
        .iter()
        .filter(|entry| entry.playlist_id == playlist_id)
        .collect();
    entries.sort_by_key(|entry| entry.position);

    Ok(entries
        .into_iter()
        .filter_map(|entry| catalog.tracks.get(&entry.track_id).cloned())
        .collect())
}

/// Link a track into a playlist and bump the playlist's track count
pub fn add_track(catalog: &mut Catalog, entry: PlaylistTrack) -> Result<PlaylistTrack> {
    if !catalog.tracks.contains_key(&entry.track_id) {
        return Err(ChainError::TrackNotFound(entry.track_id));
    }

    let playlist = catalog
        .playlists
        .get_mut(&entry.playlist_id)
        .ok_or(ChainError::PlaylistNotFound(entry.playlist_id))?;
    playlist.track_count += 1;

    catalog.playlist_tracks.push(entry.clone());
    Ok(entry)
}
