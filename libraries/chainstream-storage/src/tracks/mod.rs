use crate::Catalog;
use chainstream_core::{error::Result, types::*, validation::validate_track_fields};

/// All tracks ordered by id
pub fn get_all(catalog: &Catalog) -> Result<Vec<Track>> {
    Ok(catalog.tracks.values().cloned().collect())
}

/// Newest first
pub fn get_recent(catalog: &Catalog) -> Result<Vec<Track>> {
    Ok(catalog.tracks.values().rev().cloned().collect())
}

pub fn get_by_id(catalog: &Catalog, id: TrackId) -> Result<Option<Track>> {
    Ok(catalog.tracks.get(&id).cloned())
}

pub fn get_by_artist(catalog: &Catalog, artist_id: ArtistId) -> Result<Vec<Track>> {
    Ok(catalog
        .tracks
        .values()
        .filter(|track| track.artist_id == artist_id)
        .cloned()
        .collect())
}

pub fn create(catalog: &mut Catalog, track: CreateTrack) -> Result<Track> {
    validate_track_fields(&track.title, &track.album, &track.duration)?;

    let id = catalog.allocate_track_id();
    let track = track.into_track(id);
    catalog.tracks.insert(id, track.clone());

    Ok(track)
}
