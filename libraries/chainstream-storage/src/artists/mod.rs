use crate::Catalog;
use chainstream_core::{error::Result, types::*, ChainError};

/// Number of artists shown on the home page
pub const FEATURED_LIMIT: usize = 6;

pub fn get_all(catalog: &Catalog) -> Result<Vec<Artist>> {
    Ok(catalog.artists.values().cloned().collect())
}

/// The first few artists in creation order
pub fn get_featured(catalog: &Catalog) -> Result<Vec<Artist>> {
    Ok(catalog
        .artists
        .values()
        .take(FEATURED_LIMIT)
        .cloned()
        .collect())
}

pub fn get_by_id(catalog: &Catalog, id: ArtistId) -> Result<Option<Artist>> {
    Ok(catalog.artists.get(&id).cloned())
}

pub fn create(catalog: &mut Catalog, artist: CreateArtist) -> Result<Artist> {
    if artist.name.trim().is_empty() {
        return Err(ChainError::invalid_input("artist name cannot be empty"));
    }

    let id = catalog.allocate_artist_id();
    let artist = artist.into_artist(id);
    catalog.artists.insert(id, artist.clone());

    Ok(artist)
}

/// Credit one payment to an artist
pub fn record_support(catalog: &mut Catalog, id: ArtistId, amount: f64) -> Result<Artist> {
    let artist = catalog
        .artists
        .get_mut(&id)
        .ok_or(ChainError::ArtistNotFound(id))?;

    artist.record_support(amount);
    Ok(artist.clone())
}
