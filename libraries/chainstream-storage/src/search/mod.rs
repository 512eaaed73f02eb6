use crate::Catalog;
use chainstream_core::{error::Result, types::*};

/// Case-insensitive substring search across artists, tracks and playlists
///
/// A blank query matches everything.
pub fn query(catalog: &Catalog, query: &str) -> Result<SearchResults> {
    let needle = query.trim().to_lowercase();

    Ok(SearchResults {
        artists: catalog
            .artists
            .values()
            .filter(|artist| artist.matches(&needle))
            .cloned()
            .collect(),
        tracks: catalog
            .tracks
            .values()
            .filter(|track| track.matches(&needle))
            .cloned()
            .collect(),
        playlists: catalog
            .playlists
            .values()
            .filter(|playlist| playlist.matches(&needle))
            .cloned()
            .collect(),
    })
}
