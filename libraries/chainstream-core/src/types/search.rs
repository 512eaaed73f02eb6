use crate::types::{Artist, Playlist, Track};
use serde::{Deserialize, Serialize};

/// Result of a catalog-wide search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub artists: Vec<Artist>,
    pub tracks: Vec<Track>,
    pub playlists: Vec<Playlist>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty() && self.tracks.is_empty() && self.playlists.is_empty()
    }
}
