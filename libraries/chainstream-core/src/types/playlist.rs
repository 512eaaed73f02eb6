/// Playlist domain types
use crate::types::{TrackId, UserId};
use serde::{Deserialize, Serialize};

pub type PlaylistId = i64;

/// Playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    pub description: Option<String>,

    pub cover_url: String,

    /// Display name of whoever put the playlist together
    pub creator: String,

    /// Number of tracks, bumped whenever a track is added
    pub track_count: u32,

    /// Display duration, e.g. `1 hr 12 min`
    pub duration: String,

    /// How many of the featured artists accept wallet payments
    pub blockchain_artists: u32,

    /// Owner, for playlists saved to a user's library
    pub user_id: Option<UserId>,
}

impl Playlist {
    /// Case-insensitive match against name and description
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(needle_lower))
    }
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylist {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub cover_url: String,
    pub creator: String,
    #[serde(default)]
    pub track_count: u32,
    pub duration: String,
    #[serde(default)]
    pub blockchain_artists: u32,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl CreatePlaylist {
    pub fn into_playlist(self, id: PlaylistId) -> Playlist {
        Playlist {
            id,
            name: self.name,
            description: self.description,
            cover_url: self.cover_url,
            creator: self.creator,
            track_count: self.track_count,
            duration: self.duration,
            blockchain_artists: self.blockchain_artists,
            user_id: self.user_id,
        }
    }
}

/// Playlist track association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistTrack {
    pub playlist_id: PlaylistId,

    pub track_id: TrackId,

    /// Position in the playlist (ascending play order)
    pub position: u32,
}
