/// Track domain type
use crate::types::ArtistId;
use serde::{Deserialize, Serialize};

pub type TrackId = i64;

/// Playable track
///
/// Display metadata is fixed at creation; only the metrics (`earnings`,
/// `play_count`) change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist display name
    pub artist: String,

    /// Owning artist
    pub artist_id: ArtistId,

    /// Album name
    pub album: String,

    /// Display duration, e.g. `3:45`
    pub duration: String,

    /// Cover art URL
    pub album_cover: String,

    /// Playable resource handed to the audio sink
    pub audio_url: String,

    /// Accumulated earnings in ETH
    pub earnings: f64,

    /// Number of plays
    pub play_count: u64,
}

impl Track {
    /// Case-insensitive match against title, artist and album
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.artist.to_lowercase().contains(needle_lower)
            || self.album.to_lowercase().contains(needle_lower)
    }
}

/// Data for creating a new track
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    pub title: String,
    pub artist: String,
    pub artist_id: ArtistId,
    pub album: String,
    pub duration: String,
    pub album_cover: String,
    pub audio_url: String,
    #[serde(default)]
    pub earnings: f64,
    #[serde(default)]
    pub play_count: u64,
}

impl CreateTrack {
    /// Build the stored record once an id has been assigned
    pub fn into_track(self, id: TrackId) -> Track {
        Track {
            id,
            title: self.title,
            artist: self.artist,
            artist_id: self.artist_id,
            album: self.album,
            duration: self.duration,
            album_cover: self.album_cover,
            audio_url: self.audio_url,
            earnings: self.earnings,
            play_count: self.play_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_metrics() {
        let json = serde_json::json!({
            "title": "Smart Contract",
            "artist": "Crypto Keys",
            "artistId": 2,
            "album": "Decentralized",
            "duration": "4:20",
            "albumCover": "https://img.example/cover.jpg",
            "audioUrl": "https://cdn.example/audio.mp3"
        });

        let create: CreateTrack = serde_json::from_value(json).unwrap();
        let track = create.into_track(7);

        assert_eq!(track.id, 7);
        assert_eq!(track.artist_id, 2);
        assert_eq!(track.play_count, 0);
        assert_eq!(track.earnings, 0.0);
    }

    #[test]
    fn matches_album() {
        let track = CreateTrack {
            title: "Mining".to_string(),
            artist: "The Blockchain Beats".to_string(),
            artist_id: 1,
            album: "Digital Assets".to_string(),
            duration: "5:01".to_string(),
            album_cover: String::new(),
            audio_url: String::new(),
            earnings: 0.0,
            play_count: 0,
        }
        .into_track(1);

        assert!(track.matches("digital"));
        assert!(track.matches("beats"));
        assert!(!track.matches("jazz"));
    }
}
