//! Playback Events
//!
//! Every observable change of a `PlaybackSession` is published as an event
//! into its pending buffer. The UI layer drains the buffer after each
//! interaction and re-renders from it.

use chainstream_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PlaybackEvent {
    /// Playing flag changed
    StateChanged { is_playing: bool },

    /// A different track became current
    TrackChanged {
        track_id: TrackId,
        previous_track_id: Option<TrackId>,
    },

    /// The current track was restarted from the beginning (repeat)
    TrackRestarted { track_id: TrackId },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        is_muted: bool,
    },

    /// Queue changed (tracks added, consumed or cleared)
    QueueChanged { length: usize },

    ShuffleChanged { enabled: bool },

    RepeatChanged { enabled: bool },

    /// The audio sink failed; playback stopped until `force_play`
    Error { message: String },

    /// A previously reported error no longer applies
    ErrorCleared,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = PlaybackEvent::TrackChanged {
            track_id: 3,
            previous_track_id: Some(2),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "trackChanged");
        assert_eq!(json["trackId"], 3);
        assert_eq!(json["previousTrackId"], 2);
        assert!(json.get("track_id").is_none());
    }

    #[test]
    fn unit_variant_round_trips() {
        let json = serde_json::to_string(&PlaybackEvent::ErrorCleared).unwrap();
        let back: PlaybackEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlaybackEvent::ErrorCleared);
    }
}
