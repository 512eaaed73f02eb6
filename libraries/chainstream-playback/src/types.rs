//! Core types for the playback session

use chainstream_core::Track;
use serde::{Deserialize, Serialize};

/// Snapshot of the observable playback state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// Absent before the first track is chosen
    pub current_track: Option<Track>,

    pub is_playing: bool,

    /// Volume level (0-100)
    pub volume: u8,

    pub is_muted: bool,

    pub shuffle: bool,

    pub repeat: bool,
}

/// Configuration for a playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 50)
    pub history_size: usize,

    /// Volume used when nothing is persisted (0-100, default: 50)
    pub volume: u8,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial repeat flag (default: off)
    pub repeat: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            volume: 50,
            shuffle: false,
            repeat: false,
        }
    }
}
