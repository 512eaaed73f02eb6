//! Error types for the audio sink and settings collaborators

use thiserror::Error;

/// Playback errors
///
/// These come from collaborators. The session never returns them from its
/// own operations; it records them as the current playback error instead.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The platform refused to start audio without a user gesture
    #[error("Playback blocked: {0}")]
    Blocked(String),

    /// The audio resource could not be loaded or decoded
    #[error("Unable to load {url}: {message}")]
    Load { url: String, message: String },

    /// Audio sink error
    #[error("Audio sink error: {0}")]
    Sink(String),

    /// Settings storage error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Result type for playback collaborators
pub type Result<T> = std::result::Result<T, PlaybackError>;
