/// Core error types for ChainStream
use crate::types::{ArtistId, PlaylistId, TrackId, UserId};
use thiserror::Error;

/// Result type alias using `ChainError`
pub type Result<T> = std::result::Result<T, ChainError>;

/// Core error type for ChainStream
#[derive(Error, Debug)]
pub enum ChainError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Artist not found
    #[error("Artist not found: {0}")]
    ArtistNotFound(ArtistId),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Payment amount is zero, negative or not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// Wallet address is not `0x` followed by 40 hex characters
    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl ChainError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error means a referenced entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TrackNotFound(_)
                | Self::ArtistNotFound(_)
                | Self::PlaylistNotFound(_)
                | Self::UserNotFound(_)
        )
    }
}
