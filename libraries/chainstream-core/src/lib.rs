//! ChainStream Core
//!
//! Domain records, boundary validation and the storage abstraction shared by
//! the ChainStream backend, the playback session and the payment client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Artist`, `Playlist`, `Transaction`, `User`
//! - **Storage Trait**: `StorageContext`, the repository every backend store implements
//! - **Validation**: amount, wallet address and track-upload checks
//! - **Error Handling**: Unified `ChainError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chainstream_core::validation::{validate_amount, validate_wallet_address};
//!
//! assert!(validate_amount(0.01).is_ok());
//! assert!(validate_amount(0.0).is_err());
//! assert!(validate_wallet_address("0x1234567890123456789012345678901234567890").is_ok());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{ChainError, Result};
pub use storage::StorageContext;

pub use types::{
    Artist, ArtistId, CreateArtist, CreatePlaylist, CreateTrack, CreateUser, NewPayment,
    Playlist, PlaylistId, PlaylistTrack, SearchResults, Track, TrackId, Transaction,
    TransactionId, User, UserId,
};
