//! Storage trait for the ChainStream catalog

use crate::error::Result;
use crate::types::{
    Artist, ArtistId, CreateArtist, CreatePlaylist, CreateTrack, CreateUser, NewPayment,
    Playlist, PlaylistId, PlaylistTrack, SearchResults, Track, TrackId, Transaction, User,
    UserId,
};
use async_trait::async_trait;

/// Storage context providing access to the catalog
///
/// This trait abstracts storage operations so the volatile in-memory store
/// can be swapped for a persistent one without touching the HTTP or payment
/// code.
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Get user by exact username
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Create a new user; usernames and emails are unique
    async fn create_user(&self, user: CreateUser) -> Result<User>;

    // ========================================================================
    // Artists
    // ========================================================================

    /// Get all artists in creation order
    async fn get_artists(&self) -> Result<Vec<Artist>>;

    /// The first artists in creation order, for the home page
    async fn get_featured_artists(&self) -> Result<Vec<Artist>>;

    /// Get artist by ID
    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>>;

    /// Create a new artist
    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist>;

    // ========================================================================
    // Tracks
    // ========================================================================

    /// Get all tracks ordered by id
    async fn get_all_tracks(&self) -> Result<Vec<Track>>;

    /// Get track by ID
    async fn get_track(&self, id: TrackId) -> Result<Option<Track>>;

    /// Get tracks by artist
    async fn get_tracks_by_artist(&self, artist_id: ArtistId) -> Result<Vec<Track>>;

    /// Create a new track
    async fn create_track(&self, track: CreateTrack) -> Result<Track>;

    /// Most recently created tracks first
    async fn get_recent_tracks(&self) -> Result<Vec<Track>>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Get all playlists
    async fn get_playlists(&self) -> Result<Vec<Playlist>>;

    /// The first playlists in creation order, offered as recommendations
    async fn get_recommended_playlists(&self) -> Result<Vec<Playlist>>;

    /// Get playlist by ID
    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>>;

    /// Playlists whose creator is the given artist
    async fn get_playlists_by_artist(&self, artist_id: ArtistId) -> Result<Vec<Playlist>>;

    /// Playlists saved by a user
    async fn get_user_playlists(&self, user_id: UserId) -> Result<Vec<Playlist>>;

    /// Create a new playlist
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist>;

    /// Tracks of a playlist ordered by position
    async fn get_playlist_tracks(&self, playlist_id: PlaylistId) -> Result<Vec<Track>>;

    /// Add a track to a playlist and bump its track count
    async fn add_track_to_playlist(&self, entry: PlaylistTrack) -> Result<PlaylistTrack>;

    // ========================================================================
    // Transactions
    // ========================================================================

    /// All recorded transactions in creation order
    async fn get_transactions(&self) -> Result<Vec<Transaction>>;

    /// Transactions made by one user
    async fn get_user_transactions(&self, user_id: UserId) -> Result<Vec<Transaction>>;

    /// Record a payment
    ///
    /// Appends the transaction and credits the artist as one step: either
    /// both happen or neither does. Fails with `ArtistNotFound` when the
    /// target does not exist.
    async fn record_payment(&self, payment: NewPayment) -> Result<Transaction>;

    // ========================================================================
    // Search
    // ========================================================================

    /// Case-insensitive substring search; a blank query returns everything
    async fn search(&self, query: &str) -> Result<SearchResults>;
}
