use crate::{artists, playlists, search, seed, tracks, transactions, users, Catalog};
use async_trait::async_trait;
use chainstream_core::{error::Result, storage::StorageContext, types::*};
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory storage context
///
/// Contents live only as long as the process.
pub struct MemoryStore {
    catalog: RwLock<Catalog>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::from_catalog(Catalog::new())
    }

    /// Store pre-filled with the demo catalog
    pub fn seeded() -> Result<Self> {
        Ok(Self::from_catalog(seed::sample_catalog()?))
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageContext for MemoryStore {
    // Users
    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&*self.catalog.read().await, id)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        users::get_by_username(&*self.catalog.read().await, username)
    }

    async fn create_user(&self, user: CreateUser) -> Result<User> {
        let user = users::create(&mut *self.catalog.write().await, user, Utc::now())?;
        tracing::debug!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    // Artists
    async fn get_artists(&self) -> Result<Vec<Artist>> {
        artists::get_all(&*self.catalog.read().await)
    }

    async fn get_featured_artists(&self) -> Result<Vec<Artist>> {
        artists::get_featured(&*self.catalog.read().await)
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>> {
        artists::get_by_id(&*self.catalog.read().await, id)
    }

    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist> {
        let artist = artists::create(&mut *self.catalog.write().await, artist)?;
        tracing::debug!(artist_id = artist.id, name = %artist.name, "Artist created");
        Ok(artist)
    }

    // Tracks
    async fn get_all_tracks(&self) -> Result<Vec<Track>> {
        tracks::get_all(&*self.catalog.read().await)
    }

    async fn get_track(&self, id: TrackId) -> Result<Option<Track>> {
        tracks::get_by_id(&*self.catalog.read().await, id)
    }

    async fn get_tracks_by_artist(&self, artist_id: ArtistId) -> Result<Vec<Track>> {
        tracks::get_by_artist(&*self.catalog.read().await, artist_id)
    }

    async fn create_track(&self, track: CreateTrack) -> Result<Track> {
        let track = tracks::create(&mut *self.catalog.write().await, track)?;
        tracing::debug!(track_id = track.id, title = %track.title, "Track created");
        Ok(track)
    }

    async fn get_recent_tracks(&self) -> Result<Vec<Track>> {
        tracks::get_recent(&*self.catalog.read().await)
    }

    // Playlists
    async fn get_playlists(&self) -> Result<Vec<Playlist>> {
        playlists::get_all(&*self.catalog.read().await)
    }

    async fn get_recommended_playlists(&self) -> Result<Vec<Playlist>> {
        playlists::get_recommended(&*self.catalog.read().await)
    }

    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_by_id(&*self.catalog.read().await, id)
    }

    async fn get_playlists_by_artist(&self, artist_id: ArtistId) -> Result<Vec<Playlist>> {
        playlists::get_by_artist(&*self.catalog.read().await, artist_id)
    }

    async fn get_user_playlists(&self, user_id: UserId) -> Result<Vec<Playlist>> {
        playlists::get_user_playlists(&*self.catalog.read().await, user_id)
    }

    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist> {
        playlists::create(&mut *self.catalog.write().await, playlist)
    }

    async fn get_playlist_tracks(&self, playlist_id: PlaylistId) -> Result<Vec<Track>> {
        playlists::get_tracks(&*self.catalog.read().await, playlist_id)
    }

    async fn add_track_to_playlist(&self, entry: PlaylistTrack) -> Result<PlaylistTrack> {
        playlists::add_track(&mut *self.catalog.write().await, entry)
    }

    // Transactions
    async fn get_transactions(&self) -> Result<Vec<Transaction>> {
        transactions::get_all(&*self.catalog.read().await)
    }

    async fn get_user_transactions(&self, user_id: UserId) -> Result<Vec<Transaction>> {
        transactions::get_by_user(&*self.catalog.read().await, user_id)
    }

    async fn record_payment(&self, payment: NewPayment) -> Result<Transaction> {
        // One write guard covers both the append and the artist credit
        let mut catalog = self.catalog.write().await;
        let transaction = transactions::record(&mut catalog, &payment, Utc::now())?;

        tracing::info!(
            transaction_id = transaction.id,
            artist_id = transaction.artist_id,
            amount = transaction.amount,
            "Payment recorded"
        );

        Ok(transaction)
    }

    // Search
    async fn search(&self, query: &str) -> Result<SearchResults> {
        search::query(&*self.catalog.read().await, query)
    }
}
