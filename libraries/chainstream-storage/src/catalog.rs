use chainstream_core::types::{
    Artist, ArtistId, Playlist, PlaylistId, PlaylistTrack, Track, TrackId, Transaction,
    TransactionId, User, UserId,
};
use std::collections::BTreeMap;

/// Everything the store holds
///
/// Maps are keyed by id, and ids are handed out in ascending order, so map
/// iteration order is creation order.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) artists: BTreeMap<ArtistId, Artist>,
    pub(crate) tracks: BTreeMap<TrackId, Track>,
    pub(crate) playlists: BTreeMap<PlaylistId, Playlist>,
    pub(crate) playlist_tracks: Vec<PlaylistTrack>,
    pub(crate) transactions: BTreeMap<TransactionId, Transaction>,

    next_user_id: UserId,
    next_artist_id: ArtistId,
    next_track_id: TrackId,
    next_playlist_id: PlaylistId,
    next_transaction_id: TransactionId,
}

impl Catalog {
    /// Empty catalog with every id sequence starting at 1
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            artists: BTreeMap::new(),
            tracks: BTreeMap::new(),
            playlists: BTreeMap::new(),
            playlist_tracks: Vec::new(),
            transactions: BTreeMap::new(),
            next_user_id: 1,
            next_artist_id: 1,
            next_track_id: 1,
            next_playlist_id: 1,
            next_transaction_id: 1,
        }
    }

    pub(crate) fn allocate_user_id(&mut self) -> UserId {
        let id = self.next_user_id;
        self.next_user_id += 1;
        id
    }

    pub(crate) fn allocate_artist_id(&mut self) -> ArtistId {
        let id = self.next_artist_id;
        self.next_artist_id += 1;
        id
    }

    pub(crate) fn allocate_track_id(&mut self) -> TrackId {
        let id = self.next_track_id;
        self.next_track_id += 1;
        id
    }

    pub(crate) fn allocate_playlist_id(&mut self) -> PlaylistId {
        let id = self.next_playlist_id;
        self.next_playlist_id += 1;
        id
    }

    pub(crate) fn allocate_transaction_id(&mut self) -> TransactionId {
        let id = self.next_transaction_id;
        self.next_transaction_id += 1;
        id
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
