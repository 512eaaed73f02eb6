//! Integration tests for the in-memory store
//!
//! Covers the repository operations the backend routes rely on:
//! - Catalog reads and ordering
//! - Track and playlist creation
//! - Payment recording and its effect on artist counters
//! - Search

use chainstream_core::{storage::StorageContext, types::*, ChainError};
use chainstream_storage::MemoryStore;
use std::sync::Arc;

const PAYER: &str = "0x7890123456789012345678901234567890123456";

fn store() -> MemoryStore {
    MemoryStore::seeded().expect("sample catalog should load")
}

fn payment(artist_id: ArtistId, amount: f64) -> NewPayment {
    NewPayment::validated(artist_id, amount, PAYER, Some(1), "0xfeed").unwrap()
}

fn upload(title: &str) -> CreateTrack {
    CreateTrack {
        title: title.to_string(),
        artist: "Crypto Keys".to_string(),
        artist_id: 2,
        album: "Decentralized".to_string(),
        duration: "3:00".to_string(),
        album_cover: "https://img.example/cover.jpg".to_string(),
        audio_url: "https://cdn.example/track.mp3".to_string(),
        earnings: 0.0,
        play_count: 0,
    }
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn test_featured_and_recommended_limits() {
    let store = store();

    assert_eq!(store.get_featured_artists().await.unwrap().len(), 6);

    let recommended = store.get_recommended_playlists().await.unwrap();
    assert_eq!(recommended.len(), 5);
    assert_eq!(recommended[0].name, "Daily Mix 1");
    assert_eq!(recommended[4].name, "Release Radar");
}

#[tokio::test]
async fn test_recent_tracks_newest_first() {
    let store = store();
    let created = store.create_track(upload("Fresh Block")).await.unwrap();

    let recent = store.get_recent_tracks().await.unwrap();
    assert_eq!(recent[0].id, created.id);
    assert!(recent.windows(2).all(|pair| pair[0].id > pair[1].id));
}

#[tokio::test]
async fn test_tracks_by_artist() {
    let store = store();

    let tracks = store.get_tracks_by_artist(1).await.unwrap();
    assert_eq!(tracks.len(), 5);
    assert!(tracks.iter().all(|t| t.artist == "The Blockchain Beats"));

    assert!(store.get_tracks_by_artist(99).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_playlists_by_artist_match_creator_name() {
    let store = store();

    let playlists = store.get_playlists_by_artist(1).await.unwrap();
    let names: Vec<&str> = playlists.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Digital Assets", "Decentralized Remix", "Live on the Chain"]);

    assert!(store.get_playlists_by_artist(99).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_playlists() {
    let store = store();

    let library = store.get_user_playlists(1).await.unwrap();
    assert_eq!(library.len(), 3);
    assert!(library.iter().all(|p| p.creator == "You"));

    assert!(store.get_user_playlists(2).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_playlist_tracks_in_position_order() {
    let store = store();

    let tracks = store.get_playlist_tracks(1).await.unwrap();
    let ids: Vec<TrackId> = tracks.iter().map(|t| t.id).collect();
    assert_eq!(ids, (1..=9).collect::<Vec<_>>());

    assert!(store.get_playlist_tracks(2).await.unwrap().is_empty());
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn test_create_track_assigns_next_id() {
    let store = store();

    let track = store.create_track(upload("Gas Fees")).await.unwrap();
    assert_eq!(track.id, 10);

    let fetched = store.get_track(10).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Gas Fees");
}

#[tokio::test]
async fn test_create_track_requires_fields() {
    let store = store();

    let mut track = upload("");
    track.duration = String::new();

    let err = store.create_track(track).await.unwrap_err();
    assert!(matches!(err, ChainError::InvalidInput(_)));
    assert_eq!(store.get_all_tracks().await.unwrap().len(), 9);
}

#[tokio::test]
async fn test_add_track_to_playlist_bumps_count() {
    let store = store();
    let before = store.get_playlist(2).await.unwrap().unwrap().track_count;

    store
        .add_track_to_playlist(PlaylistTrack {
            playlist_id: 2,
            track_id: 3,
            position: 1,
        })
        .await
        .unwrap();

    let after = store.get_playlist(2).await.unwrap().unwrap().track_count;
    assert_eq!(after, before + 1);
    assert_eq!(store.get_playlist_tracks(2).await.unwrap()[0].id, 3);
}

#[tokio::test]
async fn test_add_track_to_missing_playlist() {
    let store = store();

    let err = store
        .add_track_to_playlist(PlaylistTrack {
            playlist_id: 404,
            track_id: 1,
            position: 1,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ChainError::PlaylistNotFound(404)));
}

// ============================================================================
// Payments
// ============================================================================

#[tokio::test]
async fn test_record_payment_credits_artist() {
    let store = store();
    let before = store.get_artist(2).await.unwrap().unwrap();
    let tx_count = store.get_transactions().await.unwrap().len();

    let tx = store.record_payment(payment(2, 0.01)).await.unwrap();

    let after = store.get_artist(2).await.unwrap().unwrap();
    assert!((after.earnings - (before.earnings + 0.01)).abs() < 1e-9);
    assert_eq!(after.supporters, before.supporters + 1);

    assert_eq!(tx.status, STATUS_COMPLETED);
    assert_eq!(tx.artist, "Crypto Keys");
    assert_eq!(tx.from_address, PAYER);
    assert_eq!(store.get_transactions().await.unwrap().len(), tx_count + 1);
}

#[tokio::test]
async fn test_record_payment_unknown_artist_changes_nothing() {
    let store = store();
    let tx_count = store.get_transactions().await.unwrap().len();

    let err = store.record_payment(payment(99, 0.01)).await.unwrap_err();

    assert!(matches!(err, ChainError::ArtistNotFound(99)));
    assert_eq!(store.get_transactions().await.unwrap().len(), tx_count);
}

#[tokio::test]
async fn test_concurrent_payments_are_not_lost() {
    let store = Arc::new(store());
    let before = store.get_artist(3).await.unwrap().unwrap();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..20 {
        let store = Arc::clone(&store);
        tasks.spawn(async move { store.record_payment(payment(3, 0.5)).await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    let after = store.get_artist(3).await.unwrap().unwrap();
    assert_eq!(after.supporters, before.supporters + 20);
    assert!((after.earnings - (before.earnings + 10.0)).abs() < 1e-9);

    let ids: Vec<TransactionId> = store
        .get_transactions()
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, (1..=23).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_user_transactions() {
    let store = store();
    store
        .record_payment(NewPayment::validated(4, 0.2, PAYER, Some(7), "0xbeef").unwrap())
        .await
        .unwrap();

    assert_eq!(store.get_user_transactions(1).await.unwrap().len(), 3);
    assert_eq!(store.get_user_transactions(7).await.unwrap().len(), 1);
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let store = store();

    let results = store.search("JAZZ").await.unwrap();
    assert_eq!(results.artists.len(), 1);
    assert_eq!(results.artists[0].name, "Crypto Keys");
    assert!(results.tracks.is_empty());
}

#[tokio::test]
async fn test_search_spans_all_entities() {
    let store = store();

    let results = store.search("digital").await.unwrap();
    assert!(results.artists.is_empty());
    assert_eq!(results.tracks.len(), 6);
    assert_eq!(results.playlists.len(), 1);
}

#[tokio::test]
async fn test_blank_search_returns_everything() {
    let store = store();

    let results = store.search("").await.unwrap();
    assert_eq!(results.artists.len(), 6);
    assert_eq!(results.tracks.len(), 9);
    assert_eq!(results.playlists.len(), 11);
}

#[tokio::test]
async fn test_search_without_matches() {
    let results = store().search("polka").await.unwrap();
    assert!(results.is_empty());
}

// ============================================================================
// Users
// ============================================================================

fn signup(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password: "correct horse".to_string(),
        email: email.to_string(),
        wallet_address: Some(PAYER.to_string()),
    }
}

#[tokio::test]
async fn test_create_and_get_user() {
    let store = MemoryStore::new();

    let user = store
        .create_user(signup("listener", "listener@example.org"))
        .await
        .unwrap();
    assert_eq!(user.id, 1);

    let fetched = store.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(fetched, user);

    let by_name = store.get_user_by_username("listener").await.unwrap();
    assert_eq!(by_name.map(|u| u.id), Some(1));
    assert!(store.get_user(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_usernames_and_emails_are_unique() {
    let store = MemoryStore::new();
    store
        .create_user(signup("listener", "listener@example.org"))
        .await
        .unwrap();

    let same_name = store
        .create_user(signup("listener", "other@example.org"))
        .await
        .unwrap_err();
    assert!(matches!(same_name, ChainError::InvalidInput(_)));

    let same_email = store
        .create_user(signup("other", "listener@example.org"))
        .await
        .unwrap_err();
    assert!(matches!(same_email, ChainError::InvalidInput(_)));

    // Rejected users do not consume ids
    let next = store
        .create_user(signup("other", "other@example.org"))
        .await
        .unwrap();
    assert_eq!(next.id, 2);
}

#[tokio::test]
async fn test_invalid_user_is_rejected() {
    let store = MemoryStore::new();
    let mut input = signup("listener", "listener@example.org");
    input.wallet_address = Some("not-a-wallet".to_string());

    let err = store.create_user(input).await.unwrap_err();
    assert!(matches!(err, ChainError::InvalidAddress(_)));
}
