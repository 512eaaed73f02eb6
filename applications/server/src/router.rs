/// Route table
use crate::{api, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router, everything under `/api`
pub fn create_router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(api::health::health))
        // Users
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        // Artists
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/featured", get(api::artists::featured_artists))
        .route("/artists/:id", get(api::artists::get_artist))
        .route("/artists/:id/tracks", get(api::artists::artist_tracks))
        .route("/artists/:id/playlists", get(api::artists::artist_playlists))
        .route("/artists/:id/pay", post(api::artists::pay_artist))
        // Tracks
        .route(
            "/tracks",
            get(api::tracks::list_tracks).post(api::tracks::upload_track),
        )
        .route("/tracks/recent", get(api::tracks::recent_tracks))
        .route("/tracks/:id", get(api::tracks::get_track))
        // Playlists
        .route("/playlists", get(api::playlists::list_playlists))
        .route(
            "/playlists/recommended",
            get(api::playlists::recommended_playlists),
        )
        .route("/playlists/:id", get(api::playlists::get_playlist))
        .route("/playlists/:id/tracks", get(api::playlists::playlist_tracks))
        // Library
        .route("/library/playlists", get(api::library::library_playlists))
        .route("/library/artists", get(api::library::library_artists))
        // Transactions
        .route("/transactions", get(api::transactions::list_transactions))
        // Search
        .route("/search", get(api::search::search));

    Router::new()
        .nest("/api", routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
