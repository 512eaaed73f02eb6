//! ChainStream Server Library
//!
//! REST backend over an in-memory catalog: users, artists, tracks,
//! playlists, search and simulated artist payments.
//!
//! This library exposes the router and its parts for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
