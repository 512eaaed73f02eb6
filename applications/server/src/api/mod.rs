/// API route modules
pub mod artists;
pub mod health;
pub mod library;
pub mod playlists;
pub mod search;
pub mod tracks;
pub mod transactions;
pub mod users;
