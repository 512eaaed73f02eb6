//! ChainStream Storage
//!
//! Volatile in-memory catalog for the ChainStream backend.
//!
//! # Architecture
//!
//! - **Single Lock**: the whole catalog sits behind one `tokio::sync::RwLock`,
//!   so a payment's transaction append and artist credit happen under the
//!   same write guard
//! - **Vertical Slicing**: each entity owns its own operations over the
//!   catalog (`users`, `artists`, `tracks`, `playlists`, `transactions`, `search`)
//! - **Sample Data**: `MemoryStore::seeded()` loads the demo catalog
//!
//! # Example
//!
//! ```rust
//! use chainstream_storage::MemoryStore;
//! use chainstream_core::storage::StorageContext;
//!
//! # async fn example() -> chainstream_core::Result<()> {
//! let store = MemoryStore::seeded()?;
//! let tracks = store.get_all_tracks().await?;
//! assert_eq!(tracks.len(), 9);
//! # Ok(())
//! # }
//! ```

mod catalog;
mod context;
pub mod seed;

// Vertical slices
pub mod artists;
pub mod playlists;
pub mod search;
pub mod tracks;
pub mod transactions;
pub mod users;

pub use catalog::Catalog;
pub use context::MemoryStore;
