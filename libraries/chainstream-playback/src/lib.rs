//! ChainStream - Playback Session
//!
//! Platform-agnostic playback state machine for the ChainStream client.
//!
//! This crate provides:
//! - Transport control (play, pause, next, previous, force play)
//! - A play-next queue with strict priority over everything else
//! - Playback history (bounded, default 50) for "previous"
//! - Shuffle and repeat flags
//! - Volume (0-100, clamped, mute/unmute) persisted through a settings store
//! - An event buffer the UI layer drains after each interaction
//!
//! # Architecture
//!
//! `chainstream-playback` never touches audio or storage directly:
//! - Rendering goes through the `AudioSink` trait
//! - Persistence goes through the `SettingsStore` trait
//! - The next-track rule is a pure function (`sequencer::decide_next`)
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use chainstream_core::Track;
//! use chainstream_playback::{PlaybackConfig, PlaybackSession};
//!
//! fn track(id: i64, title: &str) -> Track {
//!     Track {
//!         id,
//!         title: title.to_string(),
//!         artist: "Crypto Keys".to_string(),
//!         artist_id: 2,
//!         album: "Decentralized".to_string(),
//!         duration: "4:20".to_string(),
//!         album_cover: String::new(),
//!         audio_url: format!("https://cdn.example/{id}.mp3"),
//!         earnings: 0.0,
//!         play_count: 0,
//!     }
//! }
//!
//! let mut session = PlaybackSession::new(PlaybackConfig::default());
//! session.set_collection(vec![track(1, "Smart Contract"), track(2, "Gas Fees")]);
//!
//! session.set_current_track(track(1, "Smart Contract"));
//! session.next_track();
//! assert_eq!(session.current_track().map(|t| t.id), Some(2));
//!
//! session.previous_track();
//! assert_eq!(session.current_track().map(|t| t.id), Some(1));
//!
//! for event in session.drain_events() {
//!     println!("{event:?}");
//! }
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! use chainstream_playback::PlaybackSession;
//!
//! let mut session = PlaybackSession::default();
//! session.toggle_shuffle();
//! session.toggle_repeat();
//! assert!(session.is_shuffle() && session.is_repeat());
//! ```

mod error;
pub mod events;
mod history;
mod queue;
pub mod sequencer;
mod session;
pub mod settings;
pub mod sink;
pub mod types;
mod volume;

#[cfg(test)]
mod test_support;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use sequencer::NextStep;
pub use session::PlaybackSession;
pub use settings::{MemorySettings, SettingsStore, SETTING_VOLUME};
pub use sink::AudioSink;
pub use types::{PlaybackConfig, PlaybackState};
