//! Platform-agnostic audio sink trait
//!
//! Rendering is somebody else's job: a browser audio element, a desktop
//! output stream or a test double. The session only tells the sink what to
//! play and reacts to its failures.

use crate::error::Result;

/// Audio output controlled by a `PlaybackSession`
pub trait AudioSink: Send {
    /// Point the sink at a new resource, replacing whatever was loaded
    fn load(&mut self, url: &str) -> Result<()>;

    /// Start or resume output
    ///
    /// May fail when the platform blocks autoplay.
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    /// Rewind the loaded resource to the beginning and play it
    fn restart(&mut self) -> Result<()>;

    /// Output gain in 0.0-1.0
    fn set_volume(&mut self, gain: f32);
}
