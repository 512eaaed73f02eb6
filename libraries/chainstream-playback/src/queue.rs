//! Play-next queue
//!
//! User-enqueued tracks. They always win over shuffle, repeat and sequential
//! advance, and are consumed from the front.

use chainstream_core::Track;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: VecDeque<Track>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add track to the tail
    pub fn push_back(&mut self, track: Track) {
        self.tracks.push_back(track);
    }

    /// Put a track back at the head, so it plays next
    pub fn push_front(&mut self, track: Track) {
        self.tracks.push_front(track);
    }

    /// Take the next track
    pub fn pop_front(&mut self) -> Option<Track> {
        self.tracks.pop_front()
    }

    pub fn peek(&self) -> Option<&Track> {
        self.tracks.front()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All queued tracks in play order
    pub fn get_all(&self) -> Vec<&Track> {
        self.tracks.iter().collect()
    }
}
