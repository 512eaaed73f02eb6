//! Shared fixtures for playback integration tests

#![allow(dead_code)]

use chainstream_core::{Track, TrackId};
use chainstream_playback::{AudioSink, PlaybackError, Result};
use std::sync::{Arc, Mutex};

pub fn track(id: TrackId) -> Track {
    Track {
        id,
        title: format!("Track {id}"),
        artist: "The Blockchain Beats".to_string(),
        artist_id: 1,
        album: "Digital Assets".to_string(),
        duration: "3:45".to_string(),
        album_cover: String::new(),
        audio_url: format!("https://cdn.example/{id}.mp3"),
        earnings: 0.0,
        play_count: 0,
    }
}

pub fn tracks(ids: &[TrackId]) -> Vec<Track> {
    ids.iter().copied().map(track).collect()
}

/// Calls seen by a `RecordingSink`
#[derive(Debug, Default)]
pub struct SinkLog {
    pub calls: Vec<String>,
    /// While true, `play` and `restart` fail as if autoplay were blocked
    pub blocked: bool,
}

/// Audio sink that records every call
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub log: Arc<Mutex<SinkLog>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.log.lock().unwrap().calls.clone()
    }

    pub fn set_blocked(&self, blocked: bool) {
        self.log.lock().unwrap().blocked = blocked;
    }

    fn record(&self, call: String) -> Result<()> {
        let mut log = self.log.lock().unwrap();
        log.calls.push(call);
        Ok(())
    }

    fn record_playback(&self, call: &str) -> Result<()> {
        let mut log = self.log.lock().unwrap();
        log.calls.push(call.to_string());
        if log.blocked {
            Err(PlaybackError::Blocked("user gesture required".to_string()))
        } else {
            Ok(())
        }
    }
}

impl AudioSink for RecordingSink {
    fn load(&mut self, url: &str) -> Result<()> {
        self.record(format!("load {url}"))
    }

    fn play(&mut self) -> Result<()> {
        self.record_playback("play")
    }

    fn pause(&mut self) {
        let _ = self.record("pause".to_string());
    }

    fn restart(&mut self) -> Result<()> {
        self.record_playback("restart")
    }

    fn set_volume(&mut self, gain: f32) {
        let _ = self.record(format!("volume {gain:.2}"));
    }
}
