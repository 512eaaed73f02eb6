//! Playback session - core orchestration
//!
//! Owns the playback state, the queue and the history, applies sequencer
//! decisions and drives the audio sink. Operations never fail: collaborator
//! errors become the session's `playback_error` plus an `Error` event.

use crate::{
    error::PlaybackError,
    events::PlaybackEvent,
    history::History,
    queue::Queue,
    sequencer::{decide_next, NextStep},
    settings::{SettingsStore, SETTING_VOLUME},
    sink::AudioSink,
    types::{PlaybackConfig, PlaybackState},
    volume::Volume,
};
use chainstream_core::{Track, TrackId};
use rand::{rngs::StdRng, SeedableRng};

/// Client-side playback session
///
/// Single owner, mutated synchronously. The UI layer calls operations and
/// then drains the pending events.
pub struct PlaybackSession {
    current_track: Option<Track>,
    is_playing: bool,
    volume: Volume,
    shuffle: bool,
    repeat: bool,

    queue: Queue,
    history: History,

    // Fallback for next_track, ordered by id
    collection: Vec<Track>,

    rng: StdRng,
    sink: Option<Box<dyn AudioSink>>,
    settings: Option<Box<dyn SettingsStore>>,

    playback_error: Option<String>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackSession {
    /// Create a session without persisted settings
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            current_track: None,
            is_playing: false,
            volume: Volume::new(config.volume),
            shuffle: config.shuffle,
            repeat: config.repeat,
            queue: Queue::new(),
            history: History::new(config.history_size),
            collection: Vec::new(),
            rng: StdRng::from_entropy(),
            sink: None,
            settings: None,
            playback_error: None,
            pending_events: Vec::new(),
        }
    }

    /// Create a session whose volume is read from `settings`
    ///
    /// Missing or unreadable values fall back to `config.volume`; stored
    /// values above 100 are clamped.
    pub fn restore(config: PlaybackConfig, settings: Box<dyn SettingsStore>) -> Self {
        let stored = match settings.get(SETTING_VOLUME) {
            Ok(value) => value.and_then(|v| parse_volume(&v)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted volume");
                None
            }
        };

        let mut session = Self::new(config);
        if let Some(level) = stored {
            session.volume.set_level(level);
        }
        session.settings = Some(settings);
        session
    }

    /// Replace the random source used for shuffle
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Attach the audio sink and push the current volume to it
    #[must_use]
    pub fn with_sink(mut self, mut sink: Box<dyn AudioSink>) -> Self {
        sink.set_volume(self.volume.gain());
        self.sink = Some(sink);
        self
    }

    // ===== Collection =====

    /// Replace the full track collection used for shuffle and sequential advance
    pub fn set_collection(&mut self, mut tracks: Vec<Track>) {
        tracks.sort_by_key(|track| track.id);
        self.collection = tracks;
    }

    pub fn collection(&self) -> &[Track] {
        &self.collection
    }

    // ===== Transport =====

    /// Make `track` current and start playing it
    ///
    /// The previously current track, if any, goes to history.
    pub fn set_current_track(&mut self, track: Track) {
        let previous_track_id = self.current_track.as_ref().map(|t| t.id);
        if let Some(previous) = self.current_track.take() {
            self.history.push(previous);
        }
        self.make_current(track, previous_track_id);
    }

    /// Flip the playing flag
    pub fn toggle_play_pause(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn play(&mut self) {
        if self.is_playing {
            return;
        }
        self.set_playing(true);

        if self.current_track.is_some() {
            let result = match self.sink.as_mut() {
                Some(sink) => sink.play(),
                None => Ok(()),
            };
            if let Err(e) = result {
                self.fail(&e);
            }
        }
    }

    pub fn pause(&mut self) {
        if !self.is_playing {
            return;
        }
        self.set_playing(false);
        if let Some(sink) = self.sink.as_mut() {
            sink.pause();
        }
    }

    /// Retry playback after an error
    ///
    /// Clears the error when the sink accepts; otherwise the error is
    /// replaced with the new failure.
    pub fn force_play(&mut self) {
        if self.current_track.is_none() {
            return;
        }

        let result = match self.sink.as_mut() {
            Some(sink) => sink.play(),
            None => Ok(()),
        };

        match result {
            Ok(()) => {
                self.clear_error();
                self.set_playing(true);
            }
            Err(e) => self.fail(&e),
        }
    }

    /// Advance according to the sequencer
    pub fn next_track(&mut self) {
        let step = decide_next(
            self.queue.len(),
            self.shuffle,
            self.repeat,
            self.current_track.as_ref().map(|track| track.id),
            &self.collection,
            &mut self.rng,
        );
        tracing::debug!(?step, "Next track decided");

        match step {
            NextStep::FromQueue => {
                if let Some(track) = self.queue.pop_front() {
                    self.emit_queue_changed();
                    self.set_current_track(track);
                }
            }
            NextStep::Shuffle(index) | NextStep::Advance(index) => {
                if let Some(track) = self.collection.get(index).cloned() {
                    self.set_current_track(track);
                }
            }
            NextStep::Repeat => self.restart_current(),
            NextStep::Stop => self.pause(),
            NextStep::Stay => {}
        }
    }

    /// Go back to the most recent history entry
    ///
    /// The displaced current track is pushed to the front of the queue so it
    /// plays again on the next `next_track`. No history: nothing happens.
    pub fn previous_track(&mut self) {
        let Some(previous) = self.history.pop() else {
            return;
        };

        let displaced_id = self.current_track.as_ref().map(|t| t.id);
        if let Some(displaced) = self.current_track.take() {
            self.queue.push_front(displaced);
            self.emit_queue_changed();
        }
        self.make_current(previous, displaced_id);
    }

    // ===== Volume =====

    /// Set volume, clamped to 100, and persist it
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        let level = self.volume.level();

        if let Some(sink) = self.sink.as_mut() {
            sink.set_volume(self.volume.gain());
        }

        if let Some(settings) = self.settings.as_mut() {
            if let Err(e) = settings.set(SETTING_VOLUME, &level.to_string()) {
                tracing::warn!(error = %e, level, "Failed to persist volume");
            }
        }

        self.emit_volume_changed();
    }

    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    pub fn mute(&mut self) {
        if !self.volume.is_muted() {
            self.volume.mute();
            self.push_gain();
            self.emit_volume_changed();
        }
    }

    pub fn unmute(&mut self) {
        if self.volume.is_muted() {
            self.volume.unmute();
            self.push_gain();
            self.emit_volume_changed();
        }
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== Modes =====

    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        self.pending_events.push(PlaybackEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
        self.pending_events.push(PlaybackEvent::RepeatChanged {
            enabled: self.repeat,
        });
    }

    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat
    }

    // ===== Queue =====

    pub fn add_to_queue(&mut self, track: Track) {
        self.queue.push_back(track);
        self.emit_queue_changed();
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit_queue_changed();
    }

    pub fn get_queue(&self) -> Vec<&Track> {
        self.queue.get_all()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    // ===== State Queries =====

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Message of the last collaborator failure, until cleared
    pub fn playback_error(&self) -> Option<&str> {
        self.playback_error.as_deref()
    }

    /// Previously current tracks, oldest first
    pub fn get_history(&self) -> Vec<&Track> {
        self.history.get_all()
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_track: self.current_track.clone(),
            is_playing: self.is_playing,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            shuffle: self.shuffle,
            repeat: self.repeat,
        }
    }

    // ===== Events =====

    /// Take all events published since the last drain
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Install `track` as current without touching history
    fn make_current(&mut self, track: Track, previous_track_id: Option<TrackId>) {
        let track_id = track.id;
        let url = track.audio_url.clone();

        self.current_track = Some(track);
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
        self.clear_error();
        self.set_playing(true);

        let result = match self.sink.as_mut() {
            Some(sink) => sink.load(&url).and_then(|()| sink.play()),
            None => Ok(()),
        };
        if let Err(e) = result {
            self.fail(&e);
        }
    }

    fn restart_current(&mut self) {
        let Some(track_id) = self.current_track.as_ref().map(|t| t.id) else {
            return;
        };

        self.pending_events
            .push(PlaybackEvent::TrackRestarted { track_id });
        self.set_playing(true);

        let result = match self.sink.as_mut() {
            Some(sink) => sink.restart(),
            None => Ok(()),
        };
        if let Err(e) = result {
            self.fail(&e);
        }
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.is_playing != is_playing {
            self.is_playing = is_playing;
            self.pending_events
                .push(PlaybackEvent::StateChanged { is_playing });
        }
    }

    /// Record a sink failure: playing stops, the message is kept for the UI
    fn fail(&mut self, error: &PlaybackError) {
        tracing::warn!(error = %error, "Playback failed");

        let message = error.to_string();
        self.set_playing(false);
        self.playback_error = Some(message.clone());
        self.pending_events.push(PlaybackEvent::Error { message });
    }

    fn clear_error(&mut self) {
        if self.playback_error.take().is_some() {
            self.pending_events.push(PlaybackEvent::ErrorCleared);
        }
    }

    fn push_gain(&mut self) {
        let gain = self.volume.gain();
        if let Some(sink) = self.sink.as_mut() {
            sink.set_volume(gain);
        }
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

/// Parse a persisted volume, clamping to 100
fn parse_volume(value: &str) -> Option<u8> {
    let level: i64 = value.trim().parse().ok()?;
    u8::try_from(level.clamp(0, 100)).ok()
}
