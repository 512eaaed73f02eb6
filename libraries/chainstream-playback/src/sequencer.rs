//! Next-track decision
//!
//! Pure function of the queue length, the shuffle and repeat flags, the
//! current track and the collection. The session applies the result.
//!
//! Decision order (first match wins):
//! 1. queue non-empty: take its front
//! 2. shuffle: uniformly random member of the collection
//!    (empty collection: nothing happens)
//! 3. repeat with a current track: restart it
//! 4. otherwise: the track after the current one in id order, wrapping
//!    around (current missing from the collection: stop)

use chainstream_core::{Track, TrackId};
use rand::Rng;

/// What `next_track` should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Pop the front of the queue
    FromQueue,

    /// Play `collection[index]`, chosen at random
    Shuffle(usize),

    /// Restart the current track
    Repeat,

    /// Play `collection[index]`, the successor of the current track
    Advance(usize),

    /// Nothing to advance from; stop playing
    Stop,

    /// No transition
    Stay,
}

/// Decide the next step
///
/// `collection` must be ordered by id.
pub fn decide_next<R: Rng + ?Sized>(
    queue_len: usize,
    shuffle: bool,
    repeat: bool,
    current: Option<TrackId>,
    collection: &[Track],
    rng: &mut R,
) -> NextStep {
    if queue_len > 0 {
        return NextStep::FromQueue;
    }

    if shuffle {
        if collection.is_empty() {
            return NextStep::Stay;
        }
        return NextStep::Shuffle(rng.gen_range(0..collection.len()));
    }

    if repeat && current.is_some() {
        return NextStep::Repeat;
    }

    current
        .and_then(|id| collection.iter().position(|track| track.id == id))
        .map_or(NextStep::Stop, |index| {
            NextStep::Advance((index + 1) % collection.len())
        })
}
