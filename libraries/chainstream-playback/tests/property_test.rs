//! Property-based tests for the playback session
//!
//! Uses proptest to verify the sequencing invariants across many random
//! inputs.

mod common;

use chainstream_core::TrackId;
use chainstream_playback::{PlaybackConfig, PlaybackSession};
use common::{track, tracks};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

// ===== Helpers =====

fn session(seed: u64) -> PlaybackSession {
    PlaybackSession::new(PlaybackConfig::default()).with_rng(StdRng::seed_from_u64(seed))
}

fn unique_ids() -> impl Strategy<Value = Vec<TrackId>> {
    prop::collection::btree_set(1i64..500, 1..30).prop_map(|ids| ids.into_iter().collect())
}

fn current_id(session: &PlaybackSession) -> Option<TrackId> {
    session.current_track().map(|t| t.id)
}

// ===== Property Tests =====

proptest! {
    /// Property: enqueued tracks come out in FIFO order, one per next_track
    #[test]
    fn queue_is_fifo(
        queued in prop::collection::vec(1i64..1000, 1..40),
        shuffle in any::<bool>(),
        repeat in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut session = session(seed);
        session.set_collection(tracks(&[1, 2, 3]));
        if shuffle {
            session.toggle_shuffle();
        }
        if repeat {
            session.toggle_repeat();
        }

        for &id in &queued {
            session.add_to_queue(track(id));
        }

        for (consumed, &expected) in queued.iter().enumerate() {
            session.next_track();
            prop_assert_eq!(current_id(&session), Some(expected));
            prop_assert_eq!(session.queue_len(), queued.len() - consumed - 1);
        }
    }

    /// Property: previous after next restores the prior track and re-queues
    /// the one that had become current
    #[test]
    fn previous_undoes_next(ids in unique_ids(), start in any::<prop::sample::Index>()) {
        let mut session = session(0);
        session.set_collection(tracks(&ids));

        let first = ids[start.index(ids.len())];
        session.set_current_track(track(first));
        session.next_track();
        let advanced = current_id(&session);

        session.previous_track();

        prop_assert_eq!(current_id(&session), Some(first));
        prop_assert_eq!(session.get_queue().first().map(|t| t.id), advanced);
    }

    /// Property: repeat with an empty queue never changes the current track
    #[test]
    fn repeat_keeps_current(ids in unique_ids(), current in 1i64..1000, steps in 1usize..20) {
        let mut session = session(0);
        session.set_collection(tracks(&ids));
        session.set_current_track(track(current));
        session.toggle_repeat();

        for _ in 0..steps {
            session.next_track();
            prop_assert_eq!(current_id(&session), Some(current));
        }
        prop_assert!(session.get_history().is_empty());
    }

    /// Property: shuffle with an empty queue always lands in the collection
    #[test]
    fn shuffle_stays_in_collection(ids in unique_ids(), seed in any::<u64>(), steps in 1usize..30) {
        let mut session = session(seed);
        session.set_collection(tracks(&ids));
        session.toggle_shuffle();

        for _ in 0..steps {
            session.next_track();
            let id = current_id(&session);
            prop_assert!(id.is_some_and(|id| ids.contains(&id)));
        }
    }

    /// Property: sequential advance visits the collection in id order, wrapping
    #[test]
    fn sequential_cycles_in_id_order(ids in unique_ids()) {
        let mut session = session(0);
        let mut reversed = tracks(&ids);
        reversed.reverse();
        session.set_collection(reversed);
        session.set_current_track(track(ids[0]));

        for expected in ids.iter().cycle().skip(1).take(ids.len() * 2) {
            session.next_track();
            prop_assert_eq!(current_id(&session), Some(*expected));
        }
    }

    /// Property: volume never exceeds 100 and reads back clamped
    #[test]
    fn volume_is_clamped(level in any::<u8>()) {
        let mut session = session(0);
        session.set_volume(level);
        prop_assert_eq!(session.volume(), level.min(100));
    }

    /// Property: history never exceeds its configured bound
    #[test]
    fn history_is_bounded(history_size in 1usize..10, count in 1i64..50) {
        let config = PlaybackConfig { history_size, ..PlaybackConfig::default() };
        let mut session = PlaybackSession::new(config);

        for id in 1..=count {
            session.set_current_track(track(id));
        }

        let expected = usize::try_from(count - 1).unwrap().min(history_size);
        prop_assert_eq!(session.get_history().len(), expected);
    }
}

#[test]
fn sequential_example_wraps_from_last_to_first() {
    // [A, B, C], current C -> A
    let mut session = session(0);
    session.set_collection(tracks(&[1, 2, 3]));
    session.set_current_track(track(3));

    session.next_track();

    assert_eq!(current_id(&session), Some(1));
}
