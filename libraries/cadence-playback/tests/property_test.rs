//! Property-based tests for the playback controller
//!
//! Uses proptest to check invariants across random intent sequences.

mod common;

use cadence_playback::{
    MemorySessionStore, PlaybackPrimitive, RepeatMode, Track, TrackId, UserIntent,
};
use common::*;
use proptest::prelude::*;
use std::sync::Arc;

// ===== Helpers =====

fn catalog(len: u32) -> Vec<Track> {
    (1..=len)
        .map(|i| create_test_track(i, &format!("Track {}", i), if i % 2 == 0 { "Even" } else { "Odd" }))
        .collect()
}

fn arbitrary_intent(len: u32) -> impl Strategy<Value = UserIntent> {
    prop_oneof![
        Just(UserIntent::Play),
        Just(UserIntent::Pause),
        Just(UserIntent::TogglePlayback),
        Just(UserIntent::Next),
        Just(UserIntent::Previous),
        Just(UserIntent::ToggleRepeat),
        Just(UserIntent::ToggleMute),
        (0.0f64..=100.0).prop_map(UserIntent::Seek),
        (0u8..=100).prop_map(UserIntent::SetVolume),
        (1..=len + 2).prop_map(|id| UserIntent::SelectTrack(TrackId(id))),
    ]
}

fn arbitrary_repeat() -> impl Strategy<Value = RepeatMode> {
    prop_oneof![
        Just(RepeatMode::NoRepeat),
        Just(RepeatMode::RepeatOne),
        Just(RepeatMode::RepeatAll),
    ]
}

// ===== Property Tests =====

proptest! {
    /// Property: the current index always points into the playlist
    #[test]
    fn current_index_stays_in_bounds(
        len in 1u32..12,
        intents in prop::collection::vec(arbitrary_intent(12), 1..60),
    ) {
        let (mut controller, _, _) = started(catalog(len));

        for intent in intents {
            // Errors (unknown ids, missing metadata) are part of the input space
            let _ = controller.dispatch(intent);
            let index = controller.current_index();
            prop_assert!(index.is_some());
            prop_assert!(index.unwrap() < controller.playlist().len());
        }

        prop_assert_eq!(controller.playlist().len(), len as usize);
    }

    /// Property: loading a valid index selects it and addresses its file
    #[test]
    fn load_track_addresses_selected_file(len in 1u32..20, pick in 0usize..20) {
        let index = pick % len as usize;
        let (mut controller, _, _) = started(catalog(len));

        controller.load_track(index).unwrap();

        prop_assert_eq!(controller.current_index(), Some(index));
        let expected = format!("/songs/{}.mp3", index + 1);
        prop_assert_eq!(controller.primitive().source.as_deref(), Some(expected.as_str()));
    }

    /// Property: the primitive is always tagged with the current track
    #[test]
    fn primitive_tag_matches_current_track(
        len in 1u32..8,
        intents in prop::collection::vec(arbitrary_intent(8), 1..40),
    ) {
        let (mut controller, _, _) = started(catalog(len));

        for intent in intents {
            let _ = controller.dispatch(intent);
            prop_assert_eq!(
                controller.primitive().track_attribute(),
                controller.current_track_id()
            );
        }
    }

    /// Property: three repeat toggles return to the starting mode
    #[test]
    fn repeat_cycle_has_period_three(start in arbitrary_repeat()) {
        let (mut controller, _, _) = started(catalog(3));
        controller.set_repeat(start);

        controller.toggle_repeat();
        controller.toggle_album_repeat();
        controller.toggle_repeat();

        prop_assert_eq!(controller.repeat_mode(), start);
    }

    /// Property: saved sessions restore the same track, time and repeat mode
    #[test]
    fn session_survives_restart(
        len in 1u32..10,
        pick in 0usize..10,
        elapsed in 0.0f64..600.0,
        repeat in arbitrary_repeat(),
    ) {
        let index = pick % len as usize;
        let store = MemorySessionStore::new();
        let mut first = start_with_store(catalog(len), store.clone(), Arc::new(RecordingSink::default()));
        let _ = first.load_track(index);
        first.set_repeat(repeat);
        first.primitive_mut().time = elapsed;
        first.save_state();
        let expected_id = first.current_track_id();
        drop(first);

        let second = start_with_store(catalog(len), store, Arc::new(RecordingSink::default()));

        prop_assert_eq!(second.current_track_id(), expected_id);
        prop_assert_eq!(second.primitive().time, elapsed);
        prop_assert_eq!(second.repeat_mode(), repeat);
    }
}
