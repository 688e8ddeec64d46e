//! Shuffle algorithm for playlist randomization
//!
//! Uniform permutation (Fisher-Yates via `SliceRandom::shuffle`).

use crate::types::Track;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Uniformly permute tracks in place
///
/// Each track has equal probability of appearing at any position.
pub fn shuffle_tracks(tracks: &mut [Track]) {
    let mut rng = thread_rng();
    tracks.shuffle(&mut rng);
}
