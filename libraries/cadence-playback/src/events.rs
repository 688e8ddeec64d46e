//! Playback events
//!
//! Queued by the controller and drained by UI surfaces, so other views can
//! react to changes without re-querying the catalog.

use crate::types::{RepeatMode, Track, TrackId, TransportState};
use crate::ui::ShuffleScope;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A new track was loaded
    TrackChanged {
        id: TrackId,
        title: String,
        /// Display artist line
        artist: String,
        cover: String,
        /// Full record
        track: Track,
    },

    /// Transport switched between playing and paused
    StateChanged { state: TransportState },

    /// Progress tick mirrored to the seek bar (0-100)
    SeekProgress { percent: f64 },

    /// Repeat mode toggled
    RepeatModeChanged { mode: RepeatMode },

    /// Shuffle animation started
    ShuffleStarted { scope: ShuffleScope },

    /// Shuffle applied
    ShuffleFinished { scope: ShuffleScope },

    /// Playback was blocked and waits for a user gesture
    ResumePending,

    /// Volume changed
    VolumeChanged { level: u8, is_muted: bool },

    /// Album scope set or cleared
    AlbumScopeChanged { album: Option<String> },

    /// Playlist contents changed (direct-load append, shuffle)
    PlaylistChanged { length: usize },
}

impl PlaybackEvent {
    /// Seek progress that marks the end of a track
    ///
    /// Ticks are coarse, so a rounded 100 stands in for "ended".
    pub fn is_track_end(&self) -> bool {
        matches!(self, PlaybackEvent::SeekProgress { percent } if percent.round() >= 100.0)
    }
}
