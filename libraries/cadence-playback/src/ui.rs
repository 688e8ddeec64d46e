//! UI surface model
//!
//! Everything a player view renders, kept up to date by the controller.
//! Views read it; only the controller writes it.

use crate::types::{RepeatMode, TrackId};
use serde::{Deserialize, Serialize};

/// Repeat indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatBadge {
    /// No badge (NoRepeat)
    #[default]
    Hidden,

    /// Static "1" badge (RepeatOne)
    One,

    /// Badge with a recurring rotation pulse (RepeatAll)
    AllRotating,
}

impl From<RepeatMode> for RepeatBadge {
    fn from(mode: RepeatMode) -> Self {
        match mode {
            RepeatMode::NoRepeat => RepeatBadge::Hidden,
            RepeatMode::RepeatOne => RepeatBadge::One,
            RepeatMode::RepeatAll => RepeatBadge::AllRotating,
        }
    }
}

/// Which shuffle control is animating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleScope {
    /// Whole playlist
    Playlist,

    /// Album subsequence only
    Album,
}

/// Now-playing block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NowPlaying {
    pub track_id: Option<TrackId>,
    pub title: String,
    /// Joined (and possibly truncated) artist line
    pub artist: String,
    pub cover: String,
}

/// Seek bar state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeekBar {
    /// Slider value (0-100)
    pub value: f64,
    /// Filled width hint, e.g. `"42.5%"`
    pub width: String,
    /// Elapsed time (`m:ss`)
    pub elapsed: String,
    /// Track length (`m:ss`), once metadata is loaded
    pub duration: String,
}

/// Full player surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSurface {
    pub now_playing: NowPlaying,
    pub seek: SeekBar,
    /// Play button shows "pause" while playing
    pub playing: bool,
    pub repeat_badge: RepeatBadge,
    pub album_repeat_badge: RepeatBadge,
    pub shuffle_animating: Option<ShuffleScope>,
    /// Album page title, when an album scope is active
    pub album_name: Option<String>,
    pub volume: u8,
    pub muted: bool,
}

impl UiSurface {
    pub(crate) fn new(volume: u8) -> Self {
        Self {
            now_playing: NowPlaying::default(),
            seek: SeekBar {
                value: 0.0,
                width: "0%".to_string(),
                elapsed: "0:00".to_string(),
                duration: "0:00".to_string(),
            },
            playing: false,
            repeat_badge: RepeatBadge::Hidden,
            album_repeat_badge: RepeatBadge::Hidden,
            shuffle_animating: None,
            album_name: None,
            volume,
            muted: false,
        }
    }

    pub(crate) fn set_seek(&mut self, percent: f64, elapsed: String) {
        self.seek.value = percent;
        self.seek.width = format!("{}%", percent);
        self.seek.elapsed = elapsed;
    }

    pub(crate) fn reset_seek(&mut self) {
        self.set_seek(0.0, "0:00".to_string());
    }
}
