//! Core types for playback control

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Catalog track identifier
///
/// Ids are assigned by the catalog, start at 1 and are stable for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u32);

impl TrackId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TrackId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Track record as served by the catalog
///
/// Immutable for the lifetime of a session. Reordering (shuffle, album scope)
/// always works on copies of the ordering, never on the records themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique catalog id
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist names in credit order
    #[serde(alias = "artist", deserialize_with = "one_or_many", default)]
    pub artists: Vec<String>,

    /// Album name
    #[serde(default)]
    pub album: String,

    /// Genre
    #[serde(default)]
    pub genre: String,

    /// URI the playback primitive can resolve
    pub file: String,

    /// Cover art URI
    #[serde(default)]
    pub cover: String,

    /// Display duration (`m:ss`); the primitive is authoritative once loaded
    #[serde(default)]
    pub duration: String,
}

impl Track {
    /// Artist names joined for display, without truncation
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

/// Accept either `"artist": "Name"` or `"artist": ["A", "B"]`
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}

fn opt_one_or_many<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    one_or_many(deserializer).map(Some)
}

/// Track-like payload carried by a "play this track" request
///
/// Requests may come from views that never saw the catalog, so only the id
/// and the file are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRef {
    pub id: TrackId,
    pub file: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(alias = "artist", deserialize_with = "opt_one_or_many", default)]
    pub artists: Option<Vec<String>>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

impl From<TrackRef> for Track {
    fn from(r: TrackRef) -> Self {
        Track {
            id: r.id,
            title: r.title.unwrap_or_default(),
            artists: r.artists.unwrap_or_default(),
            album: r.album.unwrap_or_default(),
            genre: String::new(),
            file: r.file,
            cover: r.cover.unwrap_or_default(),
            duration: String::new(),
        }
    }
}

impl From<&Track> for TrackRef {
    fn from(t: &Track) -> Self {
        TrackRef {
            id: t.id,
            file: t.file.clone(),
            title: Some(t.title.clone()),
            artists: Some(t.artists.clone()),
            album: Some(t.album.clone()),
            cover: Some(t.cover.clone()),
        }
    }
}

/// Transport state mirrored from the primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// Audio is (or should be) playing
    Playing,

    /// Paused, including before the first play
    Paused,
}

/// Repeat mode
///
/// Exactly one mode is active. Toggling cycles in a fixed order:
/// `NoRepeat -> RepeatOne -> RepeatAll -> NoRepeat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop at the end of the playlist (or album)
    #[default]
    NoRepeat,

    /// Replay the current track
    RepeatOne,

    /// Wrap around at the end
    RepeatAll,
}

impl RepeatMode {
    /// Next mode in the toggle cycle
    pub fn next(self) -> Self {
        match self {
            RepeatMode::NoRepeat => RepeatMode::RepeatOne,
            RepeatMode::RepeatOne => RepeatMode::RepeatAll,
            RepeatMode::RepeatAll => RepeatMode::NoRepeat,
        }
    }

    /// Position in the toggle cycle (persisted in the session)
    pub fn cycle_index(self) -> u8 {
        match self {
            RepeatMode::NoRepeat => 0,
            RepeatMode::RepeatOne => 1,
            RepeatMode::RepeatAll => 2,
        }
    }

    pub fn from_cycle_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(RepeatMode::NoRepeat),
            1 => Some(RepeatMode::RepeatOne),
            2 => Some(RepeatMode::RepeatAll),
            _ => None,
        }
    }

    pub fn is_no_repeat(self) -> bool {
        self == RepeatMode::NoRepeat
    }

    pub fn is_repeat_one(self) -> bool {
        self == RepeatMode::RepeatOne
    }

    pub fn is_repeat_all(self) -> bool {
        self == RepeatMode::RepeatAll
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Length of the shuffle animation (default: 1000 ms)
    pub shuffle_animation_ms: u64,

    /// "Previous" restarts the current track past this point (default: 5 s)
    pub restart_threshold_secs: f64,

    /// Resumes earlier than this are not reported as plays (default: 1 s)
    pub resume_report_min_secs: f64,

    /// Resumes this close to the end are not reported as plays (default: 5 s)
    pub resume_report_tail_secs: f64,

    /// Session store key
    pub session_key: String,

    /// Maximum length of a multi-artist display line (default: 30)
    pub artist_display_max: usize,

    /// Initial volume (0-100, default: 80)
    pub volume: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            shuffle_animation_ms: 1000,
            restart_threshold_secs: 5.0,
            resume_report_min_secs: 1.0,
            resume_report_tail_secs: 5.0,
            session_key: "cadence.playback.session".to_string(),
            artist_display_max: 30,
            volume: 80,
        }
    }
}
