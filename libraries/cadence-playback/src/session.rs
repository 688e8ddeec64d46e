//! Session persistence
//!
//! A single JSON snapshot, stored under one namespaced key, is enough to
//! resume playback after a restart. Anything unreadable is a cold start.

use crate::error::{PlaybackError, Result};
use crate::types::{RepeatMode, TrackId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Persisted playback snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Last loaded track
    pub track_id: TrackId,

    /// Elapsed time in seconds
    pub elapsed: f64,

    /// Number of loads performed in the saved session
    pub load_count: u64,

    /// Repeat mode position in the toggle cycle
    pub repeat_index: u8,

    // Derived flags, kept for readers of the stored JSON
    pub no_repeat: bool,
    pub repeat_one: bool,
    pub repeat_all: bool,
}

impl SessionState {
    pub fn new(track_id: TrackId, elapsed: f64, load_count: u64, repeat: RepeatMode) -> Self {
        Self {
            track_id,
            elapsed,
            load_count,
            repeat_index: repeat.cycle_index(),
            no_repeat: repeat.is_no_repeat(),
            repeat_one: repeat.is_repeat_one(),
            repeat_all: repeat.is_repeat_all(),
        }
    }

    /// Repeat mode, if the index and flags agree
    pub fn repeat_mode(&self) -> Option<RepeatMode> {
        let mode = RepeatMode::from_cycle_index(self.repeat_index)?;
        let flags_match = mode.is_no_repeat() == self.no_repeat
            && mode.is_repeat_one() == self.repeat_one
            && mode.is_repeat_all() == self.repeat_all;
        flags_match.then_some(mode)
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored snapshot
    ///
    /// Returns `None` for malformed JSON, an unknown repeat index, flags that
    /// disagree with it, or a non-finite/negative elapsed time.
    pub fn decode(raw: &str) -> Option<Self> {
        let state: SessionState = match serde_json::from_str(raw) {
            Ok(state) => state,
            Err(e) => {
                debug!(error = %e, "Discarding unreadable session");
                return None;
            }
        };

        if state.repeat_mode().is_none() {
            debug!(repeat_index = state.repeat_index, "Discarding session with bad repeat state");
            return None;
        }
        if !state.elapsed.is_finite() || state.elapsed < 0.0 {
            debug!(elapsed = state.elapsed, "Discarding session with bad elapsed time");
            return None;
        }

        Some(state)
    }
}

/// Key-value persistence surviving restarts
pub trait SessionStore {
    /// Read the value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store
///
/// Clones share the same backing map, so a test can hand one clone to a
/// controller and keep another to inspect or reuse.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| PlaybackError::Session(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| PlaybackError::Session(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Create the store, creating `dir` if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
