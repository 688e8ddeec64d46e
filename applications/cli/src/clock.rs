//! Wall-clock playback primitive
//!
//! Produces no audio. Position advances with time while "playing", and the
//! duration comes from the catalog's display length once the host ticks
//! after a load.

use cadence_playback::display::parse_time;
use cadence_playback::{PlaybackPrimitive, PrimitiveError, PrimitiveEvent, Track, TrackId};
use std::collections::HashMap;
use tokio::time::Instant;

/// Length used when a track has no parseable display duration
pub const FALLBACK_TRACK_SECS: f64 = 180.0;

#[derive(Debug)]
pub struct ClockPrimitive {
    source: Option<String>,
    attribute: Option<TrackId>,
    lengths: HashMap<TrackId, f64>,

    /// Position when the clock was last anchored
    anchor_position: f64,
    /// Set while playing
    anchor_instant: Option<Instant>,

    duration: f64,
    metadata_due: bool,
    gain: f32,
}

impl ClockPrimitive {
    pub fn new() -> Self {
        Self {
            source: None,
            attribute: None,
            lengths: HashMap::new(),
            anchor_position: 0.0,
            anchor_instant: None,
            duration: f64::NAN,
            metadata_due: false,
            gain: 1.0,
        }
    }

    /// Remember display lengths for the given tracks
    pub fn learn_lengths(&mut self, tracks: &[Track]) {
        for track in tracks {
            let secs = parse_time(&track.duration).unwrap_or(FALLBACK_TRACK_SECS);
            self.lengths.insert(track.id, secs);
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Advance the host side by one tick
    ///
    /// Reports metadata once after each load, then a progress update on every
    /// tick while playing.
    pub fn tick(&mut self) -> Vec<PrimitiveEvent> {
        let mut events = Vec::new();

        if self.metadata_due {
            self.metadata_due = false;
            self.duration = self
                .attribute
                .and_then(|id| self.lengths.get(&id).copied())
                .unwrap_or(FALLBACK_TRACK_SECS);
            events.push(PrimitiveEvent::LoadedMetadata);
        }

        if self.anchor_instant.is_some() {
            events.push(PrimitiveEvent::TimeUpdate);
        }

        events
    }

    fn reanchor(&mut self, position: f64) {
        self.anchor_position = position;
        if self.anchor_instant.is_some() {
            self.anchor_instant = Some(Instant::now());
        }
    }
}

impl Default for ClockPrimitive {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackPrimitive for ClockPrimitive {
    fn set_source(&mut self, uri: &str) {
        self.source = Some(uri.to_string());
    }

    fn load(&mut self) {
        self.anchor_position = 0.0;
        self.anchor_instant = None;
        self.duration = f64::NAN;
        self.metadata_due = true;
    }

    fn play(&mut self) -> Result<(), PrimitiveError> {
        if self.source.is_none() {
            return Err(PrimitiveError::Backend("no source loaded".to_string()));
        }
        if self.anchor_instant.is_none() {
            self.anchor_instant = Some(Instant::now());
        }
        Ok(())
    }

    fn pause(&mut self) {
        let position = self.current_time();
        self.anchor_instant = None;
        self.anchor_position = position;
    }

    fn is_paused(&self) -> bool {
        self.anchor_instant.is_none()
    }

    fn current_time(&self) -> f64 {
        let elapsed = self
            .anchor_instant
            .map(|start| start.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        let position = self.anchor_position + elapsed;

        if self.duration.is_finite() {
            position.min(self.duration)
        } else {
            position
        }
    }

    fn set_current_time(&mut self, secs: f64) {
        self.reanchor(secs.max(0.0));
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_volume(&mut self, gain: f32) {
        self.gain = gain;
    }

    fn set_track_attribute(&mut self, id: TrackId) {
        self.attribute = Some(id);
    }

    fn track_attribute(&self) -> Option<TrackId> {
        self.attribute
    }
}
