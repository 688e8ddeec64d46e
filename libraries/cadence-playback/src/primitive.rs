//! Platform-agnostic playback primitive trait
//!
//! Abstracts the host's audio element (browser `<audio>`, a native player,
//! or a silent clock for headless use).

use crate::error::PrimitiveError;
use crate::types::TrackId;

/// Audio playback primitive driven by the controller
///
/// The primitive owns the truth about position, duration and whether audio
/// is paused. The controller only mirrors these values.
pub trait PlaybackPrimitive {
    /// Point the primitive at a new source URI
    fn set_source(&mut self, uri: &str);

    /// Reload the current source
    ///
    /// Duration becomes unknown until the host reports
    /// [`PrimitiveEvent::LoadedMetadata`].
    fn load(&mut self);

    /// Start playback
    ///
    /// # Returns
    /// * `Err(PrimitiveError::AutoplayBlocked)` - host policy requires a user gesture first
    fn play(&mut self) -> Result<(), PrimitiveError>;

    /// Pause playback
    fn pause(&mut self);

    /// Whether playback is currently paused
    fn is_paused(&self) -> bool;

    /// Current position in seconds
    fn current_time(&self) -> f64;

    /// Move the playhead (seconds from start)
    fn set_current_time(&mut self, secs: f64);

    /// Track duration in seconds
    ///
    /// `NaN` or `0.0` until metadata has loaded.
    fn duration(&self) -> f64;

    /// Output gain (0.0 - 1.0)
    fn set_volume(&mut self, gain: f32);

    /// Tag the primitive with the id of the loaded track
    fn set_track_attribute(&mut self, id: TrackId);

    /// Id of the loaded track, if tagged
    fn track_attribute(&self) -> Option<TrackId>;
}

/// Notifications raised by the primitive's host
///
/// The owner of the controller forwards these to
/// `PlaybackController::handle_primitive_event`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveEvent {
    /// Duration is available for the loaded source
    LoadedMetadata,

    /// Playback position advanced
    TimeUpdate,

    /// Source played to the end
    Ended,
}

/// Usable duration, or `None` while metadata is missing
pub(crate) fn known_duration<P: PlaybackPrimitive + ?Sized>(primitive: &P) -> Option<f64> {
    let duration = primitive.duration();
    if duration.is_finite() && duration > 0.0 {
        Some(duration)
    } else {
        None
    }
}
