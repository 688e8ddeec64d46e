//! Cadence - Playback Control
//!
//! Client-side playback controller for Cadence.
//!
//! This crate provides:
//! - Playlist ordering with a single current-track pointer
//! - Transport control with deferred resume when autoplay is refused
//! - Progress mirroring and seek (percentage of duration)
//! - Next/previous navigation with repeat modes (NoRepeat, RepeatOne, RepeatAll)
//! - Playlist and album-scoped shuffle behind an animation lock
//! - Album scope (advancing stays inside the album)
//! - Session persistence (track, elapsed time, repeat mode)
//! - Fire-and-forget play reporting
//!
//! # Architecture
//!
//! `cadence-playback` does not touch audio, HTTP or the DOM. The host
//! provides:
//! - a [`PlaybackPrimitive`] (the audio element or a stand-in)
//! - a [`SessionStore`] (key-value persistence)
//! - a [`PlayEventSink`] and a [`TrackCatalogSource`] (usually the HTTP client)
//!
//! Host notifications are fed in through
//! [`PlaybackController::handle_primitive_event`]; user actions through
//! [`PlaybackController::dispatch`]. Changes come back out as
//! [`PlaybackEvent`]s via [`PlaybackController::drain_events`] and as the
//! [`UiSurface`] model.
//!
//! # Example: Startup and Navigation
//!
//! ```rust,no_run
//! use cadence_playback::{
//!     MemorySessionStore, NullSink, PlaybackController, PlayerConfig, StaticCatalog,
//! };
//! # use cadence_playback::{PlaybackPrimitive, PrimitiveError, TrackId};
//! # struct Silent;
//! # impl PlaybackPrimitive for Silent {
//! #     fn set_source(&mut self, _: &str) {}
//! #     fn load(&mut self) {}
//! #     fn play(&mut self) -> Result<(), PrimitiveError> { Ok(()) }
//! #     fn pause(&mut self) {}
//! #     fn is_paused(&self) -> bool { true }
//! #     fn current_time(&self) -> f64 { 0.0 }
//! #     fn set_current_time(&mut self, _: f64) {}
//! #     fn duration(&self) -> f64 { f64::NAN }
//! #     fn set_volume(&mut self, _: f32) {}
//! #     fn set_track_attribute(&mut self, _: TrackId) {}
//! #     fn track_attribute(&self) -> Option<TrackId> { None }
//! # }
//! use std::sync::Arc;
//!
//! # async fn run() -> cadence_playback::Result<()> {
//! let mut controller = PlaybackController::new(
//!     Silent,
//!     MemorySessionStore::new(),
//!     Arc::new(NullSink),
//!     PlayerConfig::default(),
//! );
//!
//! // Fetch tracks, load the first one paused, restore the last session
//! controller.start(&StaticCatalog::new(vec![])).await;
//!
//! controller.play();
//! controller.forward()?;
//! controller.toggle_repeat();
//! # Ok(())
//! # }
//! ```
//!
//! # Example: Shuffle
//!
//! ```rust,no_run
//! # use cadence_playback::{PlaybackController, PlaybackPrimitive, SessionStore, ShuffleScope};
//! # async fn run<P: PlaybackPrimitive, S: SessionStore>(
//! #     controller: &mut PlaybackController<P, S>,
//! # ) -> cadence_playback::Result<()> {
//! // Either let the controller wait out the animation...
//! controller.shuffle(ShuffleScope::Playlist).await?;
//!
//! // ...or drive the timer yourself
//! let delay = controller.begin_shuffle(ShuffleScope::Album)?;
//! tokio::time::sleep(delay).await;
//! controller.finish_shuffle()?;
//! # Ok(())
//! # }
//! ```

mod catalog;
mod controller;
pub mod display;
mod error;
mod events;
mod input;
mod playlist;
mod primitive;
mod reporter;
mod session;
mod shuffle;
pub mod types;
mod ui;
mod volume;

// Public exports
pub use catalog::{StaticCatalog, TrackCatalogSource};
pub use controller::{PendingResume, PlaybackController};
pub use error::{PlaybackError, PrimitiveError, Result};
pub use events::PlaybackEvent;
pub use input::{Focus, KeyInput, UserIntent};
pub use playlist::{AlbumScope, Playlist};
pub use primitive::{PlaybackPrimitive, PrimitiveEvent};
pub use reporter::{NullSink, PlayEventSink};
pub use session::{FileSessionStore, MemorySessionStore, SessionState, SessionStore};
pub use shuffle::shuffle_tracks;
pub use types::{PlayerConfig, RepeatMode, Track, TrackId, TrackRef, TransportState};
pub use ui::{NowPlaying, RepeatBadge, SeekBar, ShuffleScope, UiSurface};
pub use volume::Volume;
