//! Playback controller - core state machine
//!
//! Owns the playlist ordering, the current-track pointer, transport state,
//! repeat mode, shuffle lock and album scope. Drives a [`PlaybackPrimitive`],
//! persists the session through a [`SessionStore`] and reports plays through
//! a [`PlayEventSink`].
//!
//! All methods run to completion on the caller's thread; the only suspension
//! points are the catalog fetch in [`PlaybackController::start`] and the
//! animation delay in [`PlaybackController::shuffle`].

use crate::{
    catalog::TrackCatalogSource,
    display::{artist_display, format_time, parse_time},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    input::{KeyInput, UserIntent},
    playlist::{AlbumScope, Playlist},
    primitive::{known_duration, PlaybackPrimitive, PrimitiveEvent},
    reporter::{PlayEventSink, PlayReporter},
    session::{SessionState, SessionStore},
    types::{PlayerConfig, RepeatMode, Track, TrackId, TrackRef, TransportState},
    ui::{RepeatBadge, ShuffleScope, UiSurface},
    volume::Volume,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Playback blocked by the host, waiting for the next user gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingResume {
    /// Track that was loaded when playback was refused
    pub track_id: Option<TrackId>,
}

/// A running shuffle animation
#[derive(Debug, Clone, Copy)]
struct ShuffleLock {
    scope: ShuffleScope,
    /// Past this the lock no longer blocks a new shuffle
    expires: Instant,
}

impl ShuffleLock {
    fn is_held(&self) -> bool {
        Instant::now() < self.expires
    }
}

/// Central playback controller
///
/// Explicitly constructed and passed to whoever needs it; there is no shared
/// global instance.
pub struct PlaybackController<P, S>
where
    P: PlaybackPrimitive,
    S: SessionStore,
{
    config: PlayerConfig,

    // Collaborators
    primitive: P,
    store: S,
    reporter: PlayReporter,

    // Ordering
    playlist: Playlist,
    album: Option<AlbumScope>,

    // State
    transport: TransportState,
    repeat: RepeatMode,
    volume: Volume,
    load_count: u64,
    fresh_load: bool,
    metadata_ready: bool,
    pending_resume: Option<PendingResume>,
    shuffle_in_progress: Option<ShuffleLock>,

    // Output
    ui: UiSurface,
    pending_events: Vec<PlaybackEvent>,
}

impl<P, S> PlaybackController<P, S>
where
    P: PlaybackPrimitive,
    S: SessionStore,
{
    /// Create an idle controller with an empty playlist
    pub fn new(
        mut primitive: P,
        store: S,
        sink: Arc<dyn PlayEventSink>,
        config: PlayerConfig,
    ) -> Self {
        let volume = Volume::new(config.volume);
        primitive.set_volume(volume.gain());

        Self {
            ui: UiSurface::new(volume.level()),
            config,
            primitive,
            store,
            reporter: PlayReporter::new(sink),
            playlist: Playlist::new(),
            album: None,
            transport: TransportState::Paused,
            repeat: RepeatMode::NoRepeat,
            volume,
            load_count: 0,
            fresh_load: false,
            metadata_ready: false,
            pending_resume: None,
            shuffle_in_progress: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Startup =====

    /// Fetch the catalog, load the first track, restore the saved session
    ///
    /// A failed fetch leaves the playlist empty; it is not retried.
    pub async fn start(&mut self, catalog: &dyn TrackCatalogSource) {
        let tracks = match catalog.fetch_tracks().await {
            Ok(tracks) => {
                info!(count = tracks.len(), "Loaded track catalog");
                tracks
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch track catalog, starting with an empty playlist");
                Vec::new()
            }
        };

        self.start_with_tracks(tracks);
    }

    /// Same as [`start`](Self::start) with an already fetched catalog
    pub fn start_with_tracks(&mut self, tracks: Vec<Track>) {
        self.playlist.set_tracks(tracks);
        self.emit(PlaybackEvent::PlaylistChanged {
            length: self.playlist.len(),
        });

        if !self.playlist.is_empty() {
            // Index 0 exists, so this cannot be rejected
            let _ = self.load_track(0);
        }

        self.restore_state();
        self.pause();
    }

    // ===== Track Loading =====

    /// Load the track at `index`
    ///
    /// The very first load of a session stays paused; every later load
    /// resumes playback and reports a play.
    pub fn load_track(&mut self, index: usize) -> Result<()> {
        self.load_at(index, true)
    }

    fn load_at(&mut self, index: usize, report: bool) -> Result<()> {
        let track = self.stage_track(index)?;

        let first_load = self.load_count == 0;
        if first_load {
            self.pause();
        } else {
            self.play();
        }
        self.load_count += 1;

        if !first_load && report {
            self.reporter.report(track.id);
        }

        debug!(index, track_id = %track.id, load_count = self.load_count, "Loaded track");
        self.emit_track_changed(track);
        Ok(())
    }

    /// Point the primitive and the now-playing display at `index`
    ///
    /// Leaves transport, load count and reporting to the caller.
    fn stage_track(&mut self, index: usize) -> Result<Track> {
        let len = self.playlist.len();
        let Some(track) = self.playlist.select(index).cloned() else {
            warn!(index, len, "Rejected load of out-of-range track");
            return Err(PlaybackError::IndexOutOfBounds { index, len });
        };

        self.primitive.set_source(&track.file);
        self.primitive.load();
        self.primitive.set_track_attribute(track.id);

        self.ui.now_playing.track_id = Some(track.id);
        self.ui.now_playing.title = track.title.clone();
        self.ui.now_playing.artist = artist_display(&track.artists, self.config.artist_display_max);
        self.ui.now_playing.cover = track.cover.clone();
        self.ui.reset_seek();
        self.ui.seek.duration = if track.duration.is_empty() {
            "0:00".to_string()
        } else {
            track.duration.clone()
        };

        self.fresh_load = true;
        Ok(track)
    }

    fn emit_track_changed(&mut self, track: Track) {
        self.emit(PlaybackEvent::TrackChanged {
            id: track.id,
            title: track.title.clone(),
            artist: self.ui.now_playing.artist.clone(),
            cover: track.cover.clone(),
            track,
        });
    }

    /// Play a track that may not be part of the playlist
    ///
    /// Unknown tracks are appended to the playlist (it is never trimmed).
    pub fn load_and_play(&mut self, track: TrackRef) -> Result<()> {
        let id = track.id;
        let index = match self.playlist.position_of(id) {
            Some(index) => index,
            None => {
                let index = self.playlist.push(Track::from(track));
                debug!(track_id = %id, index, "Appended track outside the catalog");
                self.emit(PlaybackEvent::PlaylistChanged {
                    length: self.playlist.len(),
                });
                index
            }
        };

        self.load_at(index, false)?;
        self.play();
        self.reporter.report(id);
        Ok(())
    }

    /// Load and play the catalog track with `id`
    pub fn select_track(&mut self, id: TrackId) -> Result<()> {
        let Some(index) = self.playlist.position_of(id) else {
            warn!(track_id = %id, "Selected track is not in the playlist");
            return Err(PlaybackError::TrackNotFound(id));
        };

        self.load_track(index)?;
        self.play();
        Ok(())
    }

    // ===== Transport =====

    /// Start or resume playback
    ///
    /// If the host refuses (autoplay policy), playback is deferred until the
    /// next user gesture.
    pub fn play(&mut self) {
        self.set_transport(TransportState::Playing);

        if self.primitive.is_paused() {
            match self.primitive.play() {
                Ok(()) => self.on_playback_started(),
                Err(e) => {
                    info!(error = %e, "Playback refused, waiting for a user gesture");
                    self.pending_resume = Some(PendingResume {
                        track_id: self.current_track_id(),
                    });
                    self.emit(PlaybackEvent::ResumePending);
                }
            }
        }

        self.save_state();
    }

    /// Pause playback
    ///
    /// Also drops any resume waiting for a gesture.
    pub fn pause(&mut self) {
        self.set_transport(TransportState::Paused);
        self.pending_resume = None;

        if !self.primitive.is_paused() {
            self.primitive.pause();
        }

        self.save_state();
    }

    /// Play if paused, pause if playing
    pub fn toggle_playback(&mut self) {
        match self.transport {
            TransportState::Playing => self.pause(),
            TransportState::Paused => self.play(),
        }
    }

    /// Run the deferred resume, if any
    ///
    /// One-shot: the pending resume is consumed whether or not it still
    /// applies. A second refusal arms a new one.
    pub fn on_user_gesture(&mut self) {
        let Some(pending) = self.pending_resume.take() else {
            return;
        };

        if pending.track_id != self.current_track_id() || self.transport != TransportState::Playing
        {
            debug!("Dropping stale pending resume");
            return;
        }

        if !self.primitive.is_paused() {
            return;
        }

        match self.primitive.play() {
            Ok(()) => {
                debug!("Resumed playback after user gesture");
                self.on_playback_started();
                self.save_state();
            }
            Err(e) => {
                info!(error = %e, "Playback refused again");
                self.pending_resume = Some(pending);
                self.emit(PlaybackEvent::ResumePending);
            }
        }
    }

    fn on_playback_started(&mut self) {
        if std::mem::replace(&mut self.fresh_load, false) {
            return;
        }

        // Resumes right at the edges of a track are not counted again
        let current = self.primitive.current_time();
        if let Some(duration) = known_duration(&self.primitive) {
            if current > self.config.resume_report_min_secs
                && duration - current > self.config.resume_report_tail_secs
            {
                if let Some(id) = self.current_track_id() {
                    self.reporter.report(id);
                }
            }
        }
    }

    fn set_transport(&mut self, state: TransportState) {
        self.ui.playing = state == TransportState::Playing;
        if self.transport != state {
            self.transport = state;
            self.emit(PlaybackEvent::StateChanged { state });
        }
    }

    // ===== Primitive Events =====

    /// Feed a host notification into the controller
    pub fn handle_primitive_event(&mut self, event: PrimitiveEvent) {
        match event {
            PrimitiveEvent::LoadedMetadata => {
                if !self.metadata_ready {
                    self.metadata_ready = true;
                    debug!("Metadata available, mirroring progress");
                }
                if let Some(duration) = known_duration(&self.primitive) {
                    self.ui.seek.duration = format_time(duration);
                    self.refresh_seek(duration);
                }
            }
            PrimitiveEvent::TimeUpdate => self.on_time_update(),
            PrimitiveEvent::Ended => {
                // The rounded 100% progress tick already advanced
                debug!("Ignoring ended event");
            }
        }
    }

    fn on_time_update(&mut self) {
        if !self.metadata_ready {
            debug!("Progress tick before metadata, skipping");
            return;
        }
        let Some(duration) = known_duration(&self.primitive) else {
            debug!("Progress tick without duration, skipping");
            return;
        };

        let percent = self.refresh_seek(duration);

        let event = PlaybackEvent::SeekProgress { percent };
        let ended = event.is_track_end();
        self.emit(event);
        self.save_state();

        if ended {
            if let Err(e) = self.forward() {
                warn!(error = %e, "Failed to advance at end of track");
            }
        }
    }

    /// Mirror the primitive position onto the seek bar, returning the percent
    fn refresh_seek(&mut self, duration: f64) -> f64 {
        let current = self.primitive.current_time();
        let percent = current / duration * 100.0;
        self.ui.set_seek(percent, format_time(current));
        percent
    }

    // ===== Seek =====

    /// Seek to a seek-bar value in `[0, 100]`
    pub fn seek(&mut self, value: f64) -> Result<()> {
        if !self.metadata_ready {
            return Err(PlaybackError::MetadataNotReady);
        }
        let duration = known_duration(&self.primitive).ok_or(PlaybackError::MetadataNotReady)?;

        let value = if value.is_finite() {
            value.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.primitive.set_current_time(value / 100.0 * duration);
        Ok(())
    }

    // ===== Navigation =====

    /// Go to the previous track
    ///
    /// Past the restart threshold this restarts the current track. No
    /// wraparound from the first track unless RepeatAll is active, and no
    /// movement at all under RepeatOne.
    pub fn reverse(&mut self) -> Result<()> {
        let len = self.playlist.len();
        let current = self
            .playlist
            .current_index()
            .ok_or(PlaybackError::EmptyPlaylist)?;

        let elapsed = self.primitive.current_time();
        let target = if elapsed < self.config.restart_threshold_secs {
            if self.repeat.is_repeat_one() || (current == 0 && !self.repeat.is_repeat_all()) {
                current
            } else {
                (current + len - 1) % len
            }
        } else {
            current
        };

        self.load_track(target)?;
        self.play();
        Ok(())
    }

    /// Advance to the next track
    ///
    /// Inside the active album scope, advancing stays within the album.
    pub fn forward(&mut self) -> Result<()> {
        let current_id = self
            .current_track_id()
            .ok_or(PlaybackError::EmptyPlaylist)?;

        let album_position = self
            .album
            .as_ref()
            .and_then(|album| album.position_of(current_id));

        match album_position {
            Some(position) => self.forward_in_album(position),
            None => self.forward_in_playlist(),
        }
    }

    fn forward_in_album(&mut self, position: usize) -> Result<()> {
        let Some(album) = self.album.as_ref() else {
            return self.forward_in_playlist();
        };

        let len = album.len();
        let target = match self.repeat {
            RepeatMode::RepeatOne => position,
            RepeatMode::RepeatAll => (position + 1) % len,
            RepeatMode::NoRepeat => position + 1,
        };

        // Album playback does not spill over into unrelated tracks
        let Some(track) = album.get(target).map(TrackRef::from) else {
            self.stop_at_end();
            return Ok(());
        };

        match self.playlist.position_of(track.id) {
            Some(index) => {
                self.load_track(index)?;
                self.play();
                Ok(())
            }
            None => self.load_and_play(track),
        }
    }

    fn forward_in_playlist(&mut self) -> Result<()> {
        let len = self.playlist.len();
        let current = self
            .playlist
            .current_index()
            .ok_or(PlaybackError::EmptyPlaylist)?;

        let target = match self.repeat {
            RepeatMode::RepeatOne => current,
            RepeatMode::RepeatAll => (current + 1) % len,
            RepeatMode::NoRepeat => current + 1,
        };

        if target >= len {
            self.stop_at_end();
            return Ok(());
        }

        self.load_track(target)?;
        self.play();
        Ok(())
    }

    /// Pin the playhead to the end and pause
    fn stop_at_end(&mut self) {
        if let Some(duration) = known_duration(&self.primitive) {
            self.primitive.set_current_time(duration);
        }
        info!("Reached the end, stopping");
        self.pause();
    }

    // ===== Shuffle =====

    /// Start a shuffle animation
    ///
    /// Returns how long the animation runs; call
    /// [`finish_shuffle`](Self::finish_shuffle) once it has elapsed.
    ///
    /// The lock only holds for the animation length. A shuffle that was never
    /// finished (its future dropped, or the host forgot) stops blocking once
    /// that time has passed.
    pub fn begin_shuffle(&mut self, scope: ShuffleScope) -> Result<Duration> {
        if let Some(running) = self.shuffle_in_progress {
            if running.is_held() {
                info!(running = ?running.scope, requested = ?scope, "Shuffle already in progress, ignoring");
                return Err(PlaybackError::ShuffleInProgress);
            }
            warn!(scope = ?running.scope, "Previous shuffle never finished, dropping it");
        }

        let delay = Duration::from_millis(self.config.shuffle_animation_ms);
        self.shuffle_in_progress = Some(ShuffleLock {
            scope,
            expires: Instant::now() + delay,
        });
        self.ui.shuffle_animating = Some(scope);
        self.emit(PlaybackEvent::ShuffleStarted { scope });

        Ok(delay)
    }

    /// Apply the shuffle started by [`begin_shuffle`](Self::begin_shuffle)
    ///
    /// The shuffle lock is released before anything else, so a failure here
    /// never blocks later shuffles.
    pub fn finish_shuffle(&mut self) -> Result<()> {
        let scope = self
            .shuffle_in_progress
            .take()
            .ok_or(PlaybackError::NoShufflePending)?
            .scope;
        self.ui.shuffle_animating = None;

        match scope {
            ShuffleScope::Playlist => {
                self.playlist.shuffle_pinned();
                self.emit(PlaybackEvent::PlaylistChanged {
                    length: self.playlist.len(),
                });
                self.save_state();
            }
            ShuffleScope::Album => self.shuffle_album()?,
        }

        self.emit(PlaybackEvent::ShuffleFinished { scope });
        Ok(())
    }

    /// Begin, wait out the animation, finish
    pub async fn shuffle(&mut self, scope: ShuffleScope) -> Result<()> {
        let delay = self.begin_shuffle(scope)?;
        tokio::time::sleep(delay).await;
        self.finish_shuffle()
    }

    fn shuffle_album(&mut self) -> Result<()> {
        let current = self.current_track_id();
        let Some(album) = self.album.as_mut() else {
            debug!("No album scope to shuffle");
            return Ok(());
        };

        album.shuffle_with_front(current);

        match album.get(0).map(TrackRef::from) {
            Some(first) => self.load_and_play(first),
            None => Ok(()),
        }
    }

    /// Whether a shuffle animation is still holding the lock
    pub fn is_shuffling(&self) -> bool {
        self.shuffle_in_progress.is_some_and(|lock| lock.is_held())
    }

    // ===== Repeat =====

    /// Advance the repeat mode from the main player control
    pub fn toggle_repeat(&mut self) -> RepeatMode {
        self.set_repeat(self.repeat.next());
        self.repeat
    }

    /// Advance the repeat mode from the album page control
    ///
    /// Same underlying mode as [`toggle_repeat`](Self::toggle_repeat).
    pub fn toggle_album_repeat(&mut self) -> RepeatMode {
        self.set_repeat(self.repeat.next());
        self.repeat
    }

    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
        self.refresh_repeat_badges();
        self.emit(PlaybackEvent::RepeatModeChanged { mode });
        self.save_state();
    }

    fn refresh_repeat_badges(&mut self) {
        let badge = RepeatBadge::from(self.repeat);
        self.ui.repeat_badge = badge;
        self.ui.album_repeat_badge = badge;
    }

    // ===== Album Scope =====

    /// Restrict advancing to `album`
    pub fn set_album_scope(&mut self, album: AlbumScope) {
        info!(album = album.name(), tracks = album.len(), "Album scope set");
        self.ui.album_name = Some(album.name().to_string());
        self.emit(PlaybackEvent::AlbumScopeChanged {
            album: Some(album.name().to_string()),
        });
        self.album = Some(album);
    }

    /// Scope to the playlist tracks whose album is `name`
    ///
    /// An album with no tracks in the playlist clears the scope.
    pub fn scope_to_album(&mut self, name: &str) {
        let album = AlbumScope::from_playlist(&self.playlist, name);
        if album.is_empty() {
            warn!(album = name, "No tracks for album, clearing scope");
            self.clear_album_scope();
            return;
        }
        self.set_album_scope(album);
    }

    pub fn clear_album_scope(&mut self) {
        if self.album.take().is_some() {
            self.ui.album_name = None;
            self.emit(PlaybackEvent::AlbumScopeChanged { album: None });
        }
    }

    // ===== Volume =====

    /// Set volume (0-100)
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.apply_volume();
    }

    pub fn mute(&mut self) {
        self.volume.mute();
        self.apply_volume();
    }

    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.apply_volume();
    }

    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.apply_volume();
    }

    fn apply_volume(&mut self) {
        debug!(level = self.volume.level(), db = ?self.volume.decibels(), "Applying volume");
        self.primitive.set_volume(self.volume.gain());
        self.ui.volume = self.volume.level();
        self.ui.muted = self.volume.is_muted();
        self.emit(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    // ===== Session =====

    /// Persist the current position
    ///
    /// Does nothing while no track is selected. Store failures are logged.
    pub fn save_state(&mut self) {
        let Some(track_id) = self.current_track_id() else {
            debug!("No current track, session not saved");
            return;
        };

        let elapsed = self.primitive.current_time();
        let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
        let state = SessionState::new(track_id, elapsed, self.load_count, self.repeat);

        let saved = state
            .encode()
            .and_then(|raw| self.store.write(&self.config.session_key, &raw));
        if let Err(e) = saved {
            warn!(error = %e, "Failed to save session");
        }
    }

    /// Restore a saved session
    ///
    /// Returns `false` (cold start) when nothing usable was stored or the
    /// saved track is no longer in the playlist.
    pub fn restore_state(&mut self) -> bool {
        let raw = match self.store.read(&self.config.session_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved session");
                return false;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read saved session");
                return false;
            }
        };

        let Some(state) = SessionState::decode(&raw) else {
            return false;
        };
        let Some(index) = self.playlist.position_of(state.track_id) else {
            info!(track_id = %state.track_id, "Saved track is not in the playlist");
            return false;
        };

        let Ok(track) = self.stage_track(index) else {
            return false;
        };

        // A restored session always comes back paused
        self.set_transport(TransportState::Paused);
        self.pending_resume = None;
        if !self.primitive.is_paused() {
            self.primitive.pause();
        }
        self.fresh_load = false;

        self.primitive.set_current_time(state.elapsed);
        self.load_count = state.load_count;
        self.repeat = state.repeat_mode().unwrap_or_default();
        self.refresh_repeat_badges();

        // The primitive has no duration yet, use the catalog length meanwhile
        let duration = known_duration(&self.primitive)
            .or_else(|| parse_time(&track.duration).filter(|secs| *secs > 0.0));
        let percent = duration.map_or(0.0, |d| (state.elapsed / d * 100.0).min(100.0));
        self.ui.set_seek(percent, format_time(state.elapsed));

        self.emit_track_changed(track);
        self.save_state();

        info!(
            track_id = %state.track_id,
            elapsed = state.elapsed,
            repeat = ?self.repeat,
            "Restored session"
        );
        true
    }

    // ===== Input =====

    /// Apply a user intent
    ///
    /// Every intent counts as a user gesture. Returns the animation delay
    /// when a shuffle was started; call
    /// [`finish_shuffle`](Self::finish_shuffle) after it.
    pub fn dispatch(&mut self, intent: UserIntent) -> Result<Option<Duration>> {
        if intent != UserIntent::Pause {
            self.on_user_gesture();
        }

        match intent {
            UserIntent::Play => self.play(),
            UserIntent::Pause => self.pause(),
            UserIntent::TogglePlayback => self.toggle_playback(),
            UserIntent::Next => self.forward()?,
            UserIntent::Previous => self.reverse()?,
            UserIntent::Seek(value) => self.seek(value)?,
            UserIntent::ToggleRepeat => {
                self.toggle_repeat();
            }
            UserIntent::ToggleAlbumRepeat => {
                self.toggle_album_repeat();
            }
            UserIntent::Shuffle(scope) => return self.begin_shuffle(scope).map(Some),
            UserIntent::SetVolume(level) => self.set_volume(level),
            UserIntent::ToggleMute => self.toggle_mute(),
            UserIntent::SelectTrack(id) => self.select_track(id)?,
            UserIntent::PlayTrack(track) => self.load_and_play(track)?,
            UserIntent::Gesture => {}
        }

        Ok(None)
    }

    /// Apply a key press through the global key bindings
    pub fn handle_key(&mut self, key: KeyInput) -> Result<Option<Duration>> {
        match key.intent() {
            Some(intent) => self.dispatch(intent),
            None => Ok(None),
        }
    }

    // ===== Events =====

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== State Queries =====

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn album(&self) -> Option<&AlbumScope> {
        self.album.as_ref()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.playlist.current_index()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.current()
    }

    pub fn current_track_id(&self) -> Option<TrackId> {
        self.playlist.current().map(|t| t.id)
    }

    pub fn transport(&self) -> TransportState {
        self.transport
    }

    pub fn is_playing(&self) -> bool {
        self.transport == TransportState::Playing
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn load_count(&self) -> u64 {
        self.load_count
    }

    pub fn pending_resume(&self) -> Option<PendingResume> {
        self.pending_resume
    }

    pub fn is_metadata_ready(&self) -> bool {
        self.metadata_ready
    }

    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn ui(&self) -> &UiSurface {
        &self.ui
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Mutable access for hosts that advance the primitive themselves
    pub fn primitive_mut(&mut self) -> &mut P {
        &mut self.primitive
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
