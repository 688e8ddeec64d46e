//! Terminal player driving a controller from commands and clock ticks

use crate::clock::ClockPrimitive;
use crate::commands::{Command, HELP};
use crate::error::Result;
use cadence_playback::{
    display::format_time, PlaybackController, PlaybackEvent, PlaybackPrimitive, RepeatMode,
    SessionStore, ShuffleScope, TrackCatalogSource,
};
use tokio::time::Instant;
use tracing::{debug, warn};

/// What the input loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Player<S: SessionStore> {
    controller: PlaybackController<ClockPrimitive, S>,
    shuffle_deadline: Option<Instant>,
    lines: Vec<String>,
}

impl<S: SessionStore> Player<S> {
    pub fn new(controller: PlaybackController<ClockPrimitive, S>) -> Self {
        Self {
            controller,
            shuffle_deadline: None,
            lines: Vec::new(),
        }
    }

    /// Fetch the catalog and restore the last session
    pub async fn start(&mut self, catalog: &dyn TrackCatalogSource) {
        self.controller.start(catalog).await;

        let tracks = self.controller.playlist().tracks().to_vec();
        self.controller.primitive_mut().learn_lengths(&tracks);
    }

    /// Run one command
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Intent(intent) => {
                if let Some(delay) = self.controller.dispatch(intent)? {
                    debug!(?delay, "Shuffle scheduled");
                    self.shuffle_deadline = Some(Instant::now() + delay);
                }
            }
            Command::Album(name) => self.controller.scope_to_album(&name),
            Command::AlbumClear => self.controller.clear_album_scope(),
            Command::Status => {
                let status = self.status_line();
                self.lines.push(status);
            }
            Command::List => self.list_tracks(),
            Command::Help => self.lines.push(HELP.to_string()),
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Forward primitive notifications produced since the last tick
    pub fn tick(&mut self) {
        let events = self.controller.primitive_mut().tick();
        for event in events {
            self.controller.handle_primitive_event(event);
        }
    }

    /// When the running shuffle animation ends, if one is running
    pub fn shuffle_deadline(&self) -> Option<Instant> {
        self.shuffle_deadline
    }

    pub fn finish_shuffle(&mut self) {
        self.shuffle_deadline = None;
        if let Err(e) = self.controller.finish_shuffle() {
            warn!(error = %e, "Failed to apply shuffle");
        }
    }

    /// Save the session before exit
    pub fn shutdown(&mut self) {
        if self.shuffle_deadline.is_some() {
            self.finish_shuffle();
        }
        self.controller.save_state();
    }

    /// Lines to print: command output plus rendered events
    pub fn take_output(&mut self) -> Vec<String> {
        let mut lines = std::mem::take(&mut self.lines);
        lines.extend(
            self.controller
                .drain_events()
                .iter()
                .filter_map(render_event),
        );
        lines
    }

    pub fn controller(&self) -> &PlaybackController<ClockPrimitive, S> {
        &self.controller
    }

    fn status_line(&self) -> String {
        let ui = self.controller.ui();
        if ui.now_playing.track_id.is_none() {
            return "nothing loaded".to_string();
        }

        let state = if ui.playing { "playing" } else { "paused" };
        let elapsed = format_time(self.controller.primitive().current_time());
        let volume = if ui.muted {
            "muted".to_string()
        } else {
            format!("{}%", ui.volume)
        };
        let album = ui
            .album_name
            .as_deref()
            .map(|name| format!("  album: {}", name))
            .unwrap_or_default();

        format!(
            "[{}] {} - {}  {} / {}  repeat: {}  volume: {}{}",
            state,
            ui.now_playing.title,
            ui.now_playing.artist,
            elapsed,
            ui.seek.duration,
            repeat_label(self.controller.repeat_mode()),
            volume,
            album
        )
    }

    fn list_tracks(&mut self) {
        let current = self.controller.current_index();
        let lines: Vec<String> = self
            .controller
            .playlist()
            .tracks()
            .iter()
            .enumerate()
            .map(|(index, track)| {
                let marker = if Some(index) == current { '>' } else { ' ' };
                format!(
                    "{} {:>3}  {} - {} ({})",
                    marker,
                    track.id.get(),
                    track.title,
                    track.artist_line(),
                    track.album
                )
            })
            .collect();

        if lines.is_empty() {
            self.lines.push("playlist is empty".to_string());
        } else {
            self.lines.extend(lines);
        }
    }
}

fn repeat_label(mode: RepeatMode) -> &'static str {
    match mode {
        RepeatMode::NoRepeat => "off",
        RepeatMode::RepeatOne => "one",
        RepeatMode::RepeatAll => "all",
    }
}

fn scope_label(scope: ShuffleScope) -> &'static str {
    match scope {
        ShuffleScope::Playlist => "playlist",
        ShuffleScope::Album => "album",
    }
}

/// One-line rendering of an event; progress ticks are not printed
pub fn render_event(event: &PlaybackEvent) -> Option<String> {
    let line = match event {
        PlaybackEvent::TrackChanged { title, artist, .. } => {
            format!("now playing: {} - {}", title, artist)
        }
        PlaybackEvent::StateChanged { state } => format!("{:?}", state).to_lowercase(),
        PlaybackEvent::SeekProgress { .. } => return None,
        PlaybackEvent::RepeatModeChanged { mode } => format!("repeat: {}", repeat_label(*mode)),
        PlaybackEvent::ShuffleStarted { scope } => format!("shuffling {}...", scope_label(*scope)),
        PlaybackEvent::ShuffleFinished { scope } => format!("shuffled {}", scope_label(*scope)),
        PlaybackEvent::ResumePending => "playback blocked, press enter to resume".to_string(),
        PlaybackEvent::VolumeChanged { level, is_muted } => {
            if *is_muted {
                "muted".to_string()
            } else {
                format!("volume: {}%", level)
            }
        }
        PlaybackEvent::AlbumScopeChanged { album } => match album {
            Some(name) => format!("album scope: {}", name),
            None => "album scope cleared".to_string(),
        },
        PlaybackEvent::PlaylistChanged { length } => format!("playlist: {} tracks", length),
    };
    Some(line)
}
