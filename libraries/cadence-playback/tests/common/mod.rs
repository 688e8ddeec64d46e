//! Shared helpers for controller integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use cadence_playback::{
    MemorySessionStore, PlayEventSink, PlaybackController, PlaybackError, PlaybackPrimitive,
    PlayerConfig, PrimitiveError, Result, Track, TrackCatalogSource, TrackId,
};
use std::sync::{Arc, Mutex};

// ===== Mock Primitive =====

/// Scriptable stand-in for an audio element
#[derive(Debug)]
pub struct MockPrimitive {
    pub source: Option<String>,
    pub loads: usize,
    pub paused: bool,
    pub time: f64,
    pub duration: f64,
    pub gain: f32,
    pub attribute: Option<TrackId>,
    pub block_autoplay: bool,
}

impl MockPrimitive {
    pub fn new() -> Self {
        Self {
            source: None,
            loads: 0,
            paused: true,
            time: 0.0,
            duration: f64::NAN,
            gain: 1.0,
            attribute: None,
            block_autoplay: false,
        }
    }
}

impl PlaybackPrimitive for MockPrimitive {
    fn set_source(&mut self, uri: &str) {
        self.source = Some(uri.to_string());
    }

    fn load(&mut self) {
        self.loads += 1;
        self.time = 0.0;
        self.duration = f64::NAN;
        self.paused = true;
    }

    fn play(&mut self) -> std::result::Result<(), PrimitiveError> {
        if self.block_autoplay {
            return Err(PrimitiveError::AutoplayBlocked);
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, secs: f64) {
        self.time = secs;
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

// ===== Sinks and Catalogs =====

/// Remembers every reported play
#[derive(Debug, Default)]
pub struct RecordingSink {
    plays: Mutex<Vec<TrackId>>,
}

impl RecordingSink {
    pub fn plays(&self) -> Vec<TrackId> {
        self.plays.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlayEventSink for RecordingSink {
    async fn record_play(&self, id: TrackId) -> Result<()> {
        self.plays.lock().unwrap().push(id);
        Ok(())
    }
}

/// Catalog that is always unreachable
pub struct FailingCatalog;

#[async_trait]
impl TrackCatalogSource for FailingCatalog {
    async fn fetch_tracks(&self) -> Result<Vec<Track>> {
        Err(PlaybackError::Catalog("connection refused".to_string()))
    }
}

// ===== Builders =====

pub type TestController = PlaybackController<MockPrimitive, MemorySessionStore>;

pub fn create_test_track(id: u32, title: &str, album: &str) -> Track {
    Track {
        id: TrackId(id),
        title: title.to_string(),
        artists: vec!["Test Artist".to_string()],
        album: album.to_string(),
        genre: "Rock".to_string(),
        file: format!("/songs/{}.mp3", id),
        cover: format!("/covers/{}.jpg", id),
        duration: "3:00".to_string(),
    }
}

/// Three tracks, ids 1-3, all on "Side A"
pub fn three_tracks() -> Vec<Track> {
    vec![
        create_test_track(1, "Opening", "Side A"),
        create_test_track(2, "Middle", "Side A"),
        create_test_track(3, "Closing", "Side A"),
    ]
}

/// Ids 1-4; ids 1, 3 and 4 are on "North", id 2 on "South"
pub fn mixed_album_tracks() -> Vec<Track> {
    vec![
        create_test_track(1, "N1", "North"),
        create_test_track(2, "S1", "South"),
        create_test_track(3, "N2", "North"),
        create_test_track(4, "N3", "North"),
    ]
}

/// Started controller with its store and sink
pub fn started(tracks: Vec<Track>) -> (TestController, MemorySessionStore, Arc<RecordingSink>) {
    let store = MemorySessionStore::new();
    let sink = Arc::new(RecordingSink::default());
    let controller = start_with_store(tracks, store.clone(), Arc::clone(&sink));
    (controller, store, sink)
}

pub fn start_with_store(
    tracks: Vec<Track>,
    store: MemorySessionStore,
    sink: Arc<RecordingSink>,
) -> TestController {
    let mut controller =
        PlaybackController::new(MockPrimitive::new(), store, sink, PlayerConfig::default());
    controller.start_with_tracks(tracks);
    controller
}

/// Give detached report tasks a chance to run
pub async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}
