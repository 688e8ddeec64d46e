//! Controller-facing trait implementations.

use crate::client::CadenceClient;
use async_trait::async_trait;
use cadence_playback::{PlayEventSink, PlaybackError, Track, TrackCatalogSource, TrackId};

#[async_trait]
impl TrackCatalogSource for CadenceClient {
    async fn fetch_tracks(&self) -> cadence_playback::Result<Vec<Track>> {
        self.fetch_songs()
            .await
            .map_err(|e| PlaybackError::Catalog(e.to_string()))
    }
}

#[async_trait]
impl PlayEventSink for CadenceClient {
    async fn record_play(&self, id: TrackId) -> cadence_playback::Result<()> {
        self.report_play(id)
            .await
            .map_err(|e| PlaybackError::Report(e.to_string()))
    }
}
