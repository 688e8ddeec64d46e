//! Fire-and-forget play reporting
//!
//! Reports run on detached tasks. The controller never awaits them and their
//! failures only reach the log.

use crate::error::Result;
use crate::types::TrackId;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Receives "track played" notifications
#[async_trait]
pub trait PlayEventSink: Send + Sync {
    /// Record one play of `id`
    async fn record_play(&self, id: TrackId) -> Result<()>;
}

/// Sink that drops every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

#[async_trait]
impl PlayEventSink for NullSink {
    async fn record_play(&self, _id: TrackId) -> Result<()> {
        Ok(())
    }
}

/// Spawns one detached task per report
#[derive(Clone)]
pub(crate) struct PlayReporter {
    sink: Arc<dyn PlayEventSink>,
}

impl PlayReporter {
    pub(crate) fn new(sink: Arc<dyn PlayEventSink>) -> Self {
        Self { sink }
    }

    /// Report a play without waiting for the outcome
    ///
    /// Outside a tokio runtime the report is dropped.
    pub(crate) fn report(&self, id: TrackId) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!(track_id = %id, "No runtime available, play report dropped");
            return;
        };

        let sink = Arc::clone(&self.sink);
        handle.spawn(async move {
            if let Err(e) = sink.record_play(id).await {
                warn!(track_id = %id, error = %e, "Failed to report play");
            }
        });
    }
}

impl std::fmt::Debug for PlayReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayReporter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        plays: Mutex<Vec<TrackId>>,
        fail: bool,
    }

    #[async_trait]
    impl PlayEventSink for RecordingSink {
        async fn record_play(&self, id: TrackId) -> Result<()> {
            self.plays.lock().unwrap().push(id);
            if self.fail {
                return Err(PlaybackError::Report("offline".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn report_without_runtime_is_dropped() {
        let sink = Arc::new(RecordingSink::default());
        let reporter = PlayReporter::new(sink.clone());

        reporter.report(TrackId(1));

        assert!(sink.plays.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn report_runs_on_detached_task() {
        let sink = Arc::new(RecordingSink::default());
        let reporter = PlayReporter::new(sink.clone());

        reporter.report(TrackId(7));
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        assert_eq!(*sink.plays.lock().unwrap(), vec![TrackId(7)]);
    }

    #[tokio::test]
    async fn failed_report_is_swallowed() {
        let sink = Arc::new(RecordingSink {
            fail: true,
            ..Default::default()
        });
        let reporter = PlayReporter::new(sink.clone());

        reporter.report(TrackId(2));
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        assert_eq!(sink.plays.lock().unwrap().len(), 1);
    }
}
