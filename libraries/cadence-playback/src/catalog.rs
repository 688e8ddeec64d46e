//! Track catalog source

use crate::error::Result;
use crate::types::Track;
use async_trait::async_trait;

/// Supplies the ordered track list, fetched once at startup
#[async_trait]
pub trait TrackCatalogSource: Send + Sync {
    /// Fetch every track in catalog order
    async fn fetch_tracks(&self) -> Result<Vec<Track>>;
}

/// Fixed, in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tracks: Vec<Track>,
}

impl StaticCatalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

#[async_trait]
impl TrackCatalogSource for StaticCatalog {
    async fn fetch_tracks(&self) -> Result<Vec<Track>> {
        Ok(self.tracks.clone())
    }
}
