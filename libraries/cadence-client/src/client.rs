//! Main Cadence backend client.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, PlayReport};
use cadence_playback::{Track, TrackId};
use reqwest::{Client, Response};
use tracing::{debug, info};
use url::Url;

/// Client for the song catalog and play-count endpoints.
///
/// # Example
///
/// ```ignore
/// use cadence_client::{CadenceClient, ClientConfig};
///
/// let client = CadenceClient::new(ClientConfig::new("https://music.example.com"))?;
/// let songs = client.fetch_songs().await?;
/// client.report_play(songs[0].id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CadenceClient {
    http: Client,
    base_url: String,
}

impl CadenceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Cadence/{} (CLI)", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Normalized base URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full song catalog.
    pub async fn fetch_songs(&self) -> Result<Vec<Track>> {
        let url = format!("{}/api/songs", self.base_url);
        debug!(url = %url, "Fetching song catalog");

        let response = self.http.get(&url).send().await.map_err(unreachable_or)?;
        let response = check_status(response).await?;

        let songs: Vec<Track> = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse song catalog: {}", e))
        })?;

        info!(count = songs.len(), "Fetched song catalog");
        Ok(songs)
    }

    /// Record one play of `id`.
    ///
    /// The response body is ignored.
    pub async fn report_play(&self, id: TrackId) -> Result<()> {
        let url = format!("{}/api/songs/play", self.base_url);
        debug!(url = %url, track_id = %id, "Reporting play");

        let response = self
            .http
            .post(&url)
            .json(&PlayReport { song_id: id.get() })
            .send()
            .await
            .map_err(unreachable_or)?;
        check_status(response).await?;

        Ok(())
    }
}

fn unreachable_or(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ClientError::ServerError {
        status: status.as_u16(),
        message,
    })
}
