//! Cadence Backend Client
//!
//! HTTP client for the Cadence streaming backend.
//!
//! # Features
//!
//! - **Catalog**: fetch the full song list (`GET /api/songs`)
//! - **Play counts**: report a play (`POST /api/songs/play`)
//!
//! [`CadenceClient`] implements both [`cadence_playback::TrackCatalogSource`]
//! and [`cadence_playback::PlayEventSink`], so one client can be handed to a
//! `PlaybackController` for both roles.
//!
//! # Example
//!
//! ```ignore
//! use cadence_client::{CadenceClient, ClientConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(CadenceClient::new(ClientConfig::new("http://localhost:3000"))?);
//!
//!     let songs = client.fetch_songs().await?;
//!     println!("Found {} songs", songs.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod playback;
mod types;

pub use client::CadenceClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, PlayReport};
