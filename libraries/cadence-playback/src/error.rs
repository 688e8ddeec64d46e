//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Index outside the current playlist
    #[error("Index out of bounds: {index} (playlist length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Playlist has no tracks
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Primitive has not reported a usable duration yet
    #[error("Track metadata not loaded yet")]
    MetadataNotReady,

    /// A shuffle animation is still running
    #[error("Shuffle already in progress")]
    ShuffleInProgress,

    /// No shuffle was started
    #[error("No shuffle pending")]
    NoShufflePending,

    /// Track id not present in the playlist or album
    #[error("Track not found: {0}")]
    TrackNotFound(crate::types::TrackId),

    /// Session store error
    #[error("Session store error: {0}")]
    Session(String),

    /// Catalog source error
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Play reporting error
    #[error("Play report failed: {0}")]
    Report(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a playback primitive
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// Host refused to start playback without a user gesture
    #[error("Playback blocked by autoplay policy")]
    AutoplayBlocked,

    /// Backend failure
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
