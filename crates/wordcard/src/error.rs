//! Error types for the Wordcard library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Wordcard operations.
///
/// Curation itself never fails; these errors come from the collaborators
/// around it (record storage, image search, media download).
#[derive(Debug, Error)]
pub enum WordcardError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure saving or loading a curated document.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Rank outside of the dictionary.
    #[error("Rank {rank} out of range (dictionary has {total} records)")]
    RankOutOfRange { rank: u32, total: usize },

    /// Ranks are 1-based.
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    /// A selection path that does not address an item of the record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Image search request failed.
    #[error("Image search error: {0}")]
    ImageSearch(String),

    /// Media download failed.
    #[error("Download error: {0}")]
    Download(String),

    /// Decoding or encoding of a downloaded picture failed.
    #[error("Image error: {0}")]
    Image(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Wordcard operations.
pub type Result<T> = std::result::Result<T, WordcardError>;
