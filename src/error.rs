//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for acromatch library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the matcher: scanning a corpus, reading
/// configuration and serializing output. Matching itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The corpus root does not exist or is not a directory.
    #[error("Search root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}
