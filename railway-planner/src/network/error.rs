//! Network loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading a network description.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The network file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid network description
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stop other than the last on its route has no distance to the next stop
    #[error("route {route}: stop {station} has no distance to the next stop")]
    MissingDistance { route: String, station: String },

    /// A stop carries a negative distance
    #[error("route {route}: stop {station} has a negative distance")]
    NegativeDistance { route: String, station: String },
}
