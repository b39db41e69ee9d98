use std::path::PathBuf;

use thiserror::Error;

/// Error type for reading a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No file at the given path
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON or the dependency fields are malformed
    #[error("Invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
