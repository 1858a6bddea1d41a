/// Fatal error taxonomy.
///
/// Only conditions that must abort the process live here. Per-entry
/// failures (stat errors, unreadable link targets, bad timestamps) are
/// logged and swallowed inside the walker and never become a `ScanError`.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory '{0}' not found")]
    NotFound(PathBuf),

    #[error("Not a directory or symlink to a directory: '{0}'")]
    NotADirectory(PathBuf),

    #[error("Cannot access root directory '{path}': {source}")]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to standard output: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("Failed to serialise scan report: {0}")]
    Serialize(#[from] serde_json::Error),
}
