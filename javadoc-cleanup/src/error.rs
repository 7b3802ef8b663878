//! Error types for page editing and directory walking

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a cleanup run
#[derive(Error, Debug)]
pub enum CleanupError {
    /// A page could not be opened, read, or written
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// The page being processed
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The documentation tree could not be traversed
    #[error("Failed to walk documentation tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// A page carries the javadoc generator comment but has no `<head>` line
    #[error("Generator comment found but no <head> line in {}", .path.display())]
    MissingHead {
        /// The offending page
        path: PathBuf,
    },
}

impl CleanupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
