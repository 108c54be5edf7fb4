//! Error types for the organize module.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for organize operations.
pub type Result<T> = std::result::Result<T, OrganizeError>;

/// Errors that can occur while organizing a folder.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The folder to organize is missing or not a directory.
    #[error("Path does not exist or is not a directory: {}", path.display())]
    InvalidFolder { path: PathBuf },

    /// Unrecognized scope value.
    #[error("Unknown scope: {0} (expected current, subdirs or recursive)")]
    UnknownScope(String),

    /// Failed to read or create a directory.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move or copy a file.
    #[error("Failed to relocate {} to {}: {error}", source_path.display(), destination.display())]
    RelocateFailed {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Every numbered variant of a file name is already taken.
    #[error("No free destination for {name} in {} after {attempts} attempts", dir.display())]
    DestinationExhausted {
        dir: PathBuf,
        name: String,
        attempts: u32,
    },
}

impl OrganizeError {
    /// Creates an I/O error tagged with the path it happened at.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a relocation error.
    pub fn relocate_failed(
        source_path: PathBuf,
        destination: PathBuf,
        error: std::io::Error,
    ) -> Self {
        Self::RelocateFailed {
            source_path,
            destination,
            error,
        }
    }

    /// Whether this error was caused by bad input rather than the filesystem.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidFolder { .. } | Self::UnknownScope(_))
    }
}
