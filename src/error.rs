//! Error types.
//!
//! Note recognition itself never fails (rejected tokens pass through), so
//! these cover table loading and the file-level batch operations only.

use std::path::PathBuf;

use thiserror::Error;

/// Fingering table source is missing data or malformed. Always fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Fingering table is empty")]
    Empty,

    #[error("Invalid note key '{0}'")]
    InvalidKey(String),

    #[error("Invalid fingering pattern for '{key}': '{pattern}' (expected 6 digits of 0/1/2)")]
    InvalidPattern { key: String, pattern: String },

    #[error("Label for '{0}' must be a string")]
    InvalidLabel(String),

    #[error("No label for '{0}'")]
    MissingLabel(String),

    #[error("Label '{0}' has no fingering")]
    OrphanLabel(String),

    #[error("Malformed table source: {0}")]
    Source(String),
}

/// Top-level library error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid UTF-8", path.display())]
    Utf8 { path: PathBuf },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
