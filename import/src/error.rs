//! Error types for the importer.

use std::path::PathBuf;

use lexis_ident::IdError;
use lexis_store::StoreError;
use thiserror::Error;

/// Errors that abort an import. Nothing is written when planning fails.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read source '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse source '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("source record #{index} has no headword")]
    MissingHeadword { index: usize },

    #[error("source record #{index}: {source}")]
    Id { index: usize, source: IdError },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ImportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
