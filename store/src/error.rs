//! Error types for the record store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("cannot serialize record '{id}': {message}")]
    Serialize { id: String, message: String },

    #[error("duplicate id '{id}' in '{first}' and '{second}'")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("lexicon directory '{0}' does not exist")]
    MissingLexicon(PathBuf),
}

impl StoreError {
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

    /// The file the error is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            StoreError::Io { path, .. } | StoreError::Parse { path, .. } => Some(path.as_path()),
            StoreError::DuplicateId { second, .. } => Some(second.as_path()),
            StoreError::MissingLexicon(path) => Some(path.as_path()),
            StoreError::Serialize { .. } => None,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
