//! Alphabet error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an alphabet table.
#[derive(Debug, Error)]
pub enum AlphabetError {
    #[error("failed to read alphabet '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed alphabet source: {0}")]
    Malformed(String),

    #[error("alphabet table is empty")]
    Empty,

    #[error("orthographic unit '{0}' is listed twice")]
    DuplicateUnit(String),

    #[error("orthographic unit '{0}' must be lowercase")]
    NotLowercase(String),
}

impl AlphabetError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

/// Result type for alphabet operations.
pub type AlphabetResult<T> = Result<T, AlphabetError>;
