//! Error types for export.

use lexis_core::Diagnostics;
use lexis_store::StoreError;
use lexis_validate::ValidateError;
use thiserror::Error;

/// Errors that prevent an artifact from being written.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Load(#[from] ValidateError),

    #[error("corpus has {errors} validation errors; nothing was exported")]
    ValidationFailed {
        errors: usize,
        diagnostics: Diagnostics,
    },

    #[error("cannot serialize the export artifact: {0}")]
    Serialize(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
