//! Error types for validation runs.

use lexis_alphabet::AlphabetError;
use lexis_store::StoreError;
use lexis_taxonomy::TaxonomyError;
use thiserror::Error;

/// Conditions that stop a validation run before any record is checked.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid gloss pattern: {0}")]
    Pattern(String),
}

/// Result type for validation runs.
pub type ValidateResult<T> = Result<T, ValidateError>;
