//! Error types for id assignment.

use thiserror::Error;

/// Errors that can occur while deriving an id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("headword is empty")]
    EmptyHeadword,

    #[error("headword '{headword}' contains '{ch}', which cannot appear in an id")]
    InvalidCharacter { headword: String, ch: char },

    #[error(
        "id '{id}' for '{headword}' is already used by '{owner}'; headwords that differ only \
         in case or stress share a slug, so align the spelling or disambiguate by hand"
    )]
    Collision {
        id: String,
        headword: String,
        owner: String,
    },
}

/// Result type for id operations.
pub type IdResult<T> = Result<T, IdError>;
