//! Test support for the lexis pipeline.
//!
//! [`CorpusFixture`] builds a throwaway project directory (taxonomy, alphabet
//! and record files) that the suites under `tests/` run the real pipeline
//! against.

pub mod assertion;
pub mod fixture;

pub mod prelude {
    pub use crate::assertion::{count_of, kinds};
    pub use crate::fixture::{CorpusFixture, Fixture, DEFAULT_ALPHABET, DEFAULT_TAGS};
    pub use lexis_core::{DiagnosticKind, Layout, LexemeRecord, Severity};
}
