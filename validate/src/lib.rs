//! Lexis Validate
//!
//! Record and corpus validation.
//!
//! [`SchemaValidator`] checks one record against the structural contract and
//! the taxonomy. It never fails on content: every problem becomes a
//! [`Diagnostic`](lexis_core::Diagnostic) so one pass reports all of them.
//! [`validate_corpus`] adds the reference graph and file identity checks for a
//! whole lexicon.

mod corpus;
mod error;
mod gloss;
mod schema;

pub use corpus::{validate_corpus, Project, ValidationReport};
pub use error::{ValidateError, ValidateResult};
pub use gloss::GlossChecker;
pub use schema::SchemaValidator;
