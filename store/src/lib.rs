//! Lexis Store
//!
//! The one-record-per-file authoring layout: `<lexicon>/<unit>/<id>.yaml`.
//!
//! Loading a [`Corpus`] is all-or-nothing. An unparseable document or two files
//! declaring the same id abort the load with the offending paths. Every write
//! goes through a temporary file in the target directory that is renamed into
//! place, so an interrupted run never leaves a truncated file behind.

mod corpus;
mod error;
mod io;

pub use corpus::{Corpus, CorpusEntry};
pub use error::{StoreError, StoreResult};
pub use io::{read_record, render_record, write_atomic, write_new, write_record, WriteOutcome};
