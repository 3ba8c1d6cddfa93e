//! Lexis Graph
//!
//! Cross-record references. [`ReferenceGraph`] indexes a corpus by id and by
//! headword, then resolves every `derived_from` / `see_also` target. It is
//! rebuilt from the records on every run and never mutated afterwards.

mod graph;
mod index;

pub use graph::{Edge, ReferenceGraph, Resolution};
pub use index::RecordIndex;
