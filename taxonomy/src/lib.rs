//! Lexis Taxonomy
//!
//! The closed vocabularies of annotation tags, grouped by category, loaded from
//! a hand-maintained YAML document. A [`Taxonomy`] is immutable once built and
//! is the contract every tag in the lexicon is validated against.

mod builder;
mod source;
mod taxonomy;
mod types;

pub use builder::{TaxonomyBuilder, TaxonomyError, TaxonomyResult};
pub use taxonomy::{TagCheck, Taxonomy};
pub use types::{AttachmentLevel, Category, TagDef, TagLabels};
