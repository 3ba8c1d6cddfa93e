//! Lexis Core Types
//!
//! This crate provides the foundational types used throughout the lexicon pipeline:
//! - The lexeme record model (records, definitions, examples, forms)
//! - Cross-reference targets (plain headwords and reconstructed roots)
//! - Diagnostics with severities and field paths
//! - The on-disk project layout

mod diagnostic;
mod layout;
mod path;
mod record;
mod reference;

pub use diagnostic::*;
pub use layout::*;
pub use path::*;
pub use record::*;
pub use reference::*;
