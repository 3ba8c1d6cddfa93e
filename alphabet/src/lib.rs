//! Lexis Alphabet
//!
//! The ordered table of orthographic units (letters, digraphs, trigraphs) and
//! the operations built on it:
//! - longest-match segmentation of a headword into units
//! - collation by unit position in the table rather than by code point
//! - stress marks carried over from IPA through the vowel units

mod alphabet;
mod collation;
mod error;
mod segment;
mod stress;

pub use alphabet::{Alphabet, UnitInfo, SEPARATORS};
pub use collation::{CollationKey, Rank};
pub use error::{AlphabetError, AlphabetResult};
pub use segment::{normalize, Grapheme};
