//! Cross-reference targets.
//!
//! `derived_from` and `see_also` hold plain headword strings, or reconstructed
//! roots written with a leading `*` that never need to resolve.

use std::fmt;

/// Marker prefix for a reconstructed (unattested) root.
pub const RECONSTRUCTED_MARKER: char = '*';

/// The record field a reference was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefField {
    DerivedFrom,
    SeeAlso,
}

impl RefField {
    /// The field name as it appears in record documents.
    pub fn name(&self) -> &'static str {
        match self {
            RefField::DerivedFrom => "derived_from",
            RefField::SeeAlso => "see_also",
        }
    }
}

impl fmt::Display for RefField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed reference target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RefTarget {
    /// A headword expected to exist in the corpus.
    Headword(String),
    /// A reconstructed root (stored without the marker).
    Reconstructed(String),
}

/// Why a raw reference string is not a usable target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefSyntaxError {
    Empty,
    BareMarker,
    MisplacedMarker,
    SurroundingWhitespace,
}

impl fmt::Display for RefSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RefSyntaxError::Empty => "reference is empty",
            RefSyntaxError::BareMarker => "reconstructed-root marker '*' has no root after it",
            RefSyntaxError::MisplacedMarker => {
                "'*' may only appear as the first character (reconstructed root)"
            }
            RefSyntaxError::SurroundingWhitespace => "reference has leading or trailing whitespace",
        };
        f.write_str(msg)
    }
}

impl RefTarget {
    /// Parse a raw reference string.
    pub fn parse(raw: &str) -> Result<Self, RefSyntaxError> {
        if raw.is_empty() {
            return Err(RefSyntaxError::Empty);
        }
        if raw.trim() != raw {
            return Err(RefSyntaxError::SurroundingWhitespace);
        }
        match raw.strip_prefix(RECONSTRUCTED_MARKER) {
            Some("") => Err(RefSyntaxError::BareMarker),
            Some(root) if root.contains(RECONSTRUCTED_MARKER) => {
                Err(RefSyntaxError::MisplacedMarker)
            }
            Some(root) => Ok(RefTarget::Reconstructed(root.to_string())),
            None if raw.contains(RECONSTRUCTED_MARKER) => Err(RefSyntaxError::MisplacedMarker),
            None => Ok(RefTarget::Headword(raw.to_string())),
        }
    }

    /// Returns true for reconstructed roots.
    pub fn is_reconstructed(&self) -> bool {
        matches!(self, RefTarget::Reconstructed(_))
    }
}

impl fmt::Display for RefTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefTarget::Headword(h) => f.write_str(h),
            RefTarget::Reconstructed(r) => write!(f, "{}{}", RECONSTRUCTED_MARKER, r),
        }
    }
}
