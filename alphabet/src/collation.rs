//! Collation by alphabet position.

use std::cmp::Ordering;

use crate::{Alphabet, Grapheme};

/// Position of one segment in the collation sequence. Registered units sort
/// by table position; unknown characters sort after every unit, by code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Unit(u32),
    Unknown(char),
}

/// Sort key of a word: its unit ranks, compared element by element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollationKey(Vec<Rank>);

impl CollationKey {
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
}

impl Alphabet {
    /// Compute the sort key of a word.
    pub fn collation_key(&self, word: &str) -> CollationKey {
        CollationKey(
            self.segment(word)
                .into_iter()
                .map(|g| match g {
                    Grapheme::Unit(unit) => self.rank(unit).map_or(Rank::Unknown('\u{FFFF}'), Rank::Unit),
                    Grapheme::Unknown(c) => Rank::Unknown(c),
                })
                .collect(),
        )
    }

    /// Compare two words by alphabet order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collation_key(a).cmp(&self.collation_key(b))
    }
}
