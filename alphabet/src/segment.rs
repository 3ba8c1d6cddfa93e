//! Longest-match segmentation into orthographic units.

use std::fmt;

use crate::Alphabet;

/// Combining acute accent used as a stress mark in headwords.
const STRESS_MARK: char = '\u{0301}';

/// Lowercase a word and drop stress marks.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| *c != STRESS_MARK)
        .collect()
}

/// One segment of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grapheme<'a> {
    /// A registered unit (letter, digraph, trigraph or separator).
    Unit(&'a str),
    /// A character that starts no registered unit.
    Unknown(char),
}

impl Grapheme<'_> {
    pub fn is_unit(&self) -> bool {
        matches!(self, Grapheme::Unit(_))
    }
}

impl fmt::Display for Grapheme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grapheme::Unit(unit) => f.write_str(unit),
            Grapheme::Unknown(c) => write!(f, "{}", c),
        }
    }
}

impl Alphabet {
    /// Split a word into units, always taking the longest registered unit.
    pub fn segment<'a>(&'a self, word: &str) -> Vec<Grapheme<'a>> {
        let chars: Vec<char> = normalize(word).chars().collect();
        let mut graphemes = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            match self.longest_match(&chars[i..]) {
                Some((unit, len)) => {
                    graphemes.push(Grapheme::Unit(unit));
                    i += len;
                }
                None => {
                    graphemes.push(Grapheme::Unknown(chars[i]));
                    i += 1;
                }
            }
        }
        graphemes
    }

    /// The first unit of a headword; this is its grouping unit.
    pub fn leading_unit<'a>(&'a self, headword: &str) -> Option<Grapheme<'a>> {
        self.segment(headword).into_iter().next()
    }
}
