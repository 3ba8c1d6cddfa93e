//! The alphabet table.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Mapping;

use crate::{AlphabetError, AlphabetResult};

/// Implicit units that collate before every letter, in this order.
pub const SEPARATORS: [&str; 2] = ["-", " "];

/// Optional metadata attached to a unit in the table source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UnitInfo {
    /// `vowel`, `consonant`, ...
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub ipa: Option<String>,
}

#[derive(Deserialize)]
struct AlphabetSource {
    alphabet: UnitsSource,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UnitsSource {
    List(Vec<String>),
    Table(Mapping),
}

/// Ordered orthographic units.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// Letters in collation order (separators excluded).
    units: Vec<String>,
    info: HashMap<String, UnitInfo>,
    /// Collation rank of every unit, separators included.
    ranks: HashMap<String, u32>,
    /// Length in chars of the longest unit.
    longest: usize,
}

impl Alphabet {
    /// Build an alphabet from units in collation order.
    pub fn new<I, S>(units: I) -> AlphabetResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(
            units
                .into_iter()
                .map(|u| (u.into(), UnitInfo::default()))
                .collect(),
        )
    }

    fn from_entries(entries: Vec<(String, UnitInfo)>) -> AlphabetResult<Self> {
        if entries.is_empty() {
            return Err(AlphabetError::Empty);
        }

        let mut ranks: HashMap<String, u32> = HashMap::new();
        for (rank, sep) in SEPARATORS.iter().enumerate() {
            ranks.insert(sep.to_string(), rank as u32);
        }

        let mut units = Vec::with_capacity(entries.len());
        let mut info = HashMap::new();
        let mut longest = 1;
        for (unit, unit_info) in entries {
            if unit.is_empty() {
                return Err(AlphabetError::malformed("empty orthographic unit"));
            }
            if unit.to_lowercase() != unit {
                return Err(AlphabetError::NotLowercase(unit));
            }
            if ranks.contains_key(&unit) {
                return Err(AlphabetError::DuplicateUnit(unit));
            }
            ranks.insert(unit.clone(), ranks.len() as u32);
            longest = longest.max(unit.chars().count());
            info.insert(unit.clone(), unit_info);
            units.push(unit);
        }

        Ok(Self {
            units,
            info,
            ranks,
            longest,
        })
    }

    /// Load an alphabet table from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> AlphabetResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| AlphabetError::io(path, e))?;
        let alphabet = Self::from_yaml_str(&source)?;
        tracing::debug!(path = %path.display(), units = alphabet.units.len(), "loaded alphabet");
        Ok(alphabet)
    }

    /// Parse an alphabet table from YAML text. `alphabet:` is either a list of
    /// units or a mapping of unit to `{ type, ipa }`.
    pub fn from_yaml_str(source: &str) -> AlphabetResult<Self> {
        let doc: AlphabetSource =
            serde_yaml::from_str(source).map_err(|e| AlphabetError::malformed(e.to_string()))?;
        match doc.alphabet {
            UnitsSource::List(units) => Self::new(units),
            UnitsSource::Table(table) => {
                let mut entries = Vec::with_capacity(table.len());
                for (key, value) in table {
                    let unit = key
                        .as_str()
                        .ok_or_else(|| AlphabetError::malformed("units must be strings"))?
                        .to_string();
                    let info: Option<UnitInfo> = serde_yaml::from_value(value)
                        .map_err(|e| AlphabetError::malformed(format!("unit '{}': {}", unit, e)))?;
                    entries.push((unit, info.unwrap_or_default()));
                }
                Self::from_entries(entries)
            }
        }
    }

    /// Letters in collation order.
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Collation rank of a unit (separators rank first).
    pub fn rank(&self, unit: &str) -> Option<u32> {
        self.ranks.get(unit).copied()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.ranks.contains_key(unit)
    }

    pub fn info(&self, unit: &str) -> Option<&UnitInfo> {
        self.info.get(unit)
    }

    /// Find the longest registered unit at the start of `rest`.
    pub(crate) fn longest_match(&self, rest: &[char]) -> Option<(&str, usize)> {
        let max = self.longest.min(rest.len());
        (1..=max).rev().find_map(|len| {
            let candidate: String = rest[..len].iter().collect();
            self.ranks
                .get_key_value(candidate.as_str())
                .map(|(unit, _)| (unit.as_str(), len))
        })
    }
}
