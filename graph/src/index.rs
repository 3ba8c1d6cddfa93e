//! Indexes for record lookups.

use std::collections::HashMap;

use lexis_core::LexemeRecord;

/// Id index and headword index over borrowed records.
#[derive(Debug, Default)]
pub struct RecordIndex<'a> {
    /// id -> record (first one wins; duplicate ids are rejected at load time)
    by_id: HashMap<&'a str, &'a LexemeRecord>,
    /// headword -> homonym group, in corpus order
    by_headword: HashMap<&'a str, Vec<&'a LexemeRecord>>,
}

impl<'a> RecordIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: &'a LexemeRecord) {
        self.by_id.entry(record.id.as_str()).or_insert(record);
        self.by_headword
            .entry(record.headword.as_str())
            .or_default()
            .push(record);
    }

    pub fn get(&self, id: &str) -> Option<&'a LexemeRecord> {
        self.by_id.get(id).copied()
    }

    /// All records sharing a headword.
    pub fn homonyms(&self, headword: &str) -> &[&'a LexemeRecord] {
        self.by_headword
            .get(headword)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl<'a> FromIterator<&'a LexemeRecord> for RecordIndex<'a> {
    fn from_iter<I: IntoIterator<Item = &'a LexemeRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}
