//! Homonym-aware id assignment.

use std::collections::HashMap;

use crate::{homonym_suffix, slug, suffixed, IdError, IdResult};

/// Tracks ids in use and the highest homonym suffix per headword.
#[derive(Debug, Clone, Default)]
pub struct IdAssigner {
    /// id -> headword of the record that owns it
    owners: HashMap<String, String>,
    /// headword -> highest homonym suffix seen (1 = bare slug)
    highest: HashMap<String, u32>,
}

impl IdAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from existing `(id, headword)` pairs.
    pub fn from_existing<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut assigner = Self::new();
        for (id, headword) in records {
            assigner.register(id, headword);
        }
        assigner
    }

    /// Record that `id` is taken by a record with `headword`.
    pub fn register(&mut self, id: &str, headword: &str) {
        let suffix = slug(headword)
            .ok()
            .and_then(|base| homonym_suffix(id, &base))
            .unwrap_or(1);
        let highest = self.highest.entry(headword.to_string()).or_insert(0);
        *highest = (*highest).max(suffix);
        self.owners.insert(id.to_string(), headword.to_string());
    }

    /// The id a new record with `headword` would receive, without taking it.
    pub fn candidate(&self, headword: &str) -> IdResult<String> {
        let base = slug(headword)?;
        let id = match self.highest.get(headword) {
            None => base,
            Some(n) => suffixed(&base, n + 1),
        };
        if let Some(owner) = self.owners.get(&id) {
            return Err(IdError::Collision {
                id,
                headword: headword.to_string(),
                owner: owner.clone(),
            });
        }
        Ok(id)
    }

    /// Assign and take the next id for `headword`.
    pub fn assign(&mut self, headword: &str) -> IdResult<String> {
        let id = self.candidate(headword)?;
        self.register(&id, headword);
        tracing::debug!(headword, id = %id, "assigned id");
        Ok(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.owners.contains_key(id)
    }

    /// Headwords with more than one record.
    pub fn homonym_headwords(&self) -> impl Iterator<Item = &str> {
        self.highest
            .iter()
            .filter(|(_, n)| **n > 1)
            .map(|(headword, _)| headword.as_str())
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Produce the id for a new record given the `(id, headword)` pairs already in
/// the corpus.
pub fn assign<'a, I>(headword: &str, existing: I) -> IdResult<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    IdAssigner::from_existing(existing).candidate(headword)
}
