//! The lexeme record model.
//!
//! One [`LexemeRecord`] is stored per headword file. Field names here are the
//! internal names used by both the per-record documents and the export artifact.

use serde::{Deserialize, Serialize};

use crate::RefField;

/// Languages carried by bilingual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lang {
    En,
    Ru,
}

impl Lang {
    /// All supported languages, in display order.
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ru];

    /// The short code used as the field name.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }
}

/// A value given in one or both languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bilingual<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ru: Option<T>,
}

impl<T> Default for Bilingual<T> {
    fn default() -> Self {
        Self { en: None, ru: None }
    }
}

impl<T> Bilingual<T> {
    /// Create an empty value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a value with only the English side set.
    pub fn english(value: T) -> Self {
        Self {
            en: Some(value),
            ru: None,
        }
    }

    /// Get the value for a language.
    pub fn get(&self, lang: Lang) -> Option<&T> {
        match lang {
            Lang::En => self.en.as_ref(),
            Lang::Ru => self.ru.as_ref(),
        }
    }

    /// Set the value for a language.
    pub fn set(&mut self, lang: Lang, value: T) {
        match lang {
            Lang::En => self.en = Some(value),
            Lang::Ru => self.ru = Some(value),
        }
    }

    /// Returns true if neither language is present.
    pub fn is_empty(&self) -> bool {
        self.en.is_none() && self.ru.is_none()
    }
}

/// Bilingual free text (translations, notes, etymologies).
pub type Text = Bilingual<String>;

/// Bilingual search synonyms.
pub type Aliases = Bilingual<Vec<String>>;

impl Text {
    /// Languages that carry non-blank text.
    pub fn languages(&self) -> Vec<Lang> {
        Lang::ALL
            .into_iter()
            .filter(|lang| self.get(*lang).is_some_and(|s| !s.trim().is_empty()))
            .collect()
    }
}

impl Aliases {
    /// Languages that carry at least one alias.
    pub fn languages(&self) -> Vec<Lang> {
        Lang::ALL
            .into_iter()
            .filter(|lang| self.get(*lang).is_some_and(|list| !list.is_empty()))
            .collect()
    }
}

/// An inflected form with its gloss code (e.g. `obl`, `pl.erg`, `ipfv,pfv`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Form {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
}

/// A dialectal variant spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Variant {
    #[serde(default)]
    pub text: String,
}

/// A usage example with its translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Example {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<Text>,
}

/// One sense of a lexeme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Definition {
    #[serde(default)]
    pub translation: Text,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Aliases>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

/// A lexicon entry: one headword and everything known about it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexemeRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub headword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<Form>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived_from: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
}

impl LexemeRecord {
    /// Create a record with an id and headword and nothing else.
    pub fn new(id: impl Into<String>, headword: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headword: headword.into(),
            ..Self::default()
        }
    }

    /// All outgoing cross-references as (field, position, raw target).
    pub fn references(&self) -> impl Iterator<Item = (RefField, usize, &str)> + '_ {
        let derived = self
            .derived_from
            .iter()
            .enumerate()
            .map(|(i, t)| (RefField::DerivedFrom, i, t.as_str()));
        let see_also = self
            .see_also
            .iter()
            .enumerate()
            .map(|(i, t)| (RefField::SeeAlso, i, t.as_str()));
        derived.chain(see_also)
    }
}
