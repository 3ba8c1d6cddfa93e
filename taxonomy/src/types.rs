//! Taxonomy definition types.

use serde::Deserialize;
use std::fmt;

/// A recognized tag category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Grammar,
    Etymology,
    Register,
    Semantic,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Grammar,
        Category::Etymology,
        Category::Register,
        Category::Semantic,
    ];

    /// The category key as written in the taxonomy source.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Grammar => "grammar",
            Category::Etymology => "etymology",
            Category::Register => "register",
            Category::Semantic => "semantic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a tag is attached inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentLevel {
    /// Word-level `tags`.
    Entry,
    /// `definitions[i].tags`.
    Definition,
}

impl AttachmentLevel {
    /// Categories whose tags may be attached at this level.
    pub fn allowed_categories(&self) -> &'static [Category] {
        match self {
            AttachmentLevel::Entry => &[Category::Grammar, Category::Etymology, Category::Register],
            AttachmentLevel::Definition => &[Category::Semantic, Category::Register],
        }
    }

    pub fn allows(&self, category: Category) -> bool {
        self.allowed_categories().contains(&category)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttachmentLevel::Entry => "entry",
            AttachmentLevel::Definition => "definition",
        }
    }
}

/// Optional display labels for a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TagLabels {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub ru: Option<String>,
}

/// A tag definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDef {
    pub id: String,
    pub category: Category,
    pub labels: Option<TagLabels>,
}
