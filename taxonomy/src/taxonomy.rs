//! The Taxonomy - immutable tag lookup.

use std::collections::{BTreeMap, HashMap};

use crate::{AttachmentLevel, Category, TagDef, TagLabels};

/// Result of checking a tag against an attachment level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCheck {
    Allowed(Category),
    /// The tag exists, but its category is not legal at this level.
    Misplaced(Category),
    Unknown,
}

/// Category -> ordered tag ids, plus a reverse index tag -> definition.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Taxonomy {
    /// Tag ids per category, in source order.
    categories: BTreeMap<Category, Vec<String>>,
    /// Tag definitions by id.
    tags: HashMap<String, TagDef>,
}

impl Taxonomy {
    /// Create a taxonomy (use TaxonomyBuilder for construction).
    pub(crate) fn new(
        categories: BTreeMap<Category, Vec<String>>,
        tags: HashMap<String, TagDef>,
    ) -> Self {
        Self { categories, tags }
    }

    /// Get a tag definition by id.
    pub fn get(&self, tag: &str) -> Option<&TagDef> {
        self.tags.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// The category a tag belongs to.
    pub fn category_of(&self, tag: &str) -> Option<Category> {
        self.tags.get(tag).map(|def| def.category)
    }

    /// Tag ids of a category, in source order.
    pub fn tags_in(&self, category: Category) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Display labels of a tag, if the source provided them.
    pub fn label(&self, tag: &str) -> Option<&TagLabels> {
        self.tags.get(tag).and_then(|def| def.labels.as_ref())
    }

    /// Check whether a tag may be attached at a level.
    pub fn check(&self, tag: &str, level: AttachmentLevel) -> TagCheck {
        match self.category_of(tag) {
            Some(category) if level.allows(category) => TagCheck::Allowed(category),
            Some(category) => TagCheck::Misplaced(category),
            None => TagCheck::Unknown,
        }
    }

    /// Total number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
