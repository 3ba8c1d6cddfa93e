//! TaxonomyBuilder for constructing an immutable Taxonomy.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use thiserror::Error;

use crate::{Category, TagDef, TagLabels, Taxonomy};

/// Errors that can occur while loading or building a taxonomy.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed taxonomy source: {0}")]
    Malformed(String),

    #[error("unknown tag category: {0}")]
    UnknownCategory(String),

    #[error("tag '{tag}' appears in both '{first}' and '{second}'")]
    AmbiguousTag {
        tag: String,
        first: Category,
        second: Category,
    },

    #[error("tag '{tag}' is listed twice in '{category}'")]
    DuplicateTag { tag: String, category: Category },
}

impl TaxonomyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

/// Result type for taxonomy operations.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

/// Builder for constructing an immutable Taxonomy.
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    categories: BTreeMap<Category, Vec<String>>,
    tags: HashMap<String, TagDef>,
}

impl TaxonomyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag without labels.
    pub fn add_tag(&mut self, category: Category, id: impl Into<String>) -> TaxonomyResult<()> {
        self.add_labeled_tag(category, id, None)
    }

    /// Add a tag, rejecting ids already present in any category.
    pub fn add_labeled_tag(
        &mut self,
        category: Category,
        id: impl Into<String>,
        labels: Option<TagLabels>,
    ) -> TaxonomyResult<()> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TaxonomyError::malformed(format!(
                "empty tag id in '{}'",
                category
            )));
        }

        if let Some(existing) = self.tags.get(&id) {
            return Err(if existing.category == category {
                TaxonomyError::DuplicateTag { tag: id, category }
            } else {
                TaxonomyError::AmbiguousTag {
                    tag: id,
                    first: existing.category,
                    second: category,
                }
            });
        }

        self.categories.entry(category).or_default().push(id.clone());
        self.tags.insert(
            id.clone(),
            TagDef {
                id,
                category,
                labels,
            },
        );
        Ok(())
    }

    /// Build the immutable Taxonomy.
    pub fn build(self) -> Taxonomy {
        Taxonomy::new(self.categories, self.tags)
    }
}
