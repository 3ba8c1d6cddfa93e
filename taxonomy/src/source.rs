//! Loading a taxonomy from its YAML source.
//!
//! Each top-level key is a category. A category is either a list of tag ids or
//! a mapping of tag id to optional `{ en, ru }` labels:
//!
//! ```yaml
//! grammar:
//!   n: { en: noun, ru: сущ. }
//!   v: { en: verb, ru: глаг. }
//! semantic: [animal, bird, kinship]
//! ```

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::{Category, TagLabels, Taxonomy, TaxonomyBuilder, TaxonomyError, TaxonomyResult};

impl Taxonomy {
    /// Load a taxonomy from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> TaxonomyResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| TaxonomyError::io(path, e))?;
        let taxonomy = Self::from_yaml_str(&source)?;
        tracing::debug!(path = %path.display(), tags = taxonomy.len(), "loaded taxonomy");
        Ok(taxonomy)
    }

    /// Parse a taxonomy from YAML text.
    pub fn from_yaml_str(source: &str) -> TaxonomyResult<Self> {
        let doc: Value =
            serde_yaml::from_str(source).map_err(|e| TaxonomyError::malformed(e.to_string()))?;
        let Value::Mapping(doc) = doc else {
            return Err(TaxonomyError::malformed(
                "expected a mapping of category name to tags",
            ));
        };

        let mut builder = TaxonomyBuilder::new();
        for (key, body) in doc {
            let name = key
                .as_str()
                .ok_or_else(|| TaxonomyError::malformed("category names must be strings"))?;
            let category = Category::from_name(name)
                .ok_or_else(|| TaxonomyError::UnknownCategory(name.to_string()))?;
            load_category(&mut builder, category, body)?;
        }
        Ok(builder.build())
    }
}

fn load_category(
    builder: &mut TaxonomyBuilder,
    category: Category,
    body: Value,
) -> TaxonomyResult<()> {
    match body {
        Value::Null => Ok(()),
        Value::Sequence(items) => {
            for item in items {
                let id = tag_id(category, &item)?;
                builder.add_tag(category, id)?;
            }
            Ok(())
        }
        Value::Mapping(entries) => load_labeled(builder, category, entries),
        _ => Err(TaxonomyError::malformed(format!(
            "category '{}' must be a list or a mapping",
            category
        ))),
    }
}

fn load_labeled(
    builder: &mut TaxonomyBuilder,
    category: Category,
    entries: Mapping,
) -> TaxonomyResult<()> {
    for (key, labels) in entries {
        let id = tag_id(category, &key)?;
        let labels: Option<TagLabels> = serde_yaml::from_value(labels).map_err(|e| {
            TaxonomyError::malformed(format!("labels of '{}' in '{}': {}", id, category, e))
        })?;
        builder.add_labeled_tag(category, id, labels)?;
    }
    Ok(())
}

fn tag_id(category: Category, value: &Value) -> TaxonomyResult<String> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        TaxonomyError::malformed(format!("non-string tag id in '{}': {:?}", category, value))
    })
}
