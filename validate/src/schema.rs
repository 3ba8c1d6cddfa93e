//! Per-record structural and taxonomic checks.

use lexis_core::{
    Definition, Diagnostic, DiagnosticKind, Diagnostics, Example, FieldPath, Form, LexemeRecord,
    RefTarget,
};
use lexis_taxonomy::{AttachmentLevel, TagCheck, Taxonomy};

use crate::{GlossChecker, ValidateResult};

/// Validates single records against the taxonomy and the record shape.
#[derive(Debug, Clone)]
pub struct SchemaValidator<'t> {
    taxonomy: &'t Taxonomy,
    gloss: GlossChecker,
}

impl<'t> SchemaValidator<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> ValidateResult<Self> {
        Ok(Self {
            taxonomy,
            gloss: GlossChecker::new()?,
        })
    }

    /// Check one record. Every finding is returned; nothing short-circuits.
    pub fn validate(&self, record: &LexemeRecord) -> Diagnostics {
        let mut out = Diagnostics::new();
        let root = FieldPath::root();

        if record.id.trim().is_empty() {
            out.push(missing(root.field("id"), "record has no id"));
        }
        if record.headword.trim().is_empty() {
            out.push(missing(root.field("headword"), "record has no headword"));
        }

        self.check_tags(&record.tags, AttachmentLevel::Entry, &root, &mut out);

        for (i, form) in record.forms.iter().enumerate() {
            self.check_form(form, &root.field("forms").index(i), &mut out);
        }
        for (i, variant) in record.variants.iter().enumerate() {
            if variant.text.trim().is_empty() {
                out.push(missing(
                    root.field("variants").index(i).field("text"),
                    "variant has no text",
                ));
            }
        }

        if record.definitions.is_empty() {
            out.push(missing(
                root.field("definitions"),
                "record needs at least one definition",
            ));
        }
        for (i, definition) in record.definitions.iter().enumerate() {
            self.check_definition(definition, &root.field("definitions").index(i), &mut out);
        }

        for (field, position, raw) in record.references() {
            if let Err(e) = RefTarget::parse(raw) {
                out.push(Diagnostic::error(
                    DiagnosticKind::MalformedReference,
                    root.field(field.name()).index(position),
                    format!("'{}': {}", raw, e),
                ));
            }
        }

        if !record.id.is_empty() {
            out.attach_record(&record.id);
        }
        out
    }

    fn check_tags(
        &self,
        tags: &[String],
        level: AttachmentLevel,
        parent: &FieldPath,
        out: &mut Diagnostics,
    ) {
        for (i, tag) in tags.iter().enumerate() {
            let path = parent.field("tags").index(i);
            match self.taxonomy.check(tag, level) {
                TagCheck::Allowed(_) => {}
                TagCheck::Misplaced(category) => out.push(Diagnostic::error(
                    DiagnosticKind::MisplacedTag,
                    path,
                    format!(
                        "'{}' is a {} tag; {}-level tags must be {}",
                        tag,
                        category,
                        level.name(),
                        category_list(level)
                    ),
                )),
                TagCheck::Unknown => out.push(Diagnostic::error(
                    DiagnosticKind::UnknownTag,
                    path,
                    format!("'{}' is not in the taxonomy", tag),
                )),
            }
        }
    }

    fn check_form(&self, form: &Form, path: &FieldPath, out: &mut Diagnostics) {
        if form.text.trim().is_empty() {
            out.push(missing(path.field("text"), "form has no text"));
        }
        if let Some(gloss) = &form.gloss {
            if !self.gloss.is_well_formed(gloss) {
                out.push(Diagnostic::warning(
                    DiagnosticKind::MalformedGloss,
                    path.field("gloss"),
                    format!(
                        "'{}' is not a gloss code (expected e.g. 'obl', 'pl.erg', 'ipfv,pfv')",
                        gloss
                    ),
                ));
            }
        }
    }

    fn check_definition(&self, definition: &Definition, path: &FieldPath, out: &mut Diagnostics) {
        let languages = definition.translation.languages();
        if languages.is_empty() {
            out.push(missing(
                path.field("translation"),
                "definition needs a translation in at least one language",
            ));
        }

        self.check_tags(&definition.tags, AttachmentLevel::Definition, path, out);

        if let Some(aliases) = &definition.aliases {
            let with_aliases = aliases.languages();
            for lang in languages.iter().filter(|l| !with_aliases.contains(l)) {
                out.push(Diagnostic::warning(
                    DiagnosticKind::AliasLanguageMismatch,
                    path.field("aliases"),
                    format!(
                        "translation has '{}' but aliases do not",
                        lang.code()
                    ),
                ));
            }
        }

        for (i, example) in definition.examples.iter().enumerate() {
            check_example(example, &path.field("examples").index(i), out);
        }
    }
}

fn check_example(example: &Example, path: &FieldPath, out: &mut Diagnostics) {
    if example.text.trim().is_empty() {
        out.push(missing(path.field("text"), "example has no text"));
    }
    let translated = example
        .translation
        .as_ref()
        .is_some_and(|t| !t.languages().is_empty());
    if !translated {
        out.push(Diagnostic::warning(
            DiagnosticKind::UntranslatedExample,
            path.field("translation"),
            "example has no translation",
        ));
    }
}

fn missing(path: FieldPath, message: &str) -> Diagnostic {
    Diagnostic::error(DiagnosticKind::MissingField, path, message)
}

fn category_list(level: AttachmentLevel) -> String {
    level
        .allowed_categories()
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(" or ")
}
