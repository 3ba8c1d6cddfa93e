//! Whole-corpus validation.

use std::collections::HashMap;
use std::path::Path;

use lexis_alphabet::Alphabet;
use lexis_core::{Diagnostic, DiagnosticKind, Diagnostics, FieldPath, Layout, Summary};
use lexis_graph::ReferenceGraph;
use lexis_store::{Corpus, CorpusEntry};
use lexis_taxonomy::Taxonomy;

use crate::{SchemaValidator, ValidateResult};

/// Everything a run reads from disk: the two tables and the records.
#[derive(Debug)]
pub struct Project {
    pub taxonomy: Taxonomy,
    pub alphabet: Alphabet,
    pub corpus: Corpus,
}

impl Project {
    /// Load the taxonomy, the alphabet and every record. Fails on a malformed
    /// table, an unparseable record or a duplicate id.
    pub fn load(layout: &Layout) -> ValidateResult<Self> {
        let taxonomy = Taxonomy::load(&layout.tags_file)?;
        let alphabet = Alphabet::load(&layout.alphabet_file)?;
        let corpus = Corpus::load(layout)?;
        Ok(Self {
            taxonomy,
            alphabet,
            corpus,
        })
    }

    pub fn validate(&self) -> ValidateResult<ValidationReport> {
        validate_corpus(&self.corpus, &self.taxonomy, &self.alphabet)
    }
}

/// Findings of a corpus run.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Diagnostics,
    /// Number of records checked.
    pub records: usize,
}

impl ValidationReport {
    pub fn summary(&self) -> Summary {
        self.diagnostics.summary()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Validate every record, then the references between them.
pub fn validate_corpus(
    corpus: &Corpus,
    taxonomy: &Taxonomy,
    alphabet: &Alphabet,
) -> ValidateResult<ValidationReport> {
    let validator = SchemaValidator::new(taxonomy)?;
    let mut diagnostics = Diagnostics::new();

    for entry in corpus.entries() {
        let mut found = validator.validate(&entry.record);
        found.extend(file_identity(entry, alphabet));
        found.attach_file(&entry.path);
        diagnostics.merge(found);
    }

    let files: HashMap<&str, &Path> = corpus
        .entries()
        .iter()
        .map(|e| (e.record.id.as_str(), e.path.as_path()))
        .collect();
    let graph = ReferenceGraph::build(corpus.records());
    diagnostics.extend(graph.diagnostics().into_iter().map(|d| {
        match d.record_id.as_deref().and_then(|id| files.get(id)) {
            Some(path) => d.with_file(path),
            None => d,
        }
    }));

    let report = ValidationReport {
        diagnostics,
        records: corpus.len(),
    };
    let summary = report.summary();
    tracing::info!(
        records = report.records,
        errors = summary.errors,
        warnings = summary.warnings,
        "validated corpus"
    );
    Ok(report)
}

/// File stem must equal the id; the unit directory must be the headword's
/// leading unit.
fn file_identity(entry: &CorpusEntry, alphabet: &Alphabet) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    let record = &entry.record;

    if !record.id.is_empty() && entry.file_stem() != Some(record.id.as_str()) {
        out.push(Diagnostic::warning(
            DiagnosticKind::FileIdMismatch,
            FieldPath::root().field("id"),
            format!(
                "file is named '{}' but the id is '{}'",
                entry.file_stem().unwrap_or_default(),
                record.id
            ),
        ));
    }

    if let Some(expected) = alphabet.leading_unit(&record.headword) {
        let expected = expected.to_string();
        if entry.unit.as_deref() != Some(expected.as_str()) {
            out.push(Diagnostic::warning(
                DiagnosticKind::MisfiledRecord,
                FieldPath::root().field("headword"),
                format!(
                    "'{}' belongs under '{}', found under '{}'",
                    record.headword,
                    expected,
                    entry.unit.as_deref().unwrap_or(".")
                ),
            ));
        }
    }

    out
}
