//! Writing converted records into the per-record layout.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lexis_alphabet::{Alphabet, Grapheme};
use lexis_core::{Layout, LexemeRecord};
use lexis_ident::IdAssigner;
use lexis_store::{render_record, write_new, WriteOutcome};

use crate::{convert_record, ImportError, ImportResult, RawRecord};

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Files created by this run.
    pub written: Vec<PathBuf>,
    /// Files that already existed and were kept as they are.
    pub skipped: Vec<PathBuf>,
    /// Headwords shared by more than one source record.
    pub homonym_sets: usize,
    /// Source records per orthographic unit.
    pub per_unit: BTreeMap<String, usize>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

/// A converted record and where it goes.
struct Planned {
    unit: String,
    path: PathBuf,
    record: LexemeRecord,
}

/// Imports external records into a lexicon layout.
#[derive(Debug, Clone)]
pub struct Importer<'a> {
    layout: &'a Layout,
    alphabet: &'a Alphabet,
    provenance: Option<String>,
}

impl<'a> Importer<'a> {
    pub fn new(layout: &'a Layout, alphabet: &'a Alphabet) -> Self {
        Self {
            layout,
            alphabet,
            provenance: None,
        }
    }

    /// Stamp every imported record with a provenance code.
    pub fn with_provenance(mut self, code: impl Into<String>) -> Self {
        self.provenance = Some(code.into());
        self
    }

    /// Read a JSON source file and import it.
    pub fn import_file(&self, source: &Path) -> ImportResult<ImportReport> {
        let records = read_source(source)?;
        tracing::info!(path = %source.display(), records = records.len(), "read import source");
        self.import(records)
    }

    /// Convert, assign ids and write. Ids and target paths are all worked out
    /// before the first file is written, so a bad source record leaves the
    /// lexicon untouched.
    pub fn import(&self, records: Vec<RawRecord>) -> ImportResult<ImportReport> {
        let mut assigner = IdAssigner::new();
        let mut planned = Vec::with_capacity(records.len());

        for (index, raw) in records.into_iter().enumerate() {
            let mut record = convert_record(raw);
            let unit = self
                .unit_of(&record.headword)
                .ok_or(ImportError::MissingHeadword { index })?;
            record.id = assigner
                .assign(&record.headword)
                .map_err(|source| ImportError::Id { index, source })?;
            record.provenance = self.provenance.clone();

            planned.push(Planned {
                path: self.layout.record_path(&unit, &record.id),
                unit,
                record,
            });
        }

        let mut report = ImportReport {
            homonym_sets: assigner.homonym_headwords().count(),
            ..ImportReport::default()
        };

        for Planned { unit, path, record } in planned {
            let yaml = render_record(&record)?;
            match write_new(&path, yaml.as_bytes())? {
                WriteOutcome::Written => report.written.push(path),
                WriteOutcome::Exists => {
                    tracing::warn!(path = %path.display(), "keeping existing file");
                    report.skipped.push(path);
                }
            }
            *report.per_unit.entry(unit).or_default() += 1;
        }

        tracing::info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            homonym_sets = report.homonym_sets,
            "import finished"
        );
        Ok(report)
    }

    /// Directory name for a headword: its leading unit, or the leading
    /// character itself when that is not in the alphabet.
    fn unit_of(&self, headword: &str) -> Option<String> {
        match self.alphabet.leading_unit(headword)? {
            Grapheme::Unit(unit) => Some(unit.to_string()),
            Grapheme::Unknown(c) => {
                tracing::warn!(headword, character = %c, "unknown leading character");
                Some(c.to_string())
            }
        }
    }
}

/// Parse the consolidated source dataset.
pub fn read_source(path: &Path) -> ImportResult<Vec<RawRecord>> {
    let source = std::fs::read_to_string(path).map_err(|e| ImportError::io(path, e))?;
    serde_json::from_str(&source).map_err(|e| ImportError::parse(path, e.to_string()))
}
