//! Writing the consolidated artifact.

use std::path::{Path, PathBuf};

use lexis_core::{Layout, LexemeRecord};
use lexis_store::write_atomic;
use lexis_validate::Project;
use serde::Serialize;

use crate::{sort_records, ExportError, ExportResult};

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub records: usize,
    /// Warnings seen during re-validation (errors abort the export).
    pub warnings: usize,
    /// Records per leading unit, in collation order.
    pub per_unit: Vec<(String, usize)>,
}

/// Load the project under `layout` and export it to `output`.
pub fn export_layout(layout: &Layout, output: &Path) -> ExportResult<ExportSummary> {
    let project = Project::load(layout)?;
    export(&project, output)
}

/// Validate, sort and write the corpus. The per-record files are only read.
pub fn export(project: &Project, output: &Path) -> ExportResult<ExportSummary> {
    let warnings = ensure_valid(project)?;

    let mut records: Vec<LexemeRecord> = project.corpus.records().cloned().collect();
    sort_records(&mut records, &project.alphabet);
    write_json(output, &records)?;

    let per_unit = count_per_unit(&records, project);
    for (unit, count) in &per_unit {
        tracing::info!(unit = %unit, entries = count, "exported unit");
    }
    tracing::info!(
        output = %output.display(),
        records = records.len(),
        warnings,
        "export finished"
    );

    Ok(ExportSummary {
        output: output.to_path_buf(),
        records: records.len(),
        warnings,
        per_unit,
    })
}

/// Re-validate the corpus. Returns the warning count, or the diagnostics when
/// any error is present.
pub(crate) fn ensure_valid(project: &Project) -> ExportResult<usize> {
    let report = project.validate()?;
    let summary = report.summary();
    if summary.errors > 0 {
        return Err(ExportError::ValidationFailed {
            errors: summary.errors,
            diagnostics: report.diagnostics,
        });
    }
    Ok(summary.warnings)
}

/// Pretty JSON with a trailing newline, replaced atomically.
pub(crate) fn write_json<T: Serialize + ?Sized>(output: &Path, value: &T) -> ExportResult<()> {
    let mut json =
        serde_json::to_vec_pretty(value).map_err(|e| ExportError::Serialize(e.to_string()))?;
    json.push(b'\n');
    write_atomic(output, &json)?;
    Ok(())
}

/// Sorted records are contiguous per leading unit.
fn count_per_unit(records: &[LexemeRecord], project: &Project) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let unit = project
            .alphabet
            .leading_unit(&record.headword)
            .map(|g| g.to_string())
            .unwrap_or_default();
        match counts.last_mut() {
            Some((last, count)) if *last == unit => *count += 1,
            _ => counts.push((unit, 1)),
        }
    }
    counts
}
