//! Command implementations.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use lexis_alphabet::Alphabet;
use lexis_core::Layout;
use lexis_export::{export_layout, publish_layout, ExportError};
use lexis_ident::IdAssigner;
use lexis_import::Importer;
use lexis_store::{Corpus, StoreError};
use lexis_validate::Project;

use crate::format::{diagnostic_line, display_path};
use crate::{Cli, Command};

/// Whether a command succeeded. Fatal conditions are `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The command ran but found errors (validation, refused export).
    Failure,
}

/// Run the parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let layout = cli.layout();
    tracing::debug!(?layout, "resolved project layout");
    match &cli.command {
        Command::Id { headword } => id(&layout, headword, out),
        Command::Validate => validate(&layout, out),
        Command::Export { output, publish } => export(&layout, output.as_deref(), *publish, out),
        Command::Import { source, provenance } => {
            import(&layout, source, provenance.as_deref(), out)
        }
    }
}

fn id(layout: &Layout, headword: &str, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let alphabet = Alphabet::load(&layout.alphabet_file)?;
    let corpus = match Corpus::load(layout) {
        Ok(corpus) => corpus,
        Err(StoreError::MissingLexicon(dir)) => {
            tracing::info!(dir = %dir.display(), "no lexicon yet");
            Corpus::default()
        }
        Err(e) => return Err(e).context("cannot read existing ids"),
    };

    let assigner = IdAssigner::from_existing(
        corpus
            .records()
            .map(|r| (r.id.as_str(), r.headword.as_str())),
    );
    let id = assigner.candidate(headword)?;
    let unit = alphabet
        .leading_unit(headword)
        .map(|g| g.to_string())
        .unwrap_or_default();

    writeln!(out, "{}", id)?;
    writeln!(
        out,
        "{}",
        display_path(&layout.record_path(&unit, &id), &layout.root)
    )?;
    Ok(Outcome::Success)
}

fn validate(layout: &Layout, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let project = Project::load(layout).context("validation aborted")?;
    let report = project.validate()?;

    for d in &report.diagnostics {
        writeln!(out, "{}", diagnostic_line(d, &layout.root))?;
    }
    writeln!(out, "{} records: {}", report.records, report.summary())?;

    Ok(if report.has_errors() {
        Outcome::Failure
    } else {
        Outcome::Success
    })
}

fn export(
    layout: &Layout,
    output: Option<&Path>,
    publish: bool,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let output = output.map(Path::to_path_buf).unwrap_or_else(|| {
        if publish {
            layout.default_publish_path()
        } else {
            layout.default_export_path()
        }
    });

    let result = if publish {
        publish_layout(layout, &output)
    } else {
        export_layout(layout, &output)
    };
    match result {
        Ok(summary) => {
            for (unit, count) in &summary.per_unit {
                writeln!(out, "  {}: {}", unit, count)?;
            }
            writeln!(
                out,
                "exported {} records to {} ({} warnings)",
                summary.records,
                display_path(&summary.output, &layout.root),
                summary.warnings
            )?;
            Ok(Outcome::Success)
        }
        Err(ExportError::ValidationFailed {
            errors,
            diagnostics,
        }) => {
            for d in diagnostics.errors() {
                writeln!(out, "{}", diagnostic_line(d, &layout.root))?;
            }
            writeln!(out, "export refused: {} errors", errors)?;
            Ok(Outcome::Failure)
        }
        Err(e) => Err(e).context("export aborted"),
    }
}

fn import(
    layout: &Layout,
    source: &Path,
    provenance: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let alphabet = Alphabet::load(&layout.alphabet_file)?;
    let mut importer = Importer::new(layout, &alphabet);
    if let Some(code) = provenance {
        importer = importer.with_provenance(code);
    }

    let report = importer.import_file(source).context("import aborted")?;

    for (unit, count) in &report.per_unit {
        writeln!(out, "  {}: {}", unit, count)?;
    }
    writeln!(
        out,
        "imported {} records ({} existing files kept), {} homonym sets",
        report.written.len(),
        report.skipped.len(),
        report.homonym_sets
    )?;
    Ok(Outcome::Success)
}
