//! Validation diagnostics.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::FieldPath;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Blocks export and fails a validation run.
    Error,
    /// Reported for manual review only.
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticKind {
    /// A required field is absent or blank.
    MissingField,
    /// Tag not present in any taxonomy category.
    UnknownTag,
    /// Tag exists but its category is not allowed at this level.
    MisplacedTag,
    /// Gloss code does not follow the `a.b,c` shape.
    MalformedGloss,
    /// Aliases are missing a language the translation has.
    AliasLanguageMismatch,
    /// Example without any translation.
    UntranslatedExample,
    /// Reference string is not a headword or a `*root`.
    MalformedReference,
    /// Reference target matches no record.
    DanglingReference,
    /// Reference target matches several homonyms.
    AmbiguousReference,
    /// File stem differs from the record id.
    FileIdMismatch,
    /// Record filed under a unit other than its headword's leading unit.
    MisfiledRecord,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingField => "missing-field",
            DiagnosticKind::UnknownTag => "unknown-tag",
            DiagnosticKind::MisplacedTag => "misplaced-tag",
            DiagnosticKind::MalformedGloss => "malformed-gloss",
            DiagnosticKind::AliasLanguageMismatch => "alias-language-mismatch",
            DiagnosticKind::UntranslatedExample => "untranslated-example",
            DiagnosticKind::MalformedReference => "malformed-reference",
            DiagnosticKind::DanglingReference => "dangling-reference",
            DiagnosticKind::AmbiguousReference => "ambiguous-reference",
            DiagnosticKind::FileIdMismatch => "file-id-mismatch",
            DiagnosticKind::MisfiledRecord => "misfiled-record",
        }
    }

    /// Tag problems against the taxonomy contract.
    pub fn is_taxonomy_violation(&self) -> bool {
        matches!(self, DiagnosticKind::UnknownTag | DiagnosticKind::MisplacedTag)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Location of the offending value inside the record.
    pub path: FieldPath,
    /// Human-readable message.
    pub message: String,
    /// Id of the record the finding belongs to, when known.
    pub record_id: Option<String>,
    /// File the record was loaded from, when known.
    pub file: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        kind: DiagnosticKind,
        severity: Severity,
        path: FieldPath,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            path,
            message: message.into(),
            record_id: None,
            file: None,
        }
    }

    /// Create an error-level diagnostic.
    pub fn error(kind: DiagnosticKind, path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Error, path, message)
    }

    /// Create a warning-level diagnostic.
    pub fn warning(kind: DiagnosticKind, path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(kind, Severity::Warning, path, message)
    }

    /// Attach the owning record id.
    pub fn with_record(mut self, id: impl Into<String>) -> Self {
        self.record_id = Some(id.into());
        self
    }

    /// Attach the source file.
    pub fn with_file(mut self, file: impl AsRef<Path>) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.severity, self.kind)?;
        if let Some(file) = &self.file {
            write!(f, " {}", file.display())?;
        } else if let Some(id) = &self.record_id {
            write!(f, " {}", id)?;
        }
        write!(f, " {}: {}", self.path, self.message)
    }
}

/// Collection of diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if there are any error-level diagnostics.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    /// Diagnostics of one kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }

    /// Stamp every diagnostic that has no record id yet.
    pub fn attach_record(&mut self, id: &str) {
        for d in self.diagnostics.iter_mut().filter(|d| d.record_id.is_none()) {
            d.record_id = Some(id.to_string());
        }
    }

    /// Stamp every diagnostic that has no file yet.
    pub fn attach_file(&mut self, file: &Path) {
        for d in self.diagnostics.iter_mut().filter(|d| d.file.is_none()) {
            d.file = Some(file.to_path_buf());
        }
    }

    pub fn merge(&mut self, other: Diagnostics) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Counts by severity and kind.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for d in &self.diagnostics {
            match d.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
            *summary.by_kind.entry(d.kind).or_default() += 1;
        }
        summary
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            diagnostics: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

/// Diagnostic counts for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub by_kind: BTreeMap<DiagnosticKind, usize>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors, {} warnings", self.errors, self.warnings)
    }
}
