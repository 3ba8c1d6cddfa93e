//! Helpers for asserting on diagnostics.

use lexis_core::{DiagnosticKind, Diagnostics};

/// Kinds of all diagnostics, in report order.
pub fn kinds(diagnostics: &Diagnostics) -> Vec<DiagnosticKind> {
    diagnostics.all().iter().map(|d| d.kind).collect()
}

/// Number of diagnostics of one kind.
pub fn count_of(diagnostics: &Diagnostics, kind: DiagnosticKind) -> usize {
    diagnostics.of_kind(kind).count()
}
