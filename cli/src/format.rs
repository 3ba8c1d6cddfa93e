//! Output formatting for command results.

use std::path::Path;

use lexis_core::Diagnostic;

/// `path` relative to the project root when it lies inside it.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// One diagnostic per line: `severity kind file path: message`.
pub fn diagnostic_line(d: &Diagnostic, root: &Path) -> String {
    let location = match (&d.file, &d.record_id) {
        (Some(file), _) => display_path(file, root),
        (None, Some(id)) => id.clone(),
        (None, None) => "-".to_string(),
    };
    format!(
        "{:<7} {:<24} {} {}: {}",
        d.severity.as_str(),
        d.kind.as_str(),
        location,
        d.path,
        d.message
    )
}
