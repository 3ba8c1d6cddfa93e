//! Reading record documents and writing files atomically.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use lexis_core::LexemeRecord;
use tempfile::NamedTempFile;

use crate::{StoreError, StoreResult};

/// What a non-clobbering write did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The target already existed and was left untouched.
    Exists,
}

/// Parse one record document.
pub fn read_record(path: &Path) -> StoreResult<LexemeRecord> {
    let source = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_yaml::from_str(&source).map_err(|e| StoreError::parse(path, e.to_string()))
}

/// Serialize a record to its YAML document.
pub fn render_record(record: &LexemeRecord) -> StoreResult<String> {
    serde_yaml::to_string(record).map_err(|e| StoreError::Serialize {
        id: record.id.clone(),
        message: e.to_string(),
    })
}

/// Write a record document, replacing any previous file atomically.
pub fn write_record(path: &Path, record: &LexemeRecord) -> StoreResult<()> {
    write_atomic(path, render_record(record)?.as_bytes())
}

/// Replace `path` with `contents` via a synced temporary file and a rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> StoreResult<()> {
    let tmp = staged(path, contents)?;
    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Like [`write_atomic`], but never replaces an existing file.
pub fn write_new(path: &Path, contents: &[u8]) -> StoreResult<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::Exists);
    }
    let tmp = staged(path, contents)?;
    match tmp.persist_noclobber(path) {
        Ok(_) => {
            tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
            Ok(WriteOutcome::Written)
        }
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(WriteOutcome::Exists),
        Err(e) => Err(StoreError::io(path, e.error)),
    }
}

/// Write `contents` to a temporary file next to `path` and flush it to disk.
fn staged(path: &Path, contents: &[u8]) -> StoreResult<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(contents)
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    Ok(tmp)
}
