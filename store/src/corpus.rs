//! Loading the whole lexicon.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lexis_core::{Layout, LexemeRecord};
use walkdir::WalkDir;

use crate::{read_record, StoreError, StoreResult};

/// A record together with where it was found.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    pub path: PathBuf,
    /// Name of the unit directory the file sits in; `None` for files placed
    /// directly in the lexicon directory.
    pub unit: Option<String>,
    pub record: LexemeRecord,
}

impl CorpusEntry {
    /// File name without the extension.
    pub fn file_stem(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }
}

/// Every record of the lexicon, in path order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Load every record under the layout's lexicon directory.
    pub fn load(layout: &Layout) -> StoreResult<Self> {
        Self::load_dir(&layout.lexicon_dir)
    }

    /// Load every `*.yaml` document below `dir`. Hidden files and directories
    /// are skipped. Parse failures and duplicate ids are fatal.
    pub fn load_dir(dir: &Path) -> StoreResult<Self> {
        if !dir.is_dir() {
            return Err(StoreError::MissingLexicon(dir.to_path_buf()));
        }

        let mut entries = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        let walker = WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                StoreError::io(path, e.into())
            })?;
            if !entry.file_type().is_file() || !Layout::is_record_file(entry.path()) {
                continue;
            }

            let path = entry.into_path();
            let record = read_record(&path)?;
            // A missing id is a validation finding, not a clash between files.
            if !record.id.trim().is_empty() {
                if let Some(first) = seen.get(&record.id) {
                    return Err(StoreError::DuplicateId {
                        id: record.id,
                        first: first.clone(),
                        second: path,
                    });
                }
                seen.insert(record.id.clone(), path.clone());
            }

            tracing::debug!(path = %path.display(), id = %record.id, "loaded record");
            entries.push(CorpusEntry {
                unit: unit_of(dir, &path),
                path,
                record,
            });
        }

        tracing::info!(dir = %dir.display(), records = entries.len(), "loaded corpus");
        Ok(Self { entries })
    }

    /// Build a corpus from records already in memory.
    pub fn from_entries(entries: Vec<CorpusEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &LexemeRecord> + Clone {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn get(&self, id: &str) -> Option<&CorpusEntry> {
        self.entries.iter().find(|e| e.record.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_records(self) -> Vec<LexemeRecord> {
        self.entries.into_iter().map(|e| e.record).collect()
    }
}

/// First directory component of `path` below `root`, if any.
fn unit_of(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut components = relative.components();
    let first = components.next()?;
    // The file itself is not a unit.
    components.next()?;
    first.as_os_str().to_str().map(str::to_string)
}
