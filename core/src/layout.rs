//! On-disk project layout.

use std::path::{Path, PathBuf};

/// Extension of per-record documents.
pub const RECORD_EXTENSION: &str = "yaml";

/// Where the lexicon, the taxonomy and the alphabet table live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    /// Directory holding one sub-directory per orthographic unit.
    pub lexicon_dir: PathBuf,
    pub tags_file: PathBuf,
    pub alphabet_file: PathBuf,
}

impl Layout {
    pub const LEXICON_DIR: &'static str = "lexicon";
    pub const DATA_DIR: &'static str = "data";
    pub const TAGS_FILE: &'static str = "tags.yaml";
    pub const ALPHABET_FILE: &'static str = "alphabet.yaml";
    pub const EXPORT_FILE: &'static str = "export/lexicon.json";
    pub const PUBLISH_FILE: &'static str = "export/dictionary-web.json";

    /// Default layout under a project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            lexicon_dir: root.join(Self::LEXICON_DIR),
            tags_file: root.join(Self::DATA_DIR).join(Self::TAGS_FILE),
            alphabet_file: root.join(Self::DATA_DIR).join(Self::ALPHABET_FILE),
            root,
        }
    }

    pub fn with_lexicon_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lexicon_dir = dir.into();
        self
    }

    pub fn with_tags_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.tags_file = file.into();
        self
    }

    pub fn with_alphabet_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.alphabet_file = file.into();
        self
    }

    /// Directory for records grouped under an orthographic unit.
    pub fn unit_dir(&self, unit: &str) -> PathBuf {
        self.lexicon_dir.join(unit)
    }

    /// File identity of a record: `<lexicon>/<unit>/<id>.yaml`.
    pub fn record_path(&self, unit: &str, id: &str) -> PathBuf {
        self.unit_dir(unit)
            .join(format!("{}.{}", id, RECORD_EXTENSION))
    }

    pub fn default_export_path(&self) -> PathBuf {
        self.root.join(Self::EXPORT_FILE)
    }

    pub fn default_publish_path(&self) -> PathBuf {
        self.root.join(Self::PUBLISH_FILE)
    }

    /// Returns true if a path looks like a record document.
    pub fn is_record_file(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == RECORD_EXTENSION)
    }
}
