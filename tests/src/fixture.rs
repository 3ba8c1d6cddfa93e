//! Temporary lexicon projects.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lexis_alphabet::Alphabet;
use lexis_core::Layout;
use lexis_store::Corpus;
use lexis_validate::{Project, ValidateResult, ValidationReport};
use tempfile::TempDir;

/// Taxonomy covering the tags the importer produces in the test data.
pub const DEFAULT_TAGS: &str = r#"
grammar:
  n: { en: noun, ru: сущ. }
  v: { en: verb, ru: глаг. }
  adj:
  tr:
  intr:
  pl:
etymology: [arabic, persian]
register: [coll, obs]
semantic: [animal, house, kinship, clothing, tech]
"#;

/// A slice of the Kaitag alphabet with digraphs and a trigraph.
pub const DEFAULT_ALPHABET: &[&str] = &[
    "а", "б", "в", "г", "гъ", "гь", "д", "е", "ж", "з", "и", "й", "к", "кк", "къ", "ккъ", "кь",
    "кӏ", "л", "м", "н", "о", "п", "р", "с", "т", "у", "х", "хъ", "хь", "хӏ", "ц", "ч", "ш",
    "ы", "э", "я",
];

/// Builder for a temporary project.
#[derive(Debug, Clone)]
pub struct CorpusFixture {
    tags: String,
    alphabet: Vec<String>,
    /// (unit, file stem, document)
    records: Vec<(String, String, String)>,
}

impl Default for CorpusFixture {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.to_string(),
            alphabet: DEFAULT_ALPHABET.iter().map(|u| u.to_string()).collect(),
            records: Vec::new(),
        }
    }
}

impl CorpusFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the taxonomy source.
    pub fn tags(mut self, yaml: &str) -> Self {
        self.tags = yaml.to_string();
        self
    }

    /// Replace the alphabet table.
    pub fn alphabet(mut self, units: &[&str]) -> Self {
        self.alphabet = units.iter().map(|u| u.to_string()).collect();
        self
    }

    /// Add a record document as `<unit>/<file>.yaml`.
    pub fn record(mut self, unit: &str, file: &str, yaml: &str) -> Self {
        self.records
            .push((unit.to_string(), file.to_string(), yaml.to_string()));
        self
    }

    /// Add a minimal valid record whose id equals its headword.
    pub fn entry(self, unit: &str, headword: &str, translation: &str) -> Self {
        let yaml = format!(
            "id: {h}\nheadword: {h}\ndefinitions:\n  - translation: {{ en: {t} }}\n",
            h = headword,
            t = translation
        );
        self.record(unit, headword, &yaml)
    }

    /// Write everything to a fresh temporary directory.
    pub fn build(self) -> io::Result<Fixture> {
        let dir = tempfile::tempdir()?;
        let layout = Layout::new(dir.path());

        if let Some(parent) = layout.tags_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&layout.tags_file, &self.tags)?;

        let units: Vec<String> = self.alphabet.iter().map(|u| format!("  - {}\n", u)).collect();
        fs::write(&layout.alphabet_file, format!("alphabet:\n{}", units.concat()))?;

        fs::create_dir_all(&layout.lexicon_dir)?;
        for (unit, file, yaml) in &self.records {
            let path = layout.record_path(unit, file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, yaml)?;
        }

        Ok(Fixture { dir, layout })
    }
}

/// A built project. The directory is removed on drop.
#[derive(Debug)]
pub struct Fixture {
    dir: TempDir,
    pub layout: Layout,
}

impl Fixture {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn alphabet(&self) -> ValidateResult<Alphabet> {
        Ok(Alphabet::load(&self.layout.alphabet_file)?)
    }

    pub fn project(&self) -> ValidateResult<Project> {
        Project::load(&self.layout)
    }

    pub fn corpus(&self) -> ValidateResult<Corpus> {
        Ok(Corpus::load(&self.layout)?)
    }

    /// Load and validate the whole project.
    pub fn validate(&self) -> ValidateResult<ValidationReport> {
        self.project()?.validate()
    }

    /// Write a consolidated source dataset next to the lexicon.
    pub fn write_source(&self, json: &serde_json::Value) -> io::Result<PathBuf> {
        let path = self.root().join("source.json");
        fs::write(&path, json.to_string())?;
        Ok(path)
    }

    /// Path of the default export artifact.
    pub fn export_path(&self) -> PathBuf {
        self.layout.default_export_path()
    }
}
