//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lexis_core::Layout;

#[derive(Debug, Parser)]
#[command(name = "lexis")]
#[command(version)]
#[command(about = "Validate, import and export a one-file-per-headword lexicon")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Project root
    #[arg(long, global = true, env = "LEXIS_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Lexicon directory [default: <root>/lexicon]
    #[arg(long, global = true, env = "LEXIS_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Tag taxonomy [default: <root>/data/tags.yaml]
    #[arg(long, global = true, env = "LEXIS_TAGS")]
    pub tags: Option<PathBuf>,

    /// Alphabet table [default: <root>/data/alphabet.yaml]
    #[arg(long, global = true, env = "LEXIS_ALPHABET")]
    pub alphabet: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the id a new record with this headword would get
    Id {
        headword: String,
    },

    /// Validate every record and the references between them
    Validate,

    /// Write the collation-ordered JSON artifact
    Export {
        /// Output file [default: <root>/export/lexicon.json, or
        /// <root>/export/dictionary-web.json with --publish]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the reader-facing dictionary (stress marks, tag labels, links)
        #[arg(long)]
        publish: bool,
    },

    /// Convert a consolidated JSON dataset into per-record files
    Import {
        source: PathBuf,

        /// Provenance code stamped on every imported record
        #[arg(long)]
        provenance: Option<String>,
    },
}

impl Cli {
    /// Resolve the project layout from the root and the overrides.
    pub fn layout(&self) -> Layout {
        let mut layout = Layout::new(&self.root);
        if let Some(dir) = &self.lexicon {
            layout = layout.with_lexicon_dir(dir);
        }
        if let Some(file) = &self.tags {
            layout = layout.with_tags_file(file);
        }
        if let Some(file) = &self.alphabet {
            layout = layout.with_alphabet_file(file);
        }
        layout
    }
}
