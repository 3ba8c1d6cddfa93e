//! Lexis Import
//!
//! Converts a consolidated JSON dataset from the external dictionary system
//! into the one-record-per-file layout. Records are grouped by the leading
//! orthographic unit of their headword; homonyms get suffixed ids in source
//! order. Files that already exist are never overwritten.

mod convert;
mod error;
mod importer;
mod raw;

pub use convert::{convert_record, convert_tag, parse_note, split_etymology};
pub use error::{ImportError, ImportResult};
pub use importer::{read_source, ImportReport, Importer};
pub use raw::{RawDefinition, RawExample, RawForm, RawRecord};
