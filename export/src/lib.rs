//! Lexis Export
//!
//! Consolidates the per-record files into JSON ordered by the alphabet's
//! collation. [`export`] writes the records as stored; [`publish`] writes the
//! reader-facing dictionary with stress-marked headwords, tag labels and
//! entry links. The corpus is re-validated first and nothing is written
//! unless it is free of errors.

mod error;
mod exporter;
mod order;
mod publish;

pub use error::{ExportError, ExportResult};
pub use exporter::{export, export_layout, ExportSummary};
pub use order::sort_records;
pub use publish::{publish, publish_layout, render, Link, PublishedEntry, UnitSection};
