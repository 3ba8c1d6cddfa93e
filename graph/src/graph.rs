//! The reference graph.

use lexis_core::{
    Diagnostic, DiagnosticKind, Diagnostics, FieldPath, LexemeRecord, RefField, RefSyntaxError,
    RefTarget,
};

use crate::RecordIndex;

/// How a reference target resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// `*root`: never needs a record.
    Reconstructed,
    /// Exactly one record, by headword or by explicit id.
    Resolved(&'a str),
    /// Several homonyms share the headword; ids in corpus order.
    Ambiguous(Vec<&'a str>),
    /// No headword or id matches.
    Dangling,
    /// Not a usable reference string.
    Malformed(RefSyntaxError),
}

impl Resolution<'_> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_) | Resolution::Reconstructed)
    }
}

/// One outgoing reference of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<'a> {
    /// Id of the record holding the reference.
    pub source: &'a str,
    pub field: RefField,
    /// Position within the field's list.
    pub position: usize,
    /// The target as written.
    pub target: &'a str,
    pub resolution: Resolution<'a>,
}

impl Edge<'_> {
    pub fn path(&self) -> FieldPath {
        FieldPath::root().field(self.field.name()).index(self.position)
    }
}

/// Read-only graph of record references.
#[derive(Debug)]
pub struct ReferenceGraph<'a> {
    index: RecordIndex<'a>,
    edges: Vec<Edge<'a>>,
}

impl<'a> ReferenceGraph<'a> {
    /// Index the records and resolve every reference.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a LexemeRecord>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();
        let index: RecordIndex<'a> = records.clone().collect();

        let mut edges = Vec::new();
        for record in records {
            for (field, position, target) in record.references() {
                edges.push(Edge {
                    source: record.id.as_str(),
                    field,
                    position,
                    target,
                    resolution: resolve(&index, target),
                });
            }
        }

        tracing::debug!(records = index.len(), edges = edges.len(), "built reference graph");
        Self { index, edges }
    }

    pub fn index(&self) -> &RecordIndex<'a> {
        &self.index
    }

    pub fn record(&self, id: &str) -> Option<&'a LexemeRecord> {
        self.index.get(id)
    }

    pub fn edges(&self) -> &[Edge<'a>] {
        &self.edges
    }

    /// Outgoing references of a record.
    pub fn edges_from<'s>(&'s self, id: &'s str) -> impl Iterator<Item = &'s Edge<'a>> + 's {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Warnings for dangling and ambiguous references. Malformed targets are
    /// left to the schema validator.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for edge in &self.edges {
            let diagnostic = match &edge.resolution {
                Resolution::Dangling => Diagnostic::warning(
                    DiagnosticKind::DanglingReference,
                    edge.path(),
                    format!("'{}' matches no headword or id", edge.target),
                ),
                Resolution::Ambiguous(ids) => Diagnostic::warning(
                    DiagnosticKind::AmbiguousReference,
                    edge.path(),
                    format!(
                        "'{}' matches {} homonyms ({}); refer to one by id",
                        edge.target,
                        ids.len(),
                        ids.join(", ")
                    ),
                ),
                _ => continue,
            };
            diagnostics.push(diagnostic.with_record(edge.source));
        }
        diagnostics
    }
}

fn resolve<'a>(index: &RecordIndex<'a>, raw: &str) -> Resolution<'a> {
    match RefTarget::parse(raw) {
        Err(e) => Resolution::Malformed(e),
        Ok(RefTarget::Reconstructed(_)) => Resolution::Reconstructed,
        Ok(RefTarget::Headword(headword)) => match index.homonyms(&headword) {
            [only] => Resolution::Resolved(only.id.as_str()),
            [] => match index.get(&headword) {
                Some(record) => Resolution::Resolved(record.id.as_str()),
                None => Resolution::Dangling,
            },
            group => Resolution::Ambiguous(group.iter().map(|r| r.id.as_str()).collect()),
        },
    }
}
