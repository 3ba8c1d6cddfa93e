//! The reader-facing dictionary artifact.
//!
//! Entries are grouped by leading unit in collation order. Headwords carry
//! stress marks taken from their IPA, tags are replaced by their display
//! labels and resolved references become `unit#id` links.

use std::path::Path;

use lexis_alphabet::Alphabet;
use lexis_core::{Definition, Form, Layout, LexemeRecord, RefField, Text, Variant};
use lexis_graph::{ReferenceGraph, Resolution};
use lexis_taxonomy::Taxonomy;
use lexis_validate::Project;
use serde::Serialize;

use crate::exporter::{ensure_valid, write_json};
use crate::{sort_records, ExportResult, ExportSummary};

/// All entries sharing a leading unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitSection {
    pub unit: String,
    pub entries: Vec<PublishedEntry>,
}

/// One entry as shown to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedEntry {
    pub id: String,
    /// Headword with stress marks.
    pub headword: String,
    /// Labels of the entry tags that have them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Text>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<Form>,
    pub definitions: Vec<Definition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etymology: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Text>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub derived_from: Vec<Link>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<Link>,
}

/// A reference to another entry of the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub headword: String,
    /// `<unit>#<id>`
    pub link: String,
}

/// Load the project under `layout` and publish it to `output`.
pub fn publish_layout(layout: &Layout, output: &Path) -> ExportResult<ExportSummary> {
    let project = Project::load(layout)?;
    publish(&project, output)
}

/// Validate the corpus and write the reader-facing artifact. Refused on the
/// same terms as [`export`](crate::export).
pub fn publish(project: &Project, output: &Path) -> ExportResult<ExportSummary> {
    let warnings = ensure_valid(project)?;

    let sections = render(project);
    write_json(output, &sections)?;

    let per_unit: Vec<(String, usize)> = sections
        .iter()
        .map(|s| (s.unit.clone(), s.entries.len()))
        .collect();
    let records: usize = per_unit.iter().map(|(_, n)| n).sum();
    tracing::info!(
        output = %output.display(),
        records,
        units = per_unit.len(),
        warnings,
        "publish finished"
    );

    Ok(ExportSummary {
        output: output.to_path_buf(),
        records,
        warnings,
        per_unit,
    })
}

/// Build the sections without validating or writing anything.
pub fn render(project: &Project) -> Vec<UnitSection> {
    let mut records: Vec<LexemeRecord> = project.corpus.records().cloned().collect();
    sort_records(&mut records, &project.alphabet);
    let graph = ReferenceGraph::build(&records);

    let mut sections: Vec<UnitSection> = Vec::new();
    for record in &records {
        let unit = unit_of(&project.alphabet, record);
        let entry = published(record, project, &graph);
        match sections.last_mut() {
            Some(section) if section.unit == unit => section.entries.push(entry),
            _ => sections.push(UnitSection {
                unit,
                entries: vec![entry],
            }),
        }
    }
    sections
}

fn published(record: &LexemeRecord, project: &Project, graph: &ReferenceGraph) -> PublishedEntry {
    let headword = match &record.ipa {
        Some(ipa) => project.alphabet.mark_stress(&record.headword, ipa),
        None => record.headword.clone(),
    };

    let mut derived_from = Vec::new();
    let mut see_also = Vec::new();
    for edge in graph.edges_from(&record.id) {
        let Some(link) = link_to(&edge.resolution, &project.alphabet, graph) else {
            tracing::debug!(record = %record.id, reference = edge.target, "reference not linked");
            continue;
        };
        match edge.field {
            RefField::DerivedFrom => derived_from.push(link),
            RefField::SeeAlso => see_also.push(link),
        }
    }

    PublishedEntry {
        id: record.id.clone(),
        headword,
        tags: labels(&record.tags, &project.taxonomy),
        forms: record.forms.clone(),
        definitions: record.definitions.clone(),
        variants: record.variants.clone(),
        etymology: record.etymology.clone(),
        note: record.note.clone(),
        derived_from,
        see_also,
    }
}

/// Only single resolved targets are linked; roots and homonym groups have no
/// entry to point at.
fn link_to(resolution: &Resolution, alphabet: &Alphabet, graph: &ReferenceGraph) -> Option<Link> {
    let Resolution::Resolved(id) = resolution else {
        return None;
    };
    let target = graph.record(id)?;
    Some(Link {
        headword: target.headword.clone(),
        link: format!("{}#{}", unit_of(alphabet, target), target.id),
    })
}

fn labels(tags: &[String], taxonomy: &Taxonomy) -> Vec<Text> {
    tags.iter()
        .filter_map(|tag| taxonomy.label(tag))
        .map(|labels| Text {
            en: labels.en.clone(),
            ru: labels.ru.clone(),
        })
        .filter(|text| !text.is_empty())
        .collect()
}

fn unit_of(alphabet: &Alphabet, record: &LexemeRecord) -> String {
    alphabet
        .leading_unit(&record.headword)
        .map(|g| g.to_string())
        .unwrap_or_default()
}
