//! Corpus validation end to end.

use lexis_graph::{ReferenceGraph, Resolution};
use lexis_store::StoreError;
use lexis_taxonomy::TaxonomyError;
use lexis_tests::prelude::*;
use lexis_validate::ValidateError;
use pretty_assertions::assert_eq;

#[test]
fn test_clean_corpus_has_no_findings() {
    let fixture = CorpusFixture::new()
        .entry("б", "бец", "wolf")
        .entry("хъ", "хъан", "house")
        .build()
        .unwrap();

    let report = fixture.validate().unwrap();

    assert_eq!(report.records, 2);
    assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
}

#[test]
fn test_dangling_derivation_yields_exactly_one_diagnostic() {
    // GIVEN
    let fixture = CorpusFixture::new()
        .entry("б", "бец", "wolf")
        .record(
            "б",
            "бецла",
            "id: бецла\nheadword: бецла\ndefinitions:\n  - translation: { en: wolfish }\nderived_from: [ккаца, \"*bec\"]\n",
        )
        .build()
        .unwrap();

    // WHEN
    let report = fixture.validate().unwrap();

    // THEN - the reconstructed root needs no record
    assert_eq!(kinds(&report.diagnostics), vec![DiagnosticKind::DanglingReference]);
    let d = &report.diagnostics.all()[0];
    assert_eq!(d.severity, Severity::Warning);
    assert_eq!(d.record_id.as_deref(), Some("бецла"));
    assert!(d.file.as_ref().is_some_and(|f| f.ends_with("б/бецла.yaml")));
    assert!(!report.has_errors());
}

#[test]
fn test_unknown_definition_tag_yields_one_taxonomy_violation() {
    let fixture = CorpusFixture::new()
        .record(
            "б",
            "бец",
            "id: бец\nheadword: бец\ntags: [n]\ndefinitions:\n  - translation: { en: wolf }\n    tags: [animal, predator]\n",
        )
        .build()
        .unwrap();

    let report = fixture.validate().unwrap();

    let violations: Vec<_> = report
        .diagnostics
        .all()
        .iter()
        .filter(|d| d.kind.is_taxonomy_violation())
        .collect();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, DiagnosticKind::UnknownTag);
    assert_eq!(violations[0].path.to_string(), "definitions[0].tags[1]");
    assert_eq!(report.summary().errors, 1);
}

#[test]
fn test_all_problems_in_a_record_reported_together() {
    // GIVEN - misplaced tag, bad gloss, alias gap, untranslated example
    let fixture = CorpusFixture::new()
        .record(
            "х",
            "хъан",
            r#"id: хъан
headword: хъан
tags: [house]
forms:
  - text: хъанни
    gloss: obl..pl
definitions:
  - translation: { en: house, ru: дом }
    aliases: { en: [home] }
    examples:
      - text: хъан ккураб
"#,
        )
        .build()
        .unwrap();

    // WHEN
    let report = fixture.validate().unwrap();

    // THEN
    assert_eq!(
        kinds(&report.diagnostics),
        vec![
            DiagnosticKind::MisplacedTag,
            DiagnosticKind::MalformedGloss,
            DiagnosticKind::AliasLanguageMismatch,
            DiagnosticKind::UntranslatedExample,
            DiagnosticKind::MisfiledRecord,
        ]
    );
    assert_eq!(report.summary().errors, 1);
    assert_eq!(report.summary().warnings, 4);
}

#[test]
fn test_record_without_definitions_is_invalid() {
    let fixture = CorpusFixture::new()
        .record("б", "бец", "id: бец\nheadword: бец\n")
        .build()
        .unwrap();

    let report = fixture.validate().unwrap();

    assert_eq!(count_of(&report.diagnostics, DiagnosticKind::MissingField), 1);
    assert!(report.has_errors());
}

#[test]
fn test_ambiguous_and_explicit_homonym_references() {
    let fixture = CorpusFixture::new()
        .entry("хъ", "хъан", "house")
        .record(
            "хъ",
            "хъан-2",
            "id: хъан-2\nheadword: хъан\ndefinitions:\n  - translation: { en: roof }\n",
        )
        .record(
            "б",
            "бец",
            "id: бец\nheadword: бец\ndefinitions:\n  - translation: { en: wolf }\nsee_also: [хъан, хъан-2]\n",
        )
        .build()
        .unwrap();

    let report = fixture.validate().unwrap();

    assert_eq!(kinds(&report.diagnostics), vec![DiagnosticKind::AmbiguousReference]);
    assert_eq!(report.diagnostics.all()[0].path.to_string(), "see_also[0]");
    assert!(!report.has_errors());

    // the explicit id picks one homonym; groups list ids in file order
    let corpus = fixture.corpus().unwrap();
    let graph = ReferenceGraph::build(corpus.records());
    let resolutions: Vec<_> = graph.edges_from("бец").map(|e| e.resolution.clone()).collect();
    assert_eq!(
        resolutions,
        vec![
            Resolution::Ambiguous(vec!["хъан-2", "хъан"]),
            Resolution::Resolved("хъан-2"),
        ]
    );
}

#[test]
fn test_duplicate_id_is_fatal_with_both_paths() {
    let fixture = CorpusFixture::new()
        .entry("б", "бец", "wolf")
        .record(
            "х",
            "бец-copy",
            "id: бец\nheadword: бец\ndefinitions:\n  - translation: { en: wolf }\n",
        )
        .build()
        .unwrap();

    let err = fixture.validate().unwrap_err();

    match err {
        ValidateError::Store(StoreError::DuplicateId { id, first, second }) => {
            assert_eq!(id, "бец");
            assert!(first.ends_with("б/бец.yaml"));
            assert!(second.ends_with("х/бец-copy.yaml"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_ids_reported_per_record() {
    // GIVEN - two records with no id at all
    let fixture = CorpusFixture::new()
        .record("а", "ана", "headword: ана\ndefinitions:\n  - translation: { en: mother }\n")
        .record("а", "аба", "headword: аба\ndefinitions:\n  - translation: { en: father }\n")
        .build()
        .unwrap();

    // WHEN
    let report = fixture.validate().unwrap();

    // THEN - one finding per record, not a fatal duplicate
    assert_eq!(
        kinds(&report.diagnostics),
        vec![DiagnosticKind::MissingField, DiagnosticKind::MissingField]
    );
    assert!(report
        .diagnostics
        .all()
        .iter()
        .all(|d| d.path.to_string() == "id" && d.file.is_some()));
    assert!(report.has_errors());
}

#[test]
fn test_unparseable_record_is_fatal() {
    let fixture = CorpusFixture::new()
        .entry("б", "бец", "wolf")
        .record("х", "хъан", "id: хъан\nheadword: хъан\ndefintions: []\n")
        .build()
        .unwrap();

    let err = fixture.validate().unwrap_err();

    assert!(matches!(err, ValidateError::Store(StoreError::Parse { .. })));
    assert!(err.to_string().contains("хъан.yaml"));
}

#[test]
fn test_ambiguous_taxonomy_is_fatal() {
    let fixture = CorpusFixture::new()
        .tags("grammar: [pl]\nsemantic: [pl]\n")
        .build()
        .unwrap();

    assert!(matches!(
        fixture.validate(),
        Err(ValidateError::Taxonomy(TaxonomyError::AmbiguousTag { ref tag, .. })) if tag == "pl"
    ));
}
