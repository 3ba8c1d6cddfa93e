//! Identifier assignment across import and hand-authored records.

use std::collections::HashSet;

use lexis_ident::{assign, IdAssigner, IdError};
use lexis_import::Importer;
use lexis_tests::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_slug_collision_aborts_import() {
    // GIVEN - a source with repeated headwords and a capitalized spelling
    let fixture = CorpusFixture::new().build().unwrap();
    let source = fixture
        .write_source(&json!([
            { "headword": "бец", "definitions": [{ "translation": "wolf" }] },
            { "headword": "хъан", "definitions": [{ "translation": "house" }] },
            { "headword": "бец", "definitions": [{ "translation": "ram" }] },
            { "headword": "Бец", "definitions": [{ "translation": "Moon (name)" }] },
            { "headword": "ккъан", "definitions": [{ "translation": "?" }] },
            { "headword": "бец", "definitions": [{ "translation": "moon" }] },
        ]))
        .unwrap();
    let alphabet = fixture.alphabet().unwrap();

    // WHEN - "Бец" slugs like "бец" but is a different headword
    let result = Importer::new(&fixture.layout, &alphabet).import_file(&source);

    // THEN - the collision aborts the run before anything is written
    assert!(result.is_err());
    assert!(fixture.corpus().unwrap().is_empty());
}

#[test]
fn test_ids_unique_after_import() {
    let fixture = CorpusFixture::new().build().unwrap();
    let source = fixture
        .write_source(&json!([
            { "headword": "бец", "definitions": [{ "translation": "wolf" }] },
            { "headword": "хъан", "definitions": [{ "translation": "house" }] },
            { "headword": "бец", "definitions": [{ "translation": "ram" }] },
            { "headword": "хъан", "definitions": [{ "translation": "roof" }] },
            { "headword": "бец", "definitions": [{ "translation": "moon" }] },
        ]))
        .unwrap();
    let alphabet = fixture.alphabet().unwrap();

    Importer::new(&fixture.layout, &alphabet)
        .import_file(&source)
        .unwrap();

    let corpus = fixture.corpus().unwrap();
    let ids: HashSet<_> = corpus.records().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), corpus.len());
    assert_eq!(corpus.len(), 5);
}

#[test]
fn test_two_homonyms_get_bare_and_second_suffix() {
    // GIVEN
    let fixture = CorpusFixture::new().build().unwrap();
    let source = fixture
        .write_source(&json!([
            { "headword": "хъан", "definitions": [{ "translation": "house" }] },
            { "headword": "хъан", "definitions": [{ "translation": "roof" }] },
        ]))
        .unwrap();
    let alphabet = fixture.alphabet().unwrap();

    // WHEN
    let report = Importer::new(&fixture.layout, &alphabet)
        .import_file(&source)
        .unwrap();

    // THEN - first processed keeps the bare slug
    let corpus = fixture.corpus().unwrap();
    let house = corpus.get("хъан").unwrap();
    let roof = corpus.get("хъан-2").unwrap();
    assert_eq!(house.record.definitions[0].translation.en.as_deref(), Some("house"));
    assert_eq!(roof.record.definitions[0].translation.en.as_deref(), Some("roof"));
    assert_eq!(report.homonym_sets, 1);
}

#[test]
fn test_next_suffix_follows_highest_existing() {
    // GIVEN - suffixes {bare, 2, 3} were issued and "-2" has since been deleted
    let fixture = CorpusFixture::new()
        .entry("б", "бец", "wolf")
        .record(
            "б",
            "бец-3",
            "id: бец-3\nheadword: бец\ndefinitions:\n  - translation: { en: moon }\n",
        )
        .build()
        .unwrap();
    let corpus = fixture.corpus().unwrap();

    // WHEN
    let id = assign(
        "бец",
        corpus.records().map(|r| (r.id.as_str(), r.headword.as_str())),
    )
    .unwrap();

    // THEN
    assert_eq!(id, "бец-4");
}

#[test]
fn test_slug_taken_by_other_headword_needs_manual_fix() {
    let fixture = CorpusFixture::new()
        .record(
            "б",
            "бец",
            "id: бец\nheadword: бе\u{0301}ц\ndefinitions:\n  - translation: { en: wolf }\n",
        )
        .build()
        .unwrap();
    let corpus = fixture.corpus().unwrap();
    let assigner =
        IdAssigner::from_existing(corpus.records().map(|r| (r.id.as_str(), r.headword.as_str())));

    let result = assigner.candidate("бец");

    assert!(matches!(result, Err(IdError::Collision { ref id, .. }) if id == "бец"));
}
