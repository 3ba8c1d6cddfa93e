//! Import followed by export.

use std::collections::BTreeMap;
use std::fs;

use lexis_core::Text;
use lexis_export::{export_layout, publish_layout, render, ExportError};
use lexis_import::{convert_record, Importer, RawRecord};
use lexis_tests::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn source() -> serde_json::Value {
    json!([
        {
            "id": "x-1",
            "headword": "хъан",
            "ipa": "qχan",
            "tags": ["noun"],
            "note": "#### Origin\nNative.\nRu: Исконное.\n#### Usage\nCommon.",
            "forms": [
                { "text": "хъанни", "meaning": "obl" },
                { "text": "хъанне", "meaning": "pl.erg" }
            ],
            "definitions": [{
                "translation": "house",
                "note": "Ru: дом\nalso a household",
                "tags": ["house"],
                "aliases": ["home", "dwelling"],
                "examples": [{ "text": "хъан ккураб", "meaning": "a big house" }]
            }]
        },
        {
            "id": "x-2",
            "headword": "бец",
            "tags": ["noun"],
            "definitions": [
                { "translation": "wolf", "tags": ["animals"] },
                { "translation": "brave man", "tags": ["coll"] }
            ]
        },
        {
            "id": "x-3",
            "headword": "хъан",
            "tags": ["noun"],
            "definitions": [{ "translation": "roof" }]
        },
        {
            "id": "x-4",
            "headword": "ккъан",
            "tags": ["transitive", "verb"],
            "definitions": [{ "translation": "to dig", "aliases": [" "] }]
        }
    ])
}

#[test]
fn test_import_export_round_trip() {
    // GIVEN
    let fixture = CorpusFixture::new().build().unwrap();
    let path = fixture.write_source(&source()).unwrap();
    let alphabet = fixture.alphabet().unwrap();

    // WHEN
    let report = Importer::new(&fixture.layout, &alphabet)
        .with_provenance("bazur")
        .import_file(&path)
        .unwrap();
    let summary = export_layout(&fixture.layout, &fixture.export_path()).unwrap();

    // THEN - the artifact holds exactly the converted source records
    assert_eq!(report.written.len(), 4);
    assert_eq!(summary.records, 4);

    let artifact: Vec<LexemeRecord> =
        serde_json::from_str(&fs::read_to_string(&summary.output).unwrap()).unwrap();
    let exported: BTreeMap<String, LexemeRecord> =
        artifact.into_iter().map(|r| (r.id.clone(), r)).collect();

    let raw: Vec<RawRecord> = serde_json::from_value(source()).unwrap();
    let ids = ["хъан", "бец", "хъан-2", "ккъан"];
    let expected: BTreeMap<String, LexemeRecord> = raw
        .into_iter()
        .zip(ids)
        .map(|(raw, id)| {
            let mut record = convert_record(raw);
            record.id = id.to_string();
            record.provenance = Some("bazur".to_string());
            (record.id.clone(), record)
        })
        .collect();

    assert_eq!(exported, expected);
}

#[test]
fn test_round_trip_keeps_converted_values() {
    let fixture = CorpusFixture::new().build().unwrap();
    let path = fixture.write_source(&source()).unwrap();
    let alphabet = fixture.alphabet().unwrap();
    Importer::new(&fixture.layout, &alphabet)
        .import_file(&path)
        .unwrap();

    let summary = export_layout(&fixture.layout, &fixture.export_path()).unwrap();
    let artifact: Vec<LexemeRecord> =
        serde_json::from_str(&fs::read_to_string(&summary.output).unwrap()).unwrap();

    // collation order: б, ккъ, хъ, хъ-2
    let ids: Vec<_> = artifact.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["бец", "ккъан", "хъан", "хъан-2"]);

    let house = &artifact[2];
    assert_eq!(house.tags, vec!["n"]);
    assert_eq!(house.ipa.as_deref(), Some("qχan"));
    assert_eq!(
        house.etymology.as_ref().and_then(|e| e.ru.as_deref()),
        Some("Исконное.")
    );
    assert_eq!(house.note.as_ref().and_then(|n| n.en.as_deref()), Some("Common."));
    assert_eq!(house.forms[1].gloss.as_deref(), Some("pl.erg"));
    let def = &house.definitions[0];
    assert_eq!(def.translation.ru.as_deref(), Some("дом"));
    assert_eq!(
        def.aliases.as_ref().and_then(|a| a.en.clone()),
        Some(vec!["home".to_string(), "dwelling".to_string()])
    );

    let wolf = &artifact[0];
    assert_eq!(wolf.definitions[0].tags, vec!["animal"]);
    assert_eq!(artifact[1].tags, vec!["tr", "v"]);
    assert_eq!(artifact[1].definitions[0].aliases, None);
}

#[test]
fn test_export_refuses_invalid_import() {
    // GIVEN - an imported tag the taxonomy does not know
    let fixture = CorpusFixture::new().build().unwrap();
    let path = fixture
        .write_source(&json!([
            { "headword": "бец", "tags": ["ideophone"], "definitions": [{ "translation": "wolf" }] }
        ]))
        .unwrap();
    let alphabet = fixture.alphabet().unwrap();
    Importer::new(&fixture.layout, &alphabet)
        .import_file(&path)
        .unwrap();

    // WHEN
    let result = export_layout(&fixture.layout, &fixture.export_path());

    // THEN
    assert!(matches!(result, Err(ExportError::ValidationFailed { errors: 1, .. })));
    assert!(!fixture.export_path().exists());
}

#[test]
fn test_export_does_not_touch_record_files() {
    let fixture = CorpusFixture::new()
        .entry("б", "бец", "wolf")
        .build()
        .unwrap();
    let record_path = fixture.layout.record_path("б", "бец");
    let before = fs::read(&record_path).unwrap();

    export_layout(&fixture.layout, &fixture.export_path()).unwrap();
    export_layout(&fixture.layout, &fixture.export_path()).unwrap();

    assert_eq!(fs::read(&record_path).unwrap(), before);
}

#[test]
fn test_publish_after_import() {
    // GIVEN - an imported corpus and a taxonomy labelling n and v only
    let fixture = CorpusFixture::new().build().unwrap();
    let path = fixture.write_source(&source()).unwrap();
    let alphabet = fixture.alphabet().unwrap();
    Importer::new(&fixture.layout, &alphabet)
        .import_file(&path)
        .unwrap();

    // WHEN
    let output = fixture.layout.default_publish_path();
    let summary = publish_layout(&fixture.layout, &output).unwrap();

    // THEN
    assert_eq!(
        summary.per_unit,
        vec![
            ("б".to_string(), 1),
            ("ккъ".to_string(), 1),
            ("хъ".to_string(), 2)
        ]
    );
    assert!(output.is_file());
    assert!(!fixture.export_path().exists());

    let sections = render(&fixture.project().unwrap());
    let dig = &sections[1].entries[0];
    assert_eq!(dig.id, "ккъан");
    assert_eq!(
        dig.tags,
        vec![Text {
            en: Some("verb".into()),
            ru: Some("глаг.".into()),
        }]
    );
    // a plain unit list has no vowel metadata, so nothing is stress-marked
    let house = &sections[2].entries[0];
    assert_eq!(house.headword, "хъан");
    assert_eq!(house.forms.len(), 2);
}
