//! Collation and grouping by orthographic unit.

use lexis_alphabet::Grapheme;
use lexis_export::{export_layout, sort_records};
use lexis_import::Importer;
use lexis_tests::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_units_order_follows_table_not_code_points() {
    // GIVEN - every pair of units A before B in the table
    let fixture = CorpusFixture::new().build().unwrap();
    let alphabet = fixture.alphabet().unwrap();
    let units = alphabet.units().to_vec();

    // THEN - any word starting with A sorts before any word starting with B
    for (i, a) in units.iter().enumerate() {
        for b in &units[i + 1..] {
            let word_a = format!("{}я", a);
            let word_b = format!("{}а", b);
            assert!(
                alphabet.compare(&word_a, &word_b).is_lt(),
                "{word_a} should sort before {word_b}"
            );
        }
    }
}

#[test]
fn test_collation_is_total_and_consistent() {
    let fixture = CorpusFixture::new().build().unwrap();
    let alphabet = fixture.alphabet().unwrap();
    let words = ["хъан", "хан", "ккъан", "ккан", "кан", "къан", "а", "а-б", "аб", "Хан", "ёж"];

    for a in words {
        for b in words {
            let ab = alphabet.compare(a, b);
            let ba = alphabet.compare(b, a);
            assert_eq!(ab, ba.reverse(), "{a} vs {b}");
            for c in words {
                if ab.is_le() && alphabet.compare(b, c).is_le() {
                    assert!(alphabet.compare(a, c).is_le(), "{a} <= {b} <= {c}");
                }
            }
        }
    }
}

#[test]
fn test_digraph_headword_grouped_under_digraph() {
    // GIVEN - "хъ" and "ккъ" are registered, as are "х", "к" and "кк"
    let fixture = CorpusFixture::new().build().unwrap();
    let alphabet = fixture.alphabet().unwrap();
    assert_eq!(alphabet.leading_unit("ккъан"), Some(Grapheme::Unit("ккъ")));

    let source = fixture
        .write_source(&json!([
            { "headword": "хъан", "definitions": [{ "translation": "house" }] },
            { "headword": "ккъан", "definitions": [{ "translation": "?" }] },
            { "headword": "хан", "definitions": [{ "translation": "khan" }] },
        ]))
        .unwrap();

    // WHEN
    Importer::new(&fixture.layout, &alphabet)
        .import_file(&source)
        .unwrap();

    // THEN
    assert!(fixture.layout.record_path("хъ", "хъан").is_file());
    assert!(fixture.layout.record_path("ккъ", "ккъан").is_file());
    assert!(fixture.layout.record_path("х", "хан").is_file());
    assert!(!fixture.layout.unit_dir("к").exists());
}

#[test]
fn test_export_order() {
    let fixture = CorpusFixture::new()
        .entry("хъ", "хъан", "house")
        .record(
            "хъ",
            "хъан-2",
            "id: хъан-2\nheadword: хъан\ndefinitions:\n  - translation: { en: roof }\n",
        )
        .entry("х", "хан", "khan")
        .entry("я", "яц", "apricot")
        .entry("а", "ана", "mother")
        .entry("кк", "ккаца", "dog")
        .entry("к", "кур", "lamb")
        .build()
        .unwrap();

    let summary = export_layout(&fixture.layout, &fixture.export_path()).unwrap();

    let artifact: Vec<LexemeRecord> =
        serde_json::from_str(&std::fs::read_to_string(&summary.output).unwrap()).unwrap();
    let ids: Vec<_> = artifact.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["ана", "кур", "ккаца", "хан", "хъан", "хъан-2", "яц"]);

    // sort_records agrees with the artifact
    let mut records = fixture.corpus().unwrap().into_records();
    sort_records(&mut records, &fixture.alphabet().unwrap());
    assert_eq!(records, artifact);
}
