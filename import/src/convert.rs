//! Mapping external records onto the lexeme model.

use lexis_core::{Aliases, Definition, Example, Form, Lang, LexemeRecord, Text};

use crate::{RawDefinition, RawRecord};

/// Long-form grammar names and their glossing abbreviations.
const GRAMMAR_TAGS: &[(&str, &str)] = &[
    ("noun", "n"),
    ("verb", "v"),
    ("verbal", "nmlz"),
    ("nominal", "n.nmlz"),
    ("adjective", "adj"),
    ("adverb", "adv"),
    ("pronoun", "pro"),
    ("numeral", "num"),
    ("conjunction", "conj"),
    ("interjection", "intj"),
    ("postposition", "post"),
    ("preposition", "prep"),
    ("determiner", "det"),
    ("particle", "ptcl"),
    ("copula", "cop"),
    ("clitic", "clt"),
    ("transitive", "tr"),
    ("intransitive", "intr"),
    ("labile", "lbl"),
    ("phrasal", "phr"),
    ("class", "cls"),
    ("plural", "pl"),
];

/// Misspellings found in the external data, applied before the grammar map.
const TYPO_FIXES: &[(&str, &str)] = &[
    ("intrasitive", "intr"),
    ("intranstive", "intr"),
    ("instransitive", "intr"),
    ("trasitive", "tr"),
    ("lablile", "lbl"),
    ("varbal", "nmlz"),
    ("phrasl", "phr"),
    ("phrasak", "phr"),
    ("pharasal", "phr"),
    ("phrase", "phr"),
    ("arabuc", "arabic"),
    ("conjucntion", "conj"),
    ("animals", "animal"),
    ("cloting", "clothing"),
    ("clothes", "clothing"),
    ("profesion", "profession"),
    ("agruculture", "agriculture"),
    ("technology", "tech"),
    ("linguistic", "linguistics"),
];

const RU_PREFIX: &str = "Ru:";
const HEADING: &str = "####";
const ORIGIN_HEADING: &str = "#### Origin";

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Normalize one external tag. Blank tags are dropped.
pub fn convert_tag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }
    let tag = lookup(TYPO_FIXES, tag).unwrap_or(tag);
    Some(lookup(GRAMMAR_TAGS, tag).unwrap_or(tag).to_string())
}

fn convert_tags(tags: Option<Vec<String>>) -> Vec<String> {
    tags.unwrap_or_default()
        .iter()
        .filter_map(|t| convert_tag(t))
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Collects note lines per language.
#[derive(Default)]
struct Lines {
    en: Vec<String>,
    ru: Vec<String>,
}

impl Lines {
    fn push(&mut self, line: &str) {
        match line.strip_prefix(RU_PREFIX) {
            Some(rest) => self.ru.push(rest.strip_prefix(' ').unwrap_or(rest).to_string()),
            None => self.en.push(line.to_string()),
        }
    }

    fn into_text(self) -> Option<Text> {
        let mut text = Text::new();
        if !self.en.is_empty() {
            text.set(Lang::En, self.en.join("\n"));
        }
        if !self.ru.is_empty() {
            text.set(Lang::Ru, self.ru.join("\n"));
        }
        (!text.is_empty()).then_some(text)
    }
}

fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Split a note into English lines and `Ru:` lines.
pub fn parse_note(text: &str) -> Option<Text> {
    let mut lines = Lines::default();
    content_lines(text).for_each(|l| lines.push(l));
    lines.into_text()
}

/// Separate the `#### Origin` section of a word-level note from the rest.
/// Returns `(etymology, remaining note)`.
pub fn split_etymology(text: &str) -> (Option<Text>, Option<Text>) {
    if !text.contains(HEADING) {
        return (None, parse_note(text));
    }

    let mut origin = Lines::default();
    let mut rest = Lines::default();
    let mut in_origin = false;
    for line in text.lines().map(str::trim) {
        if line.starts_with(ORIGIN_HEADING) {
            in_origin = true;
        } else if line.starts_with(HEADING) {
            in_origin = false;
        } else if line.is_empty() {
            continue;
        } else if in_origin {
            origin.push(line);
        } else {
            rest.push(line);
        }
    }
    (origin.into_text(), rest.into_text())
}

fn convert_definition(raw: RawDefinition) -> Definition {
    let mut translation = Text::new();
    if let Some(en) = non_blank(raw.translation) {
        translation.set(Lang::En, en);
    }

    // Russian note lines are the Russian translation; the rest stays a note.
    let mut note = None;
    if let Some(parsed) = raw.note.as_deref().and_then(parse_note) {
        if let Some(ru) = parsed.ru {
            translation.set(Lang::Ru, ru);
        }
        note = parsed.en.map(Text::english);
    }

    let aliases: Vec<String> = raw
        .aliases
        .unwrap_or_default()
        .into_iter()
        .filter(|a| !a.trim().is_empty())
        .collect();

    let examples = raw
        .examples
        .unwrap_or_default()
        .into_iter()
        .map(|ex| Example {
            text: ex.text.unwrap_or_default(),
            translation: non_blank(ex.meaning).map(Text::english),
        })
        .collect();

    Definition {
        translation,
        tags: convert_tags(raw.tags),
        aliases: (!aliases.is_empty()).then(|| Aliases::english(aliases)),
        note,
        examples,
    }
}

/// Convert an external record. The id is left empty for the assigner.
pub fn convert_record(raw: RawRecord) -> LexemeRecord {
    let (etymology, note) = match raw.note.as_deref() {
        Some(text) => split_etymology(text),
        None => (None, None),
    };

    LexemeRecord {
        id: String::new(),
        headword: raw.headword.unwrap_or_default().trim().to_string(),
        ipa: non_blank(raw.ipa),
        tags: convert_tags(raw.tags),
        forms: raw
            .forms
            .unwrap_or_default()
            .into_iter()
            .map(|f| Form {
                text: f.text.unwrap_or_default(),
                gloss: non_blank(f.meaning),
            })
            .collect(),
        variants: Vec::new(),
        definitions: raw
            .definitions
            .unwrap_or_default()
            .into_iter()
            .map(convert_definition)
            .collect(),
        etymology,
        note,
        derived_from: Vec::new(),
        see_also: Vec::new(),
        provenance: None,
    }
}
