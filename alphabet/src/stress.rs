//! Stress marks from IPA transcriptions.
//!
//! The IPA of a headword carries primary and secondary stress marks. Vowel
//! units in the alphabet table name their IPA symbol, which lets the stress be
//! carried over to the written form as a combining acute after the vowel.

use std::collections::HashMap;

use crate::Alphabet;

const PRIMARY: char = 'ˈ';
const SECONDARY: char = 'ˌ';
const COMBINING_ACUTE: char = '\u{0301}';
const VOWEL_KIND: &str = "vowel";

/// One segment of a transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sound {
    Stress,
    Vowel(char),
    Other(char),
}

impl Alphabet {
    /// IPA symbol -> written vowel, for units typed `vowel` with a
    /// single-character IPA.
    pub fn vowels(&self) -> HashMap<char, &str> {
        self.units()
            .iter()
            .filter_map(|unit| {
                let info = self.info(unit)?;
                if info.kind.as_deref() != Some(VOWEL_KIND) {
                    return None;
                }
                let mut ipa = info.ipa.as_deref()?.chars();
                match (ipa.next(), ipa.next()) {
                    (Some(symbol), None) => Some((symbol, unit.as_str())),
                    _ => None,
                }
            })
            .collect()
    }

    /// Put a stress mark after every stressed vowel of `headword`.
    ///
    /// Stress on a word part with a single vowel is predictable and dropped.
    /// When the transcription and the spelling disagree on the vowels, the
    /// headword is returned unchanged.
    pub fn mark_stress(&self, headword: &str, ipa: &str) -> String {
        let vowels = self.vowels();
        let sounds = drop_predictable(transcribe(ipa, &vowels));
        if !sounds.contains(&Sound::Stress) {
            return headword.to_string();
        }

        let mut marked = headword.to_string();
        let mut from = 0;
        let mut stressed = false;
        for sound in sounds {
            match sound {
                Sound::Stress => stressed = true,
                Sound::Vowel(symbol) => {
                    let Some(written) = vowels.get(&symbol) else {
                        continue;
                    };
                    let Some(offset) = marked[from..].find(*written) else {
                        return headword.to_string();
                    };
                    from += offset + written.len();
                    if stressed {
                        marked.insert(from, COMBINING_ACUTE);
                        from += COMBINING_ACUTE.len_utf8();
                        stressed = false;
                    }
                }
                Sound::Other(_) => {}
            }
        }
        marked
    }
}

fn transcribe(ipa: &str, vowels: &HashMap<char, &str>) -> Vec<Sound> {
    ipa.chars()
        .map(|c| match c {
            PRIMARY | SECONDARY | '\'' => Sound::Stress,
            c if vowels.contains_key(&c) => Sound::Vowel(c),
            c => Sound::Other(c),
        })
        .collect()
}

/// Remove stress marks from word parts (split at space and hyphen) that hold
/// at most one vowel.
fn drop_predictable(sounds: Vec<Sound>) -> Vec<Sound> {
    let mut out = Vec::with_capacity(sounds.len());
    for part in sounds.split_inclusive(|s| matches!(s, Sound::Other(' ' | '-'))) {
        let vowels = part.iter().filter(|s| matches!(s, Sound::Vowel(_))).count();
        out.extend(
            part.iter()
                .filter(|s| vowels > 1 || **s != Sound::Stress)
                .copied(),
        );
    }
    out
}
