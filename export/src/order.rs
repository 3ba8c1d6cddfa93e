//! Collation order of records.

use lexis_alphabet::Alphabet;
use lexis_core::LexemeRecord;
use lexis_ident::{homonym_suffix, slug};

/// Homonym number of a record; ids not derived from the headword count as 1.
fn suffix_of(record: &LexemeRecord) -> u32 {
    slug(&record.headword)
        .ok()
        .and_then(|base| homonym_suffix(&record.id, &base))
        .unwrap_or(1)
}

/// Sort records by headword collation, then homonym suffix, then id.
pub fn sort_records(records: &mut [LexemeRecord], alphabet: &Alphabet) {
    records.sort_by_cached_key(|r| {
        (
            alphabet.collation_key(&r.headword),
            suffix_of(r),
            r.id.clone(),
        )
    });
}
