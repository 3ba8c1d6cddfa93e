//! Slugs and homonym suffixes.

use lexis_alphabet::normalize;

use crate::{IdError, IdResult};

/// Characters that would break the `<unit>/<id>.yaml` file identity.
const FORBIDDEN: [char; 3] = ['/', '\\', '*'];

/// Derive the bare slug of a headword: lowercased, stress marks dropped,
/// whitespace runs joined with `-`.
pub fn slug(headword: &str) -> IdResult<String> {
    let normalized = normalize(headword);
    let slug = normalized.split_whitespace().collect::<Vec<_>>().join("-");
    if slug.is_empty() {
        return Err(IdError::EmptyHeadword);
    }
    if let Some(ch) = slug.chars().find(|c| FORBIDDEN.contains(c) || c.is_control()) {
        return Err(IdError::InvalidCharacter {
            headword: headword.to_string(),
            ch,
        });
    }
    Ok(slug)
}

/// The id carrying homonym suffix `n` (1 is the bare slug).
pub fn suffixed(base: &str, n: u32) -> String {
    if n <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, n)
    }
}

/// Homonym number encoded in `id` relative to `base`: 1 for the bare slug,
/// `n` for `base-n` with n >= 2, `None` if `id` is not derived from `base`.
pub fn homonym_suffix(id: &str, base: &str) -> Option<u32> {
    if id == base {
        return Some(1);
    }
    let digits = id.strip_prefix(base)?.strip_prefix('-')?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|n| *n >= 2)
}
