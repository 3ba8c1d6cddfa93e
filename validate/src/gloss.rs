//! Gloss code shape.
//!
//! A gloss is one or more comma-separated alternatives (`ipfv,pfv`), each a
//! period-separated run of fused categories (`pl.erg`). The vocabulary itself
//! is open, so only the shape is checked.

use regex_lite::Regex;

use crate::{ValidateError, ValidateResult};

const GLOSS_PATTERN: &str =
    r"^[A-Za-z0-9]+(\.[A-Za-z0-9]+)*(,\s?[A-Za-z0-9]+(\.[A-Za-z0-9]+)*)*$";

/// Compiled gloss shape check.
#[derive(Debug, Clone)]
pub struct GlossChecker {
    pattern: Regex,
}

impl GlossChecker {
    pub fn new() -> ValidateResult<Self> {
        let pattern =
            Regex::new(GLOSS_PATTERN).map_err(|e| ValidateError::Pattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    pub fn is_well_formed(&self, gloss: &str) -> bool {
        self.pattern.is_match(gloss)
    }
}
