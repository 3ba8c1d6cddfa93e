//! Records as the external system exports them.
//!
//! Field names are the external ones. Unknown fields are ignored and `null`
//! is accepted wherever a value is optional. The external `id` is not read;
//! ids are derived from headwords on import.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub headword: Option<String>,
    #[serde(default)]
    pub ipa: Option<String>,
    /// Long-form tag names (`noun`, `transitive`, ...).
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Free text; `Ru:` lines are Russian, `#### Origin` opens the etymology.
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub forms: Option<Vec<RawForm>>,
    #[serde(default)]
    pub definitions: Option<Vec<RawDefinition>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForm {
    #[serde(default)]
    pub text: Option<String>,
    /// The gloss code.
    #[serde(default)]
    pub meaning: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDefinition {
    /// English translation.
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
    #[serde(default)]
    pub examples: Option<Vec<RawExample>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExample {
    #[serde(default)]
    pub text: Option<String>,
    /// English translation.
    #[serde(default)]
    pub meaning: Option<String>,
}
