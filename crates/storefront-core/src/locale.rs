//! Localized text and language resolution.
//!
//! Every piece of localized catalog text is a map from a two-letter
//! language code to a string. Reads always go through [`resolve_text`]
//! so the fallback rule lives in exactly one place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text keyed by two-letter language code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Create an empty text map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add a translation, consuming and returning the map.
    pub fn with(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(lang, text);
        self
    }

    /// Insert or replace a translation.
    pub fn insert(&mut self, lang: impl Into<String>, text: impl Into<String>) {
        self.0.insert(lang.into(), text.into());
    }

    /// Get the translation for an exact language code.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    /// Iterate over every translation.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Resolve this text for `lang`, see [`resolve_text`].
    pub fn resolve(&self, lang: &str, fallback_lang: &str) -> &str {
        resolve_text(self, lang, fallback_lang)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Resolve localized text.
///
/// Tries `lang`, then `fallback_lang`, then any translation at all, and
/// finally the empty string.
pub fn resolve_text<'a>(text: &'a LocalizedText, lang: &str, fallback_lang: &str) -> &'a str {
    text.get(lang)
        .or_else(|| text.get(fallback_lang))
        .or_else(|| text.values().next())
        .unwrap_or("")
}

/// Resolve a request language.
///
/// `candidate` may be a bare code (`"en"`) or a raw `Accept-Language`
/// header (`"en-US,en;q=0.9"`). Only the first two letters of the first
/// entry count. Unsupported or empty input resolves to `default_lang`.
pub fn resolve_lang(candidate: Option<&str>, supported: &[String], default_lang: &str) -> String {
    let code = candidate
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| value.len() >= 2 && value.is_char_boundary(2))
        .map(|value| value[..2].to_ascii_lowercase());

    match code {
        Some(code) if supported.iter().any(|lang| lang == &code) => code,
        _ => default_lang.to_string(),
    }
}
