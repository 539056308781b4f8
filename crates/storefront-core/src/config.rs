//! Search and badge configuration.

use serde::{Deserialize, Serialize};

/// Thresholds used by the badge classifier.
///
/// The top-seller rule is a stand-in for a real sales signal, so both
/// numbers are configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeRules {
    /// Minimum average rating (inclusive).
    #[serde(default = "default_top_seller_min_rating")]
    pub top_seller_min_rating: f64,

    /// Rating count that must be exceeded (exclusive).
    #[serde(default = "default_top_seller_min_rating_count")]
    pub top_seller_min_rating_count: u32,
}

fn default_top_seller_min_rating() -> f64 {
    4.5
}

fn default_top_seller_min_rating_count() -> u32 {
    100
}

impl Default for BadgeRules {
    fn default() -> Self {
        Self {
            top_seller_min_rating: default_top_seller_min_rating(),
            top_seller_min_rating_count: default_top_seller_min_rating_count(),
        }
    }
}

/// Configuration shared by every search entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Language used when the request language is missing or unsupported,
    /// and as the fallback for untranslated text.
    #[serde(default = "default_lang")]
    pub default_lang: String,

    /// Languages the storefront serves.
    #[serde(default = "default_supported_langs")]
    pub supported_langs: Vec<String>,

    /// Recency window (days) for the search `isNew` filter, the "new"
    /// badge and the first carousel stage.
    #[serde(default = "default_new_within_days")]
    pub new_within_days: i64,

    /// Recency window (days) of the product listing `isNew` branch.
    #[serde(default = "default_listing_new_within_days")]
    pub listing_new_within_days: i64,

    /// Badge thresholds.
    #[serde(default)]
    pub badges: BadgeRules,

    /// Maximum number of carousel products.
    #[serde(default = "default_carousel_limit")]
    pub carousel_limit: usize,

    /// Maximum number of autocomplete suggestions.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

fn default_lang() -> String {
    "es".to_string()
}

fn default_supported_langs() -> Vec<String> {
    vec!["es".to_string(), "en".to_string()]
}

fn default_new_within_days() -> i64 {
    30
}

// Diverges from `new_within_days` on purpose; the listing endpoint has
// always used a 60 day window.
fn default_listing_new_within_days() -> i64 {
    60
}

fn default_carousel_limit() -> usize {
    4
}

fn default_suggestion_limit() -> usize {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_lang: default_lang(),
            supported_langs: default_supported_langs(),
            new_within_days: default_new_within_days(),
            listing_new_within_days: default_listing_new_within_days(),
            badges: BadgeRules::default(),
            carousel_limit: default_carousel_limit(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl SearchConfig {
    /// Resolve a request language against the supported set.
    pub fn resolve_lang(&self, candidate: Option<&str>) -> String {
        crate::locale::resolve_lang(candidate, &self.supported_langs, &self.default_lang)
    }
}
