//! Per-request evaluation context.

use chrono::{DateTime, Utc};

use crate::badge::BadgeClassifier;
use crate::config::SearchConfig;
use crate::taxonomy::Taxonomy;

/// Everything a pure search operation needs besides the catalog itself.
///
/// Holds borrowed, process-wide state plus the request's notion of "now",
/// so every recency rule within one request agrees on the same instant.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    pub taxonomy: &'a Taxonomy,
    pub config: &'a SearchConfig,
    pub now: DateTime<Utc>,
}

impl<'a> SearchContext<'a> {
    pub fn new(taxonomy: &'a Taxonomy, config: &'a SearchConfig, now: DateTime<Utc>) -> Self {
        Self {
            taxonomy,
            config,
            now,
        }
    }

    /// Language used when a translation is missing.
    pub fn fallback_lang(&self) -> &'a str {
        &self.config.default_lang
    }

    pub fn classifier(&self) -> BadgeClassifier {
        BadgeClassifier::from_config(self.config)
    }
}
