//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_core::config::SearchConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the catalog and taxonomy live.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Search tuning passed to the engine.
    #[serde(default)]
    pub search: SearchConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Catalog file locations, relative to the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON array of products.
    #[serde(default = "default_products")]
    pub products: PathBuf,

    /// JSON array of categories, used for suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<PathBuf>,

    /// Filter taxonomy. Without it no tag facets are produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<PathBuf>,
}

fn default_products() -> PathBuf {
    PathBuf::from("data/products.json")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: default_products(),
            categories: None,
            taxonomy: None,
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront search configuration

[catalog]
products = "data/products.json"
categories = "data/categories.json"
taxonomy = "data/taxonomy.json"

[search]
default_lang = "es"
supported_langs = ["es", "en"]
# Recency window for search filters, badges and the carousel.
new_within_days = 30
# Recency window for the plain listing's isNew filter.
listing_new_within_days = 60
carousel_limit = 4
suggestion_limit = 10

[search.badges]
top_seller_min_rating = 4.5
top_seller_min_rating_count = 100
"#
    .to_string()
}
