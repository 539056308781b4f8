//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use storefront_core::catalog::JsonFileCatalog;
use storefront_core::engine::SearchEngine;
use storefront_core::taxonomy::{Taxonomy, TaxonomyConfig};
use storefront_observability::{LogFormat, LogLevel, RequestId, RequestLogger};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    pub config: CliConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one above cwd.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, Path::new(path));
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory catalog paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path())
    }

    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        resolve(self.base_dir(), path)
    }

    /// Load the taxonomy, or an empty one when none is configured.
    pub fn taxonomy(&self) -> Result<Taxonomy> {
        let Some(path) = &self.config.catalog.taxonomy else {
            self.output.debug("No taxonomy configured; tag facets disabled");
            return Ok(Taxonomy::empty());
        };

        let path = self.resolve_path(path);
        let config = TaxonomyConfig::load(&path)
            .with_context(|| format!("Failed to load taxonomy: {}", path.display()))?;
        Taxonomy::new(config).context("Failed to build tag index")
    }

    /// Build an engine over the configured catalog files.
    pub fn engine(&self) -> Result<SearchEngine<JsonFileCatalog>> {
        let products = self.resolve_path(&self.config.catalog.products);
        self.output.debug(&format!("Catalog: {}", products.display()));

        let mut store = JsonFileCatalog::new(products);
        if let Some(categories) = &self.config.catalog.categories {
            store = store.with_categories(self.resolve_path(categories));
        }

        Ok(SearchEngine::new(store, self.taxonomy()?, self.config.search.clone()))
    }

    /// Per-request logger; summaries show up with `--verbose`.
    pub fn request_logger(&self, operation: &str, query: &str) -> RequestLogger {
        let level = if self.output.is_verbose() {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };
        let format = if self.output.is_json() {
            LogFormat::Json
        } else {
            LogFormat::Human
        };

        RequestLogger::new(RequestId::generate())
            .with_operation(operation)
            .with_query(query)
            .with_min_level(level)
            .with_format(format)
    }
}

/// Find the nearest config file walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Parse an RFC 3339 instant for `--now`.
pub fn parse_now(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("storefront.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.join("storefront.toml")));
    }

    #[test]
    fn test_parse_now() {
        let now = parse_now("2024-06-01T12:00:00+02:00").unwrap();
        assert_eq!(now.to_rfc3339(), "2024-06-01T10:00:00+00:00");
        assert!(parse_now("yesterday").is_err());
    }
}
