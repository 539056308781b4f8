//! Read-only catalog store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::{Category, Product};
use crate::error::CatalogError;

/// Source of catalog snapshots.
///
/// The search core only ever reads through this trait. Faults are
/// returned as-is to the caller; nothing here retries.
pub trait CatalogStore {
    /// Every product, in natural catalog order.
    fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Every category, in display order.
    fn list_categories(&self) -> Result<Vec<Category>, CatalogError>;
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Snapshot another store into memory.
    pub fn snapshot(store: &impl CatalogStore) -> Result<Self, CatalogError> {
        Ok(Self::new(store.list_products()?, store.list_categories()?))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.clone())
    }
}

/// Catalog backed by flat JSON array files, re-read on every call.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    products_path: PathBuf,
    categories_path: Option<PathBuf>,
}

impl JsonFileCatalog {
    pub fn new(products_path: impl Into<PathBuf>) -> Self {
        Self {
            products_path: products_path.into(),
            categories_path: None,
        }
    }

    /// Read categories from `path`. Without it the category list is empty.
    pub fn with_categories(mut self, path: impl Into<PathBuf>) -> Self {
        self.categories_path = Some(path.into());
        self
    }

    pub fn products_path(&self) -> &Path {
        &self.products_path
    }
}

impl CatalogStore for JsonFileCatalog {
    fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        read_json_array(&self.products_path)
    }

    fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        match &self.categories_path {
            Some(path) => read_json_array(path),
            None => Ok(Vec::new()),
        }
    }
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<T> = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), records = records.len(), "loaded catalog file");
    Ok(records)
}
