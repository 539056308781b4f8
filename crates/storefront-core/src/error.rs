//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the catalog store and taxonomy loading.
///
/// The search pipeline itself never fails on user input; these are the
/// only faults that cross the engine boundary.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A flat catalog file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A flat catalog file is not valid JSON for its record type.
    #[error("Corrupt catalog data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing store is unavailable for any other reason.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// The taxonomy configuration cannot be used to build a tag index.
    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
