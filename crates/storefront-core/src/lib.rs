//! Faceted product search for a storefront catalog.
//!
//! This crate provides the read side of a storefront:
//!
//! - **Catalog**: Products, variants, categories and the read-only store
//! - **Taxonomy**: Filter group layout and the tag-to-group index
//! - **Search**: Filter pipeline, facet aggregation, sorting, autocomplete
//! - **Badges**: Sale / top seller / new classification
//! - **Carousel** and **Listing**: curated and plain product lists
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_core::prelude::*;
//!
//! let store = JsonFileCatalog::new("data/products.json");
//! let taxonomy = Taxonomy::new(TaxonomyConfig::load(Path::new("data/taxonomy.json"))?)?;
//! let engine = SearchEngine::new(store, taxonomy, SearchConfig::default());
//!
//! let request = SearchRequest::from_query_string("q=camisa&sortBy=price&order=desc", "es");
//! println!("{}", engine.handle(&request)?.to_json()?);
//! ```

pub mod error;
pub mod ids;
pub mod locale;

pub mod badge;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod listing;
pub mod search;
pub mod taxonomy;

pub use error::CatalogError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::locale::LocalizedText;

    // Catalog
    pub use crate::catalog::{
        CatalogStore, Category, InMemoryCatalog, JsonFileCatalog, Product, StockEntry,
        Subcategory, Variant,
    };

    // Configuration
    pub use crate::config::{BadgeRules, SearchConfig};
    pub use crate::context::SearchContext;
    pub use crate::taxonomy::{GroupLayout, TagDetail, TagGroupIndex, Taxonomy, TaxonomyConfig};

    // Search
    pub use crate::badge::{Badge, BadgeClassifier, BadgedProduct};
    pub use crate::engine::SearchEngine;
    pub use crate::listing::ListingQuery;
    pub use crate::search::{
        AvailableFilters, Filter, PriceBounds, PriceRange, SearchQuery, SearchReply, SearchRequest,
        SearchResponse, SortDirection, SortField, SuggestQuery, SuggestionResponse,
    };
}
