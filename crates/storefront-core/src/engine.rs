//! Request-level entry point tying a catalog store to the pure search
//! operations.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::badge::BadgedProduct;
use crate::carousel;
use crate::catalog::CatalogStore;
use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::error::CatalogError;
use crate::listing::{self, ListingQuery};
use crate::search::{self, SearchQuery, SearchReply, SearchRequest, SearchResponse, SuggestQuery, SuggestionResponse};
use crate::taxonomy::Taxonomy;

/// Storefront search engine.
///
/// Reads a fresh catalog snapshot per request and shares the taxonomy
/// and config across requests. The only error it returns is a store
/// fault; malformed user input degrades to permissive defaults.
#[derive(Debug, Clone)]
pub struct SearchEngine<S: CatalogStore> {
    store: S,
    taxonomy: Arc<Taxonomy>,
    config: Arc<SearchConfig>,
}

impl<S: CatalogStore> SearchEngine<S> {
    pub fn new(store: S, taxonomy: Taxonomy, config: SearchConfig) -> Self {
        Self {
            store,
            taxonomy: Arc::new(taxonomy),
            config: Arc::new(config),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Resolve a request language (code or Accept-Language header).
    pub fn resolve_lang(&self, candidate: Option<&str>) -> String {
        self.config.resolve_lang(candidate)
    }

    fn context(&self, now: DateTime<Utc>) -> SearchContext<'_> {
        SearchContext::new(&self.taxonomy, &self.config, now)
    }

    /// Answer a search endpoint request as of the current time.
    pub fn handle(&self, request: &SearchRequest) -> Result<SearchReply, CatalogError> {
        self.handle_at(request, Utc::now())
    }

    pub fn handle_at(&self, request: &SearchRequest, now: DateTime<Utc>) -> Result<SearchReply, CatalogError> {
        match request {
            SearchRequest::Search(query) => self.search_at(query, now).map(SearchReply::Results),
            SearchRequest::Suggest(query) => self.suggest(query).map(SearchReply::Suggestions),
        }
    }

    pub fn search(&self, query: &SearchQuery) -> Result<SearchResponse, CatalogError> {
        self.search_at(query, Utc::now())
    }

    pub fn search_at(&self, query: &SearchQuery, now: DateTime<Utc>) -> Result<SearchResponse, CatalogError> {
        let start = Instant::now();
        let products = self.store.list_products()?;
        let response = search::execute(&products, query, &self.context(now));

        info!(
            lang = %query.lang,
            catalog = products.len(),
            total = response.total_products,
            elapsed_us = start.elapsed().as_micros() as u64,
            "search"
        );
        Ok(response)
    }

    /// Autocomplete. A blank `q` yields an empty list without touching
    /// the store.
    pub fn suggest(&self, query: &SuggestQuery) -> Result<SuggestionResponse, CatalogError> {
        if query.q.trim().is_empty() {
            return Ok(SuggestionResponse::default());
        }

        let products = self.store.list_products()?;
        let categories = self.store.list_categories()?;
        let suggestions = search::suggest(
            &products,
            &categories,
            &query.q,
            &query.lang,
            &self.config.default_lang,
            self.config.suggestion_limit,
        );

        info!(q = %query.q, lang = %query.lang, count = suggestions.len(), "suggest");
        Ok(SuggestionResponse { suggestions })
    }

    pub fn carousel(&self) -> Result<Vec<BadgedProduct>, CatalogError> {
        self.carousel_at(Utc::now())
    }

    pub fn carousel_at(&self, now: DateTime<Utc>) -> Result<Vec<BadgedProduct>, CatalogError> {
        let products = self.store.list_products()?;
        let selected = carousel::select(&products, &self.context(now));
        info!(count = selected.len(), "carousel");
        Ok(selected)
    }

    pub fn list(&self, query: &ListingQuery) -> Result<Vec<BadgedProduct>, CatalogError> {
        self.list_at(query, Utc::now())
    }

    pub fn list_at(&self, query: &ListingQuery, now: DateTime<Utc>) -> Result<Vec<BadgedProduct>, CatalogError> {
        let products = self.store.list_products()?;
        let listed = listing::list(&products, query, &self.context(now));
        info!(lang = %query.lang, count = listed.len(), "list");
        Ok(listed)
    }
}
