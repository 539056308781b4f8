//! The filter/search pipeline.

use tracing::debug;

use crate::catalog::Product;
use crate::context::SearchContext;
use crate::search::{facets, sort, MatchContext, PriceRange, SearchQuery, SearchResponse};

/// Run a faceted search over a catalog snapshot.
///
/// Stages run in a fixed order: the structural filters (recency, category,
/// text, tags, on sale, colors, sizes), then the price range is taken from
/// what survived, then the user price bounds are applied. Facets are
/// aggregated over the final set, which is then sorted and badged.
pub fn execute(products: &[Product], query: &SearchQuery, ctx: &SearchContext<'_>) -> SearchResponse {
    let match_ctx = MatchContext {
        lang: &query.lang,
        fallback_lang: ctx.fallback_lang(),
        now: ctx.now,
    };

    let mut matched: Vec<&Product> = products.iter().collect();

    for filter in query.structural_filters(ctx.config.new_within_days) {
        matched.retain(|product| filter.matches(product, &match_ctx));
        debug!(stage = filter.name(), remaining = matched.len(), "applied filter");
    }

    let price_range = PriceRange::from_products(&matched);

    if let Some(filter) = query.price_filter() {
        matched.retain(|product| filter.matches(product, &match_ctx));
        debug!(stage = filter.name(), remaining = matched.len(), "applied filter");
    }

    let available_filters = facets::aggregate(&matched, &query.lang, ctx);

    sort::sort_products(&mut matched, query.sort, &query.lang, ctx.fallback_lang());

    let products = ctx.classifier().decorate(matched, ctx.now);

    SearchResponse {
        total_products: products.len(),
        products,
        available_filters,
        price_range,
    }
}
