//! Plain product listing.
//!
//! The storefront's general listing endpoint. Unlike the search pipeline
//! it uses its own recency window (`listing_new_within_days`) for
//! `isNew`, and computes no facets.

use serde::{Deserialize, Serialize};

use crate::badge::BadgedProduct;
use crate::catalog::Product;
use crate::context::SearchContext;
use crate::ids::CategoryId;
use crate::search::{parse_flag, parse_pairs, Filter, MatchContext};

/// Listing filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    pub lang: String,
    pub category_id: Option<CategoryId>,
    pub is_new: bool,
    pub on_sale: bool,
    pub featured: bool,
}

impl ListingQuery {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            ..Default::default()
        }
    }

    /// Parse `categoryId`, `isNew`, `onSale` and `featured` from a query string.
    pub fn from_query_string(qs: &str, lang: &str) -> Self {
        let mut query = Self::new(lang);
        for (key, value) in parse_pairs(qs) {
            match key.as_str() {
                "categoryId" if !value.trim().is_empty() => {
                    query.category_id = Some(CategoryId::new(value.trim()));
                }
                "isNew" => query.is_new = parse_flag(&value),
                "onSale" => query.on_sale = parse_flag(&value),
                "featured" => query.featured = parse_flag(&value),
                _ => {}
            }
        }
        query
    }

    fn filters(&self, new_within_days: i64) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(category_id) = &self.category_id {
            filters.push(Filter::Category(category_id.clone()));
        }
        if self.is_new {
            filters.push(Filter::NewArrivals {
                within_days: new_within_days,
            });
        }
        if self.on_sale {
            filters.push(Filter::OnSale);
        }
        filters
    }
}

/// List products matching `query` in catalog order, badged.
pub fn list(products: &[Product], query: &ListingQuery, ctx: &SearchContext<'_>) -> Vec<BadgedProduct> {
    let match_ctx = MatchContext {
        lang: &query.lang,
        fallback_lang: ctx.fallback_lang(),
        now: ctx.now,
    };
    let filters = query.filters(ctx.config.listing_new_within_days);

    let matched = products.iter().filter(|product| {
        (!query.featured || product.is_featured)
            && filters.iter().all(|filter| filter.matches(product, &match_ctx))
    });

    ctx.classifier().decorate(matched, ctx.now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::taxonomy::Taxonomy;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_listing_query() {
        let query = ListingQuery::from_query_string("categoryId=ropa&isNew=true&featured=true&x=1", "en");
        assert_eq!(query.category_id, Some(CategoryId::new("ropa")));
        assert!(query.is_new && query.featured && !query.on_sale);
        assert_eq!(query.lang, "en");
    }

    #[test]
    fn test_featured_and_category() {
        let products = vec![
            Product::new("a", "ropa", 10.0, now()).featured(),
            Product::new("b", "ropa", 10.0, now()),
            Product::new("c", "hogar", 10.0, now()).featured(),
        ];
        let taxonomy = Taxonomy::empty();
        let config = SearchConfig::default();
        let ctx = SearchContext::new(&taxonomy, &config, now());

        let mut query = ListingQuery::new("es");
        query.category_id = Some(CategoryId::new("ropa"));
        query.featured = true;

        let listed = list(&products, &query, &ctx);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].product.id.as_str(), "a");
    }

    #[test]
    fn test_listing_new_window_is_wider_than_search() {
        let products = vec![Product::new("a", "ropa", 10.0, now() - Duration::days(45))];
        let taxonomy = Taxonomy::empty();
        let config = SearchConfig::default();
        let ctx = SearchContext::new(&taxonomy, &config, now());

        let mut query = ListingQuery::new("es");
        query.is_new = true;

        let listed = list(&products, &query, &ctx);
        assert_eq!(listed.len(), 1);
        // Listed as new, yet too old for the "new" badge.
        assert_eq!(listed[0].display_badge, None);
    }
}
