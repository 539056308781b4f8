//! Product filters.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::CategoryId;

/// Inputs a filter may need besides the product itself.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    pub lang: &'a str,
    pub fallback_lang: &'a str,
    pub now: DateTime<Utc>,
}

/// One filter dimension.
///
/// Filters are combined with AND; set-valued filters match when any of
/// the product's values is in the set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Added within the last `within_days` days.
    NewArrivals { within_days: i64 },
    /// Exact category.
    Category(CategoryId),
    /// Lower-cased substring of any localized name or the brand.
    Text(String),
    /// Any locale tag in the set.
    Tags(BTreeSet<String>),
    /// Original price above current price.
    OnSale,
    /// Any variant color code in the set.
    Colors(BTreeSet<String>),
    /// Any in-stock size in the set.
    Sizes(BTreeSet<String>),
    /// Inclusive price bounds.
    PriceRange { min: Option<f64>, max: Option<f64> },
}

impl Filter {
    /// Create a text filter. Matching is case-insensitive.
    pub fn text(query: impl AsRef<str>) -> Self {
        Filter::Text(query.as_ref().trim().to_lowercase())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<f64>, max: Option<f64>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Short stage name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::NewArrivals { .. } => "isNew",
            Filter::Category(_) => "category",
            Filter::Text(_) => "text",
            Filter::Tags(_) => "tags",
            Filter::OnSale => "onSale",
            Filter::Colors(_) => "colors",
            Filter::Sizes(_) => "sizes",
            Filter::PriceRange { .. } => "price",
        }
    }

    /// Check if `product` passes this filter.
    pub fn matches(&self, product: &Product, ctx: &MatchContext<'_>) -> bool {
        match self {
            Filter::NewArrivals { within_days } => product.is_new(ctx.now, *within_days),
            Filter::Category(id) => &product.category_id == id,
            Filter::Text(needle) => {
                product
                    .name
                    .values()
                    .any(|name| name.to_lowercase().contains(needle.as_str()))
                    || product.brand.to_lowercase().contains(needle.as_str())
            }
            Filter::Tags(tags) => product
                .tags_for(ctx.lang, ctx.fallback_lang)
                .iter()
                .any(|tag| tags.contains(tag)),
            Filter::OnSale => product.is_on_sale(),
            Filter::Colors(codes) => product.has_color_in(codes),
            Filter::Sizes(sizes) => product.has_size_in_stock(sizes),
            Filter::PriceRange { min, max } => {
                min.map_or(true, |min| product.price >= min)
                    && max.map_or(true, |max| product.price <= max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variant;
    use crate::locale::LocalizedText;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn ctx(lang: &str) -> MatchContext<'_> {
        MatchContext {
            lang,
            fallback_lang: "es",
            now: now(),
        }
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn shirt() -> Product {
        Product::new("p1", "ropa", 25.0, now() - Duration::days(10))
            .with_name("es", "Camisa Lino")
            .with_name("en", "Linen Shirt")
            .with_brand("Acme")
            .with_tags("es", ["estilo-casual"])
            .with_tags("en", ["style-casual"])
            .with_variant(
                Variant::new("#000", LocalizedText::new().with("es", "Negro")).with_stock("m", 1),
            )
    }

    #[test]
    fn test_text_matches_any_locale_or_brand() {
        let product = shirt();
        assert!(Filter::text("linen").matches(&product, &ctx("es")));
        assert!(Filter::text("CAMISA").matches(&product, &ctx("en")));
        assert!(Filter::text("acm").matches(&product, &ctx("es")));
        assert!(!Filter::text("pantalon").matches(&product, &ctx("es")));
    }

    #[test]
    fn test_tags_use_request_locale() {
        let product = shirt();
        let filter = Filter::Tags(set(&["style-casual", "other"]));
        assert!(filter.matches(&product, &ctx("en")));
        assert!(!filter.matches(&product, &ctx("es")));
    }

    #[test]
    fn test_price_range_bounds_inclusive() {
        let product = shirt();
        assert!(Filter::price_range(Some(25.0), Some(25.0)).matches(&product, &ctx("es")));
        assert!(!Filter::price_range(Some(25.01), None).matches(&product, &ctx("es")));
        assert!(!Filter::price_range(None, Some(24.99)).matches(&product, &ctx("es")));
    }

    #[test]
    fn test_structural_filters() {
        let product = shirt();
        assert!(Filter::Category(CategoryId::new("ropa")).matches(&product, &ctx("es")));
        assert!(!Filter::Category(CategoryId::new("hogar")).matches(&product, &ctx("es")));
        assert!(Filter::NewArrivals { within_days: 30 }.matches(&product, &ctx("es")));
        assert!(!Filter::NewArrivals { within_days: 5 }.matches(&product, &ctx("es")));
        assert!(!Filter::OnSale.matches(&product, &ctx("es")));
        assert!(Filter::Colors(set(&["#000"])).matches(&product, &ctx("es")));
        assert!(Filter::Sizes(set(&["M"])).matches(&product, &ctx("es")));
        assert!(!Filter::Sizes(set(&["S"])).matches(&product, &ctx("es")));
    }
}
