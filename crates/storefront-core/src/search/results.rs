//! Search response payloads.

use serde::{Deserialize, Serialize};

use crate::badge::BadgedProduct;
use crate::catalog::Product;
use crate::search::AvailableFilters;

/// Whole-unit price bounds for the slider UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    /// Floor of the lowest and ceiling of the highest price, or `{0, 0}`
    /// for an empty set.
    pub fn from_products(products: &[&Product]) -> Self {
        let mut prices = products.iter().map(|product| product.price);
        let Some(first) = prices.next() else {
            return Self::default();
        };

        let (min, max) = prices.fold((first, first), |(min, max), price| {
            (min.min(price), max.max(price))
        });

        Self {
            min: min.floor() as i64,
            max: max.ceil() as i64,
        }
    }
}

/// Response of a faceted search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub products: Vec<BadgedProduct>,
    pub available_filters: AvailableFilters,
    /// Computed before the user price filter.
    pub price_range: PriceRange,
    pub total_products: usize,
}

/// Response of an autocomplete request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
}

/// Whatever the search endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchReply {
    Results(SearchResponse),
    Suggestions(SuggestionResponse),
}

impl SearchReply {
    /// Serialize to the JSON wire format.
    pub fn to_json(&self) -> Result<String, crate::CatalogError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn priced(id: &str, price: f64) -> Product {
        Product::new(id, "ropa", price, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_price_range_floor_and_ceil() {
        let products = [priced("a", 19.99), priced("b", 5.2), priced("c", 42.01)];
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(PriceRange::from_products(&refs), PriceRange { min: 5, max: 43 });
    }

    #[test]
    fn test_price_range_single_and_empty() {
        let products = [priced("a", 10.0)];
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(PriceRange::from_products(&refs), PriceRange { min: 10, max: 10 });
        assert_eq!(PriceRange::from_products(&[]), PriceRange { min: 0, max: 0 });
    }

    #[test]
    fn test_reply_wire_format() {
        let reply = SearchReply::Suggestions(SuggestionResponse {
            suggestions: vec!["Camisa".to_string()],
        });
        assert_eq!(reply.to_json().unwrap(), r#"{"suggestions":["Camisa"]}"#);

        let reply = SearchReply::Results(SearchResponse {
            products: Vec::new(),
            available_filters: AvailableFilters::default(),
            price_range: PriceRange::default(),
            total_products: 0,
        });
        let value: serde_json::Value = serde_json::from_str(&reply.to_json().unwrap()).unwrap();
        assert_eq!(value["priceRange"]["max"], 0);
        assert_eq!(value["totalProducts"], 0);
        assert!(value["availableFilters"]["quickFilters"].as_array().unwrap().is_empty());
    }
}
