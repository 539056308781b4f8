//! Search requests and their query-string form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;
use crate::search::Filter;

/// Field to sort search results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Price,
    Name,
    /// Newest first. The requested direction is ignored for this field.
    DateAdded,
}

impl SortField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "price" => Some(SortField::Price),
            "name" => Some(SortField::Name),
            "dateAdded" => Some(SortField::DateAdded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Name => "name",
            SortField::DateAdded => "dateAdded",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `"desc"` sorts descending; anything else is ascending.
    pub fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Requested ordering of the final result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Optional user price bounds, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceBounds {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// A faceted product search.
///
/// Every dimension is optional; an empty set or `false` flag means the
/// dimension is not filtered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Resolved two-letter language.
    pub lang: String,
    pub category_id: Option<CategoryId>,
    /// Free text matched against names and brand.
    pub text: Option<String>,
    pub tags: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub on_sale: bool,
    pub is_new: bool,
    pub price: PriceBounds,
    /// `None` keeps natural catalog order.
    pub sort: Option<SortSpec>,
}

impl SearchQuery {
    /// Create an unfiltered query for `lang`.
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Set the free-text query. Blank text clears it.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() {
            None
        } else {
            Some(text.trim().to_string())
        };
        self
    }

    pub fn with_tags<I: IntoIterator<Item = S>, S: Into<String>>(mut self, tags: I) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_colors<I: IntoIterator<Item = S>, S: Into<String>>(mut self, colors: I) -> Self {
        self.colors.extend(colors.into_iter().map(Into::into));
        self
    }

    pub fn with_sizes<I: IntoIterator<Item = S>, S: Into<String>>(mut self, sizes: I) -> Self {
        self.sizes.extend(sizes.into_iter().map(Into::into));
        self
    }

    pub fn on_sale(mut self) -> Self {
        self.on_sale = true;
        self
    }

    pub fn new_arrivals(mut self) -> Self {
        self.is_new = true;
        self
    }

    pub fn with_price(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price = PriceBounds { min, max };
        self
    }

    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec { field, direction });
        self
    }

    /// Every filter except price, in pipeline order.
    ///
    /// Applying these yields the pre-price-filter set that the returned
    /// price range is computed from.
    pub fn structural_filters(&self, new_within_days: i64) -> Vec<Filter> {
        let mut filters = Vec::new();

        if self.is_new {
            filters.push(Filter::NewArrivals {
                within_days: new_within_days,
            });
        }
        if let Some(category_id) = &self.category_id {
            filters.push(Filter::Category(category_id.clone()));
        }
        if let Some(text) = &self.text {
            filters.push(Filter::text(text));
        }
        if !self.tags.is_empty() {
            filters.push(Filter::Tags(self.tags.clone()));
        }
        if self.on_sale {
            filters.push(Filter::OnSale);
        }
        if !self.colors.is_empty() {
            filters.push(Filter::Colors(self.colors.clone()));
        }
        if !self.sizes.is_empty() {
            filters.push(Filter::Sizes(self.sizes.clone()));
        }

        filters
    }

    /// The user price filter, applied after the price range is taken.
    pub fn price_filter(&self) -> Option<Filter> {
        if self.price.is_empty() {
            None
        } else {
            Some(Filter::price_range(self.price.min, self.price.max))
        }
    }
}

/// An autocomplete request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuggestQuery {
    pub q: String,
    pub lang: String,
}

impl SuggestQuery {
    pub fn new(q: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            lang: lang.into(),
        }
    }
}

/// A request to the search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    Search(SearchQuery),
    Suggest(SuggestQuery),
}

impl SearchRequest {
    /// Parse a URL query string (without the leading `?`).
    ///
    /// Unknown keys are ignored. Blank values and numbers that fail to
    /// parse are treated as absent, so parsing never fails.
    pub fn from_query_string(qs: &str, lang: &str) -> Self {
        let mut query = SearchQuery::new(lang);
        let mut wants_suggestions = false;
        let mut q = String::new();
        let mut sort_field = None;
        let mut direction = SortDirection::Asc;

        for (key, value) in parse_pairs(qs) {
            match key.as_str() {
                "q" => q = value,
                "type" => wants_suggestions = value == "suggestions",
                "categoryId" => {
                    if !value.trim().is_empty() {
                        query.category_id = Some(CategoryId::new(value.trim()));
                    }
                }
                "tags" => query.tags = parse_list(&value),
                "colors" => query.colors = parse_list(&value),
                "sizes" => query.sizes = parse_list(&value),
                "onSale" => query.on_sale = parse_flag(&value),
                "isNew" => query.is_new = parse_flag(&value),
                "minPrice" => query.price.min = parse_number(&value),
                "maxPrice" => query.price.max = parse_number(&value),
                "sortBy" => sort_field = SortField::from_str(value.trim()),
                "order" => direction = SortDirection::from_str(value.trim()),
                _ => {}
            }
        }

        // Suggestion mode needs something to complete; otherwise search.
        if wants_suggestions && !q.trim().is_empty() {
            return SearchRequest::Suggest(SuggestQuery::new(q.trim(), lang));
        }

        query = query.with_text(q);
        query.sort = sort_field.map(|field| SortSpec { field, direction });
        SearchRequest::Search(query)
    }
}

/// Split a query string into decoded key/value pairs.
pub(crate) fn parse_pairs(qs: &str) -> Vec<(String, String)> {
    qs.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Comma-separated list; items are trimmed and blanks dropped.
pub(crate) fn parse_list(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

pub(crate) fn parse_flag(value: &str) -> bool {
    value.trim() == "true"
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Percent-decoding for query components (`+` is a space).
fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(high), Some(low)) => {
                        decoded.push(high << 4 | low);
                        i += 2;
                    }
                    _ => decoded.push(b'%'),
                }
            }
            other => decoded.push(other),
        }
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(qs: &str) -> SearchQuery {
        match SearchRequest::from_query_string(qs, "es") {
            SearchRequest::Search(query) => query,
            other => panic!("expected search, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_full_query() {
        let query = search(
            "categoryId=ropa&q=camisa&tags=a,b&colors=%23fff&sizes=m,%20l&onSale=true&isNew=true\
             &minPrice=10&maxPrice=99.5&sortBy=price&order=desc",
        );
        assert_eq!(query.category_id, Some(CategoryId::new("ropa")));
        assert_eq!(query.text.as_deref(), Some("camisa"));
        assert_eq!(query.tags.len(), 2);
        assert!(query.colors.contains("#fff"));
        assert!(query.sizes.contains("l"));
        assert!(query.on_sale && query.is_new);
        assert_eq!(query.price.min, Some(10.0));
        assert_eq!(query.price.max, Some(99.5));
        assert_eq!(
            query.sort,
            Some(SortSpec {
                field: SortField::Price,
                direction: SortDirection::Desc
            })
        );
    }

    #[test]
    fn test_blank_and_malformed_values_are_absent() {
        let query = search("categoryId=&q=%20&tags=,,&minPrice=abc&maxPrice=NaN&onSale=yes&sortBy=rating");
        assert_eq!(query, SearchQuery::new("es"));
        assert!(query.structural_filters(30).is_empty());
        assert!(query.price_filter().is_none());
    }

    #[test]
    fn test_suggestion_mode() {
        let request = SearchRequest::from_query_string("type=suggestions&q=camisa+blanca", "en");
        assert_eq!(
            request,
            SearchRequest::Suggest(SuggestQuery::new("camisa blanca", "en"))
        );
    }

    #[test]
    fn test_suggestion_type_without_q_is_a_search() {
        let query = search("type=suggestions&onSale=true");
        assert!(query.on_sale);
        assert!(query.text.is_none());

        let query = search("type=suggestions&q=%20%20");
        assert_eq!(query, SearchQuery::new("es"));
    }

    #[test]
    fn test_filters_follow_pipeline_order() {
        let query = SearchQuery::new("es")
            .with_sizes(["m"])
            .with_colors(["black"])
            .on_sale()
            .with_tags(["t"])
            .with_text("shirt")
            .with_category("ropa")
            .new_arrivals()
            .with_price(Some(1.0), None);

        let names: Vec<&str> = query
            .structural_filters(30)
            .iter()
            .map(Filter::name)
            .collect();
        assert_eq!(
            names,
            ["isNew", "category", "text", "tags", "onSale", "colors", "sizes"]
        );
        assert_eq!(query.price_filter().map(|f| f.name()), Some("price"));
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("a%20b+c"), "a b c");
        assert_eq!(decode_component("camis%C3%B3n"), "camisón");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }
}
