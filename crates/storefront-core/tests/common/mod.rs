//! Shared catalog fixture for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use storefront_core::prelude::*;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

pub fn text(es: &str, en: &str) -> LocalizedText {
    LocalizedText::new().with("es", es).with("en", en)
}

pub fn taxonomy() -> Taxonomy {
    let config = TaxonomyConfig::from_json(
        r#"{
            "groups": [
                {"id": "season", "name": {"es": "Temporada", "en": "Season"},
                 "tags": ["attr:verano", "attr:summer"]},
                {"id": "style", "name": {"es": "Estilo", "en": "Style"},
                 "tags": ["attr:formal", "attr:nordico", "attr:nordic"]}
            ],
            "tagDetails": {
                "attr:verano": {"name": {"es": "Verano", "en": "Summer"}, "iconName": "sun"},
                "attr:nordico": {"name": {"es": "Nórdico"}}
            },
            "quickFilterIds": ["season"],
            "contextualPrefixes": ["attr:"]
        }"#,
    )
    .unwrap();
    Taxonomy::new(config).unwrap()
}

/// Five products across two categories.
///
/// - `p1`: on sale (38%) and new
/// - `p2`: top seller
/// - `p3`: on sale (13%) and featured
/// - `p4`: new, featured and top seller
/// - `p5`: no badge
pub fn products() -> Vec<Product> {
    vec![
        Product::new("p1", "ropa", 25.0, days_ago(10))
            .with_name("es", "Camisa Lino")
            .with_name("en", "Linen Shirt")
            .with_brand("Acme")
            .with_original_price(40.0)
            .with_tags("es", ["attr:verano", "casual"])
            .with_tags("en", ["attr:summer"])
            .with_variant(
                Variant::new("#000000", text("Negro", "Black"))
                    .with_stock("m", 3)
                    .with_stock("l", 0),
            ),
        Product::new("p2", "ropa", 45.5, days_ago(200))
            .with_name("es", "Pantalón Chino")
            .with_name("en", "Chino Pants")
            .with_brand("Nortex")
            .with_rating(4.8, 150)
            .with_tags("es", ["attr:formal"])
            .with_variant(
                Variant::new("#001f3f", text("Marino", "Navy"))
                    .with_stock("40", 2)
                    .with_stock("42", 1),
            ),
        Product::new("p3", "ropa", 12.99, days_ago(90))
            .with_name("es", "Camiseta Básica")
            .with_name("en", "Basic Tee")
            .with_brand("Acme")
            .with_original_price(15.0)
            .with_rating(4.1, 20)
            .featured()
            .with_tags("es", ["attr:verano"])
            .with_variant(
                Variant::new("#ffffff", text("Blanco", "White"))
                    .with_stock("s", 5)
                    .with_stock("m", 0),
            )
            .with_variant(Variant::new("#000000", text("Azabache", "Jet")).with_stock("s", 1)),
        Product::new("p4", "hogar", 89.0, days_ago(5))
            .with_name("es", "Lámpara Nórdica")
            .with_name("en", "Nordic Lamp")
            .with_brand("Lumen")
            .with_rating(4.9, 300)
            .featured()
            .with_tags("es", ["attr:nordico"])
            .with_tags("en", ["attr:nordic"]),
        Product::new("p5", "hogar", 19.0, days_ago(400))
            .with_name("es", "Jarrón")
            .with_name("en", "Vase")
            .with_brand("Lumen"),
    ]
}

pub fn categories() -> Vec<Category> {
    vec![
        Category::new("ropa", text("Ropa", "Clothing"))
            .with_subcategory("camisas", text("Camisas", "Shirts")),
        Category::new("hogar", text("Hogar", "Home"))
            .with_subcategory("lamparas", text("Lámparas", "Lamps")),
    ]
}

pub fn engine() -> SearchEngine<InMemoryCatalog> {
    engine_with(products(), categories())
}

pub fn engine_with(products: Vec<Product>, categories: Vec<Category>) -> SearchEngine<InMemoryCatalog> {
    SearchEngine::new(
        InMemoryCatalog::new(products, categories),
        taxonomy(),
        SearchConfig::default(),
    )
}

/// Run a search query string as of the fixture's `now`.
pub fn search(engine: &SearchEngine<InMemoryCatalog>, qs: &str) -> SearchResponse {
    search_in(engine, qs, "es")
}

pub fn search_in(engine: &SearchEngine<InMemoryCatalog>, qs: &str, lang: &str) -> SearchResponse {
    match engine.handle_at(&SearchRequest::from_query_string(qs, lang), now()).unwrap() {
        SearchReply::Results(response) => response,
        other => panic!("expected search results, got {:?}", other),
    }
}

pub fn ids(products: &[BadgedProduct]) -> Vec<&str> {
    products.iter().map(|p| p.product.id.as_str()).collect()
}
