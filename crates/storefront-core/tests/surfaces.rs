//! Suggestions, carousel, listing and file-backed stores.

mod common;

use std::collections::HashSet;
use std::fs;

use common::*;
use storefront_core::prelude::*;

fn suggestions(engine: &SearchEngine<InMemoryCatalog>, qs: &str) -> Vec<String> {
    match engine.handle_at(&SearchRequest::from_query_string(qs, "es"), now()).unwrap() {
        SearchReply::Suggestions(reply) => reply.suggestions,
        other => panic!("expected suggestions, got {:?}", other),
    }
}

#[test]
fn test_suggestions_from_names_and_categories() {
    let engine = engine();
    assert_eq!(
        suggestions(&engine, "type=suggestions&q=cam"),
        ["Camisa Lino", "Camiseta Básica", "Camisas"]
    );
    assert_eq!(suggestions(&engine, "type=suggestions&q=LUM"), ["Lumen"]);
    assert_eq!(
        suggestions(&engine, "type=suggestions&q=l%C3%A1m"),
        ["Lámpara Nórdica", "Lámparas"]
    );
}

#[test]
fn test_suggestions_capped_in_scan_order() {
    let products: Vec<Product> = (0..12)
        .map(|i| {
            Product::new(format!("s{}", i), "ropa", 10.0, days_ago(100))
                .with_name("es", format!("Shirt {}", i))
                .with_brand("Shirt Co")
        })
        .collect();
    let categories = vec![Category::new("ropa", text("Shirts", "Shirts"))];
    let engine = engine_with(products, categories);

    let found = suggestions(&engine, "type=suggestions&q=shirt");
    let expected: Vec<String> = (0..10).map(|i| format!("Shirt {}", i)).collect();
    assert_eq!(found, expected);
}

#[test]
fn test_suggestions_deduplicate_across_sources() {
    let products = vec![
        Product::new("a", "ropa", 10.0, days_ago(100))
            .with_name("es", "Shirt A")
            .with_brand("Shirtworks"),
        Product::new("b", "ropa", 10.0, days_ago(100))
            .with_name("es", "Shirt A")
            .with_brand("Shirtworks"),
        Product::new("c", "ropa", 10.0, days_ago(100)).with_name("es", "Shirt B"),
    ];
    let categories = vec![Category::new("ropa", text("Shirts", "Shirts"))
        .with_subcategory("vestir", text("Dress Shirts", "Dress Shirts"))
        .with_subcategory("otras", text("Shirts", "Shirts"))];
    let engine = engine_with(products, categories);

    let found = suggestions(&engine, "type=suggestions&q=shirt");
    assert_eq!(found, ["Shirt A", "Shirt B", "Shirtworks", "Shirts", "Dress Shirts"]);

    let unique: HashSet<&String> = found.iter().collect();
    assert_eq!(unique.len(), found.len());
}

#[test]
fn test_suggestion_type_without_q_runs_search() {
    let engine = engine();
    assert_eq!(search(&engine, "type=suggestions&q=").total_products, 5);
    assert_eq!(search(&engine, "type=suggestions").total_products, 5);

    let response = search(&engine, "type=suggestions&onSale=true");
    assert_eq!(ids(&response.products), ["p1", "p3"]);
    assert_eq!(response.total_products, 2);
}

#[test]
fn test_carousel_cascade() {
    let engine = engine();
    let selected = engine.carousel_at(now()).unwrap();

    // New arrivals first (newest first), then featured by rating count.
    assert_eq!(ids(&selected), ["p4", "p1", "p3"]);
    assert_eq!(selected[0].display_badge, Some(Badge::TopSeller));
    assert_eq!(selected[1].display_badge, Some(Badge::Sale { discount_percent: 38 }));
    assert_eq!(selected[2].display_badge, Some(Badge::Sale { discount_percent: 13 }));
}

#[test]
fn test_carousel_prefers_new_arrivals() {
    let mut catalog = products();
    for i in 0..4 {
        catalog.push(Product::new(format!("n{}", i), "ropa", 5.0, days_ago(20 + i)));
    }
    let engine = engine_with(catalog, categories());
    let selected = engine.carousel_at(now()).unwrap();

    assert_eq!(ids(&selected), ["p4", "p1", "n0", "n1"]);
    assert!(selected.len() <= engine.config().carousel_limit);

    let unique: HashSet<&str> = ids(&selected).into_iter().collect();
    assert_eq!(unique.len(), selected.len());
}

#[test]
fn test_carousel_degrades_on_small_catalog() {
    let engine = engine_with(vec![Product::new("x", "ropa", 5.0, days_ago(500))], Vec::new());
    assert!(engine.carousel_at(now()).unwrap().is_empty());
}

#[test]
fn test_listing_and_search_disagree_on_new() {
    let catalog = vec![
        Product::new("recent", "ropa", 10.0, days_ago(10)),
        Product::new("older", "ropa", 10.0, days_ago(45)),
        Product::new("stale", "ropa", 10.0, days_ago(90)),
    ];
    let engine = engine_with(catalog, Vec::new());

    // The listing path counts 60 days as new; search counts 30.
    let listed = engine
        .list_at(&ListingQuery::from_query_string("isNew=true", "es"), now())
        .unwrap();
    assert_eq!(ids(&listed), ["recent", "older"]);

    let searched = search(&engine, "isNew=true");
    assert_eq!(ids(&searched.products), ["recent"]);

    // Badges follow the 30-day rule everywhere.
    assert_eq!(listed[1].display_badge, None);
}

#[test]
fn test_listing_filters() {
    let engine = engine();
    let listed = engine
        .list_at(&ListingQuery::from_query_string("categoryId=hogar&featured=true", "es"), now())
        .unwrap();
    assert_eq!(ids(&listed), ["p4"]);

    let listed = engine
        .list_at(&ListingQuery::from_query_string("onSale=true", "es"), now())
        .unwrap();
    assert_eq!(ids(&listed), ["p1", "p3"]);
}

#[test]
fn test_json_file_catalog_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let products_path = dir.path().join("products.json");
    let categories_path = dir.path().join("categories.json");

    fs::write(&products_path, serde_json::to_string(&products()).unwrap()).unwrap();
    fs::write(&categories_path, serde_json::to_string(&categories()).unwrap()).unwrap();

    let store = JsonFileCatalog::new(&products_path).with_categories(&categories_path);
    let engine = SearchEngine::new(store, taxonomy(), SearchConfig::default());

    let reply = engine
        .handle_at(&SearchRequest::from_query_string("onSale=true&sortBy=price", "es"), now())
        .unwrap();
    match reply {
        SearchReply::Results(response) => assert_eq!(response.total_products, 2),
        other => panic!("unexpected reply: {:?}", other),
    }

    let reply = engine.suggest(&SuggestQuery::new("hog", "es")).unwrap();
    assert_eq!(reply.suggestions, ["Hogar"]);

    fs::write(&products_path, "{ broken").unwrap();
    let err = engine.carousel_at(now()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}
