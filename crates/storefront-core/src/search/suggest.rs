//! Autocomplete suggestions.

use std::collections::HashSet;

use crate::catalog::{Category, Product};

/// Collect up to `limit` distinct suggestions containing `q`.
///
/// Matching is a case-insensitive substring test. Sources are scanned in
/// a fixed order (product names, brands, category names, subcategory
/// names) into one pool, so earlier sources win when the limit is hit.
pub fn suggest(
    products: &[Product],
    categories: &[Category],
    q: &str,
    lang: &str,
    fallback_lang: &str,
    limit: usize,
) -> Vec<String> {
    let needle = q.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let names = products
        .iter()
        .map(|product| product.display_name(lang, fallback_lang));
    let brands = products.iter().map(|product| product.brand.as_str());
    let category_names = categories
        .iter()
        .map(|category| category.name.resolve(lang, fallback_lang));
    let subcategory_names = categories
        .iter()
        .flat_map(|category| category.subcategories.iter())
        .map(|subcategory| subcategory.name.resolve(lang, fallback_lang));

    let mut seen = HashSet::new();
    names
        .chain(brands)
        .chain(category_names)
        .chain(subcategory_names)
        .filter(|candidate| !candidate.is_empty())
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .filter(|candidate| seen.insert(*candidate))
        .take(limit)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocalizedText;
    use chrono::{TimeZone, Utc};

    fn product(id: &str, name: &str, brand: &str) -> Product {
        Product::new(id, "ropa", 10.0, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .with_name("es", name)
            .with_brand(brand)
    }

    #[test]
    fn test_scan_order_and_dedup() {
        let products = vec![
            product("1", "Camisa Oxford", "Camisería Real"),
            product("2", "Camisa Oxford", "Acme"),
            product("3", "Pantalón", "Camisetas SA"),
        ];
        let categories = vec![Category::new("ropa", LocalizedText::new().with("es", "Camisas"))
            .with_subcategory("polo", LocalizedText::new().with("es", "Camisas polo"))];

        let suggestions = suggest(&products, &categories, "CAMIS", "es", "es", 10);
        assert_eq!(
            suggestions,
            ["Camisa Oxford", "Camisería Real", "Camisetas SA", "Camisas", "Camisas polo"]
        );
    }

    #[test]
    fn test_limit_and_blank_query() {
        let products: Vec<Product> = (0..12)
            .map(|i| product(&i.to_string(), &format!("Shirt {}", i), ""))
            .collect();

        let suggestions = suggest(&products, &[], "shirt", "en", "es", 10);
        assert_eq!(suggestions.len(), 10);
        assert_eq!(suggestions[0], "Shirt 0");
        assert_eq!(suggestions[9], "Shirt 9");

        assert!(suggest(&products, &[], "  ", "en", "es", 10).is_empty());
    }
}
