//! Product and variant records.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::StockEntry;
use crate::ids::{CategoryId, ProductId};
use crate::locale::LocalizedText;

/// A product in the catalog.
///
/// Records are immutable to the search core; every operation reads them
/// through shared references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Owning category.
    pub category_id: CategoryId,
    /// Brand name.
    #[serde(default)]
    pub brand: String,
    /// URL-friendly slug.
    #[serde(default)]
    pub slug: String,
    /// Localized product name.
    pub name: LocalizedText,
    /// Localized description.
    #[serde(default)]
    pub description: LocalizedText,
    /// Current selling price.
    pub price: f64,
    /// Price before discount. The product is on sale when this exceeds `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    /// Number of ratings.
    #[serde(default)]
    pub rating_count: u32,
    /// When the product entered the catalog.
    pub date_added: DateTime<Utc>,
    /// Merchandiser pick.
    #[serde(default)]
    pub is_featured: bool,
    /// Tags per language code.
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,
    /// Color variants, in display order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Create a product with no text, tags or variants.
    pub fn new(
        id: impl Into<ProductId>,
        category_id: impl Into<CategoryId>,
        price: f64,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            brand: String::new(),
            slug: String::new(),
            name: LocalizedText::new(),
            description: LocalizedText::new(),
            price,
            original_price: None,
            rating: 0.0,
            rating_count: 0,
            date_added,
            is_featured: false,
            tags: BTreeMap::new(),
            variants: Vec::new(),
        }
    }

    pub fn with_name(mut self, lang: &str, name: impl Into<String>) -> Self {
        self.name.insert(lang, name);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_original_price(mut self, original_price: f64) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_rating(mut self, rating: f64, rating_count: u32) -> Self {
        self.rating = rating;
        self.rating_count = rating_count;
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    pub fn with_tags<I, T>(mut self, lang: &str, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags
            .insert(lang.to_string(), tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Check if the product is discounted.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }

    /// Discount relative to the original price, rounded to a whole percent.
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price.and_then(|original| {
            if original > self.price {
                let percent = (100.0 * (original - self.price) / original).round();
                Some(percent.clamp(0.0, 100.0) as u32)
            } else {
                None
            }
        })
    }

    /// Check if the product was added within `within_days` of `now`.
    ///
    /// A window too large to represent covers every date.
    pub fn is_new(&self, now: DateTime<Utc>, within_days: i64) -> bool {
        match Duration::try_days(within_days) {
            Some(window) => now.signed_duration_since(self.date_added) <= window,
            None => within_days > 0,
        }
    }

    /// Name in `lang`, falling back to `fallback_lang`.
    pub fn display_name(&self, lang: &str, fallback_lang: &str) -> &str {
        self.name.resolve(lang, fallback_lang)
    }

    /// Tags for `lang`, falling back to the `fallback_lang` list.
    pub fn tags_for(&self, lang: &str, fallback_lang: &str) -> &[String] {
        self.tags
            .get(lang)
            .or_else(|| self.tags.get(fallback_lang))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if any variant has one of `codes` as its color code.
    pub fn has_color_in(&self, codes: &BTreeSet<String>) -> bool {
        self.variants.iter().any(|variant| {
            codes
                .iter()
                .any(|code| variant.color_code.eq_ignore_ascii_case(code))
        })
    }

    /// Check if any variant has one of `sizes` in stock.
    pub fn has_size_in_stock(&self, sizes: &BTreeSet<String>) -> bool {
        self.variants
            .iter()
            .flat_map(|variant| variant.inventory.iter())
            .filter(|entry| entry.is_available())
            .any(|entry| sizes.iter().any(|size| entry.is_size(size)))
    }
}

/// A color variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Color code used for filtering (e.g. "#1a1a1a" or "black").
    pub color_code: String,
    /// Localized color name.
    #[serde(default)]
    pub color_name: LocalizedText,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Stock per size.
    #[serde(default)]
    pub inventory: Vec<StockEntry>,
}

impl Variant {
    pub fn new(color_code: impl Into<String>, color_name: LocalizedText) -> Self {
        Self {
            color_code: color_code.into(),
            color_name,
            images: Vec::new(),
            inventory: Vec::new(),
        }
    }

    /// Add a size with its stock.
    pub fn with_stock(mut self, size: impl Into<String>, stock: i64) -> Self {
        self.inventory.push(StockEntry::new(size, stock));
        self
    }
}
