//! Facet aggregation over a result set.
//!
//! Options are derived from the products that survived every filter, so
//! each returned option matches at least one product in the response.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::context::SearchContext;

/// A selectable tag option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    /// Tag value to send back in `tags`.
    pub value: String,
    /// Display name in the request language.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

/// A tag-backed filter group with its remaining options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub id: String,
    pub name: String,
    pub options: Vec<FilterOption>,
}

/// A color present in the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorOption {
    pub color_code: String,
    pub color_name: String,
}

/// Every facet still meaningful for the current results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableFilters {
    pub quick_filters: Vec<FilterGroup>,
    pub modal_filters: Vec<FilterGroup>,
    pub colors: Vec<ColorOption>,
    pub sizes: Vec<String>,
}

impl AvailableFilters {
    pub fn is_empty(&self) -> bool {
        self.quick_filters.is_empty()
            && self.modal_filters.is_empty()
            && self.colors.is_empty()
            && self.sizes.is_empty()
    }
}

/// Aggregate tag groups, colors and sizes over `products`.
pub fn aggregate(products: &[&Product], lang: &str, ctx: &SearchContext<'_>) -> AvailableFilters {
    let fallback = ctx.fallback_lang();
    let taxonomy = ctx.taxonomy;

    let mut group_tags: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut seen_tags: HashSet<&str> = HashSet::new();
    let mut colors = Vec::new();
    let mut seen_colors: HashSet<String> = HashSet::new();
    let mut sizes: HashSet<String> = HashSet::new();

    for product in products {
        for tag in product.tags_for(lang, fallback) {
            if !taxonomy.is_contextual(tag) {
                continue;
            }
            // Unindexed tags are dropped silently.
            let Some(group_id) = taxonomy.index().group_of(tag) else {
                continue;
            };
            if seen_tags.insert(tag.as_str()) {
                group_tags.entry(group_id).or_default().push(tag.as_str());
            }
        }

        for variant in &product.variants {
            if seen_colors.insert(variant.color_code.to_ascii_lowercase()) {
                colors.push(ColorOption {
                    color_code: variant.color_code.clone(),
                    color_name: variant.color_name.resolve(lang, fallback).to_string(),
                });
            }
            for entry in &variant.inventory {
                sizes.insert(entry.size.to_uppercase());
            }
        }
    }

    let mut quick_filters = Vec::new();
    let mut modal_filters = Vec::new();

    for layout in taxonomy.groups() {
        let Some(tags) = group_tags.get(layout.id.as_str()) else {
            continue;
        };
        let group = FilterGroup {
            id: layout.id.clone(),
            name: layout.name.resolve(lang, fallback).to_string(),
            options: tags.iter().map(|tag| tag_option(tag, lang, ctx)).collect(),
        };
        if taxonomy.is_quick(&group.id) {
            quick_filters.push(group);
        } else {
            modal_filters.push(group);
        }
    }

    AvailableFilters {
        quick_filters,
        modal_filters,
        colors,
        sizes: sort_sizes(sizes.into_iter().collect()),
    }
}

fn tag_option(tag: &str, lang: &str, ctx: &SearchContext<'_>) -> FilterOption {
    match ctx.taxonomy.tag_detail(tag) {
        Some(detail) => {
            let name = detail.name.resolve(lang, ctx.fallback_lang());
            FilterOption {
                value: tag.to_string(),
                name: (if name.is_empty() { tag } else { name }).to_string(),
                icon_name: detail.icon_name.clone(),
                hex: detail.hex.clone(),
            }
        }
        None => FilterOption {
            value: tag.to_string(),
            name: tag.to_string(),
            icon_name: None,
            hex: None,
        },
    }
}

/// Numeric order when every size is a number, lexicographic otherwise.
pub fn sort_sizes(mut sizes: Vec<String>) -> Vec<String> {
    let numeric: Option<Vec<f64>> = sizes.iter().map(|size| size.trim().parse().ok()).collect();

    match numeric {
        Some(values) if !values.is_empty() => {
            let mut pairs: Vec<(f64, String)> = values.into_iter().zip(sizes).collect();
            pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
            pairs.into_iter().map(|(_, size)| size).collect()
        }
        _ => {
            sizes.sort();
            sizes
        }
    }
}
