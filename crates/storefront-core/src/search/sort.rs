//! Result ordering.

use std::cmp::Ordering;

use crate::catalog::Product;
use crate::search::{SortDirection, SortField, SortSpec};

/// Sort `products` in place according to `spec`.
///
/// The sort is stable, so equal keys keep catalog order. Without a spec
/// the natural order is left untouched.
pub fn sort_products<'p>(
    products: &mut [&'p Product],
    spec: Option<SortSpec>,
    lang: &str,
    fallback_lang: &str,
) {
    let Some(spec) = spec else {
        return;
    };

    match spec.field {
        SortField::Price => {
            products.sort_by(|a, b| directed(a.price.total_cmp(&b.price), spec.direction));
        }
        SortField::Name => {
            let mut keyed: Vec<(String, &'p Product)> = products
                .iter()
                .map(|product| (product.display_name(lang, fallback_lang).to_lowercase(), *product))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| directed(a.cmp(b), spec.direction));
            for (slot, (_, product)) in products.iter_mut().zip(keyed) {
                *slot = product;
            }
        }
        // Always newest first.
        SortField::DateAdded => {
            products.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        }
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
