//! Curated "hero" carousel selection.

use std::collections::HashSet;

use crate::badge::BadgedProduct;
use crate::catalog::Product;
use crate::context::SearchContext;
use crate::ids::ProductId;

/// Pick up to `carousel_limit` products by cascading fallback.
///
/// 1. New arrivals, newest first.
/// 2. Featured products by rating count, highest first.
/// 3. Products on sale, in catalog order.
///
/// Each stage only adds products not already picked and the cascade
/// stops once the shelf is full. A small catalog yields a short list,
/// never an error.
pub fn select(products: &[Product], ctx: &SearchContext<'_>) -> Vec<BadgedProduct> {
    let limit = ctx.config.carousel_limit;
    let mut shelf = Shelf::new(limit);

    let mut fresh: Vec<&Product> = products
        .iter()
        .filter(|product| product.is_new(ctx.now, ctx.config.new_within_days))
        .collect();
    fresh.sort_by(|a, b| b.date_added.cmp(&a.date_added));
    shelf.fill(fresh);

    if !shelf.is_full() {
        let mut featured: Vec<&Product> = products.iter().filter(|product| product.is_featured).collect();
        featured.sort_by(|a, b| b.rating_count.cmp(&a.rating_count));
        shelf.fill(featured);
    }

    if !shelf.is_full() {
        shelf.fill(products.iter().filter(|product| product.is_on_sale()));
    }

    ctx.classifier().decorate(shelf.picked, ctx.now)
}

struct Shelf<'a> {
    limit: usize,
    picked: Vec<&'a Product>,
    seen: HashSet<&'a ProductId>,
}

impl<'a> Shelf<'a> {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            picked: Vec::with_capacity(limit),
            seen: HashSet::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.picked.len() >= self.limit
    }

    fn fill(&mut self, candidates: impl IntoIterator<Item = &'a Product>) {
        for product in candidates {
            if self.is_full() {
                break;
            }
            if self.seen.insert(&product.id) {
                self.picked.push(product);
            }
        }
    }
}
