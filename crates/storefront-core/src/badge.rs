//! Promotional badges.
//!
//! A badge is computed from product state when a response is built. It is
//! never stored and never feeds back into filtering, sorting or facets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::config::{BadgeRules, SearchConfig};

/// The single badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Badge {
    /// Discounted against the original price.
    Sale {
        #[serde(rename = "discountPercent")]
        discount_percent: u32,
    },
    /// Highly rated by many customers.
    TopSeller,
    /// Recently added.
    New,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Sale { .. } => "sale",
            Badge::TopSeller => "topSeller",
            Badge::New => "new",
        }
    }
}

/// Assigns at most one badge per product.
///
/// Rules are checked in a fixed order and the first match wins:
/// sale, then top seller, then new.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeClassifier {
    rules: BadgeRules,
    new_within_days: i64,
}

impl BadgeClassifier {
    pub fn new(rules: BadgeRules, new_within_days: i64) -> Self {
        Self {
            rules,
            new_within_days,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.badges.clone(), config.new_within_days)
    }

    /// Classify a product as of `now`.
    pub fn classify(&self, product: &Product, now: DateTime<Utc>) -> Option<Badge> {
        if let Some(discount_percent) = product.discount_percent() {
            return Some(Badge::Sale { discount_percent });
        }

        if product.rating >= self.rules.top_seller_min_rating
            && product.rating_count > self.rules.top_seller_min_rating_count
        {
            return Some(Badge::TopSeller);
        }

        if product.is_new(now, self.new_within_days) {
            return Some(Badge::New);
        }

        None
    }

    /// Clone each product into a badged response record, keeping order.
    pub fn decorate<'p, I>(&self, products: I, now: DateTime<Utc>) -> Vec<BadgedProduct>
    where
        I: IntoIterator<Item = &'p Product>,
    {
        products
            .into_iter()
            .map(|product| BadgedProduct {
                display_badge: self.classify(product, now),
                product: product.clone(),
            })
            .collect()
    }
}

/// A product as serialized in responses: the catalog record plus its badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgedProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_badge: Option<Badge>,
}
