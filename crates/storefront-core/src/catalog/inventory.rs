//! Per-size stock entries.

use serde::{Deserialize, Serialize};

/// Stock for one size of a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockEntry {
    /// Size label as stored in the catalog (e.g. "m", "42").
    pub size: String,
    /// Units on hand. Negative values are treated as out of stock.
    #[serde(default)]
    pub stock: i64,
}

impl StockEntry {
    pub fn new(size: impl Into<String>, stock: i64) -> Self {
        Self {
            size: size.into(),
            stock,
        }
    }

    /// Check if this size can be purchased.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Check if this entry is for `size`, ignoring ASCII case.
    pub fn is_size(&self, size: &str) -> bool {
        self.size.eq_ignore_ascii_case(size)
    }
}
