//! Product catalog module.
//!
//! Contains the read-only product and category records and the store
//! seam the search engine reads snapshots through.

mod category;
mod inventory;
mod product;
mod store;

pub use category::{Category, Subcategory};
pub use inventory::StockEntry;
pub use product::{Product, Variant};
pub use store::{CatalogStore, InMemoryCatalog, JsonFileCatalog};
