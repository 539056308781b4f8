//! Category taxonomy used by autocomplete.

use crate::ids::CategoryId;
use crate::locale::LocalizedText;
use serde::{Deserialize, Serialize};

/// A top-level product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: LocalizedText,
    /// Child categories, in display order.
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// A second-level category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subcategory {
    pub id: CategoryId,
    pub name: LocalizedText,
}

impl Category {
    /// Create a category with no subcategories.
    pub fn new(id: impl Into<CategoryId>, name: LocalizedText) -> Self {
        Self {
            id: id.into(),
            name,
            subcategories: Vec::new(),
        }
    }

    /// Add a subcategory.
    pub fn with_subcategory(mut self, id: impl Into<CategoryId>, name: LocalizedText) -> Self {
        self.subcategories.push(Subcategory {
            id: id.into(),
            name,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_json() {
        let json = r#"{
            "id": "ropa",
            "name": {"es": "Ropa", "en": "Clothing"},
            "subcategories": [{"id": "camisas", "name": {"es": "Camisas"}}]
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id.as_str(), "ropa");
        assert_eq!(category.subcategories.len(), 1);
        assert_eq!(category.subcategories[0].name.get("es"), Some("Camisas"));
    }

    #[test]
    fn test_subcategories_default_empty() {
        let category: Category =
            serde_json::from_str(r#"{"id": "hogar", "name": {"es": "Hogar"}}"#).unwrap();
        assert!(category.subcategories.is_empty());
    }
}
