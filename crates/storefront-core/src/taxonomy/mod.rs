//! Filter taxonomy: group layout, tag details and the tag index.

mod index;

pub use index::TagGroupIndex;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::locale::LocalizedText;

/// One filter group as declared in the taxonomy layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupLayout {
    /// Group identifier (e.g. "style").
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: LocalizedText,
    /// Tags belonging to this group, in every language.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Display details for a single tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagDetail {
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

/// Static taxonomy resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyConfig {
    /// Filter groups in display order.
    #[serde(default)]
    pub groups: Vec<GroupLayout>,
    /// Display details keyed by tag.
    #[serde(default)]
    pub tag_details: HashMap<String, TagDetail>,
    /// Group ids rendered as quick filters; all others go to the modal.
    #[serde(default)]
    pub quick_filter_ids: Vec<String>,
    /// Prefixes marking contextual (attribute) tags. Empty means every tag
    /// is contextual.
    #[serde(default)]
    pub contextual_prefixes: Vec<String>,
}

impl TaxonomyConfig {
    /// Parse a taxonomy from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a taxonomy JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Taxonomy plus its tag index, built once at startup.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    config: TaxonomyConfig,
    index: TagGroupIndex,
}

impl Taxonomy {
    /// Validate the config and build the tag index.
    pub fn new(config: TaxonomyConfig) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for group in &config.groups {
            if group.id.trim().is_empty() {
                return Err(CatalogError::InvalidTaxonomy(
                    "filter group with empty id".to_string(),
                ));
            }
            if !seen.insert(group.id.as_str()) {
                return Err(CatalogError::InvalidTaxonomy(format!(
                    "duplicate filter group id: {}",
                    group.id
                )));
            }
        }

        let index = TagGroupIndex::build(&config.groups);
        Ok(Self { config, index })
    }

    /// A taxonomy with no groups; every tag is unmapped.
    pub fn empty() -> Self {
        Self {
            config: TaxonomyConfig::default(),
            index: TagGroupIndex::default(),
        }
    }

    pub fn index(&self) -> &TagGroupIndex {
        &self.index
    }

    pub fn config(&self) -> &TaxonomyConfig {
        &self.config
    }

    /// Groups in declared layout order.
    pub fn groups(&self) -> &[GroupLayout] {
        &self.config.groups
    }

    pub fn tag_detail(&self, tag: &str) -> Option<&TagDetail> {
        self.config.tag_details.get(tag)
    }

    /// Check if `tag` belongs to the contextual namespace.
    pub fn is_contextual(&self, tag: &str) -> bool {
        self.config.contextual_prefixes.is_empty()
            || self
                .config
                .contextual_prefixes
                .iter()
                .any(|prefix| tag.starts_with(prefix.as_str()))
    }

    /// Check if `group_id` is rendered as a quick filter.
    pub fn is_quick(&self, group_id: &str) -> bool {
        self.config.quick_filter_ids.iter().any(|id| id == group_id)
    }
}
