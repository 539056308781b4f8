//! Tag to filter-group lookup.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::warn;

use crate::taxonomy::GroupLayout;

/// Maps each tag to the id of the filter group that owns it.
///
/// Built once from the taxonomy layout and never mutated afterwards, so a
/// shared reference can be read from any number of requests. Tags that are
/// not listed under any group have no entry and are left out of facet
/// aggregation.
#[derive(Debug, Clone, Default)]
pub struct TagGroupIndex {
    groups: HashMap<String, String>,
}

impl TagGroupIndex {
    /// Build the index from the declared group layout.
    ///
    /// A tag listed under more than one group stays with the first group
    /// that declares it.
    pub fn build(layout: &[GroupLayout]) -> Self {
        let mut groups = HashMap::new();

        for group in layout {
            for tag in &group.tags {
                match groups.entry(tag.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(group.id.clone());
                    }
                    Entry::Occupied(owner) => {
                        warn!(
                            tag = %tag,
                            owner = %owner.get(),
                            ignored = %group.id,
                            "tag listed under more than one filter group"
                        );
                    }
                }
            }
        }

        Self { groups }
    }

    /// Group that owns `tag`, if any.
    pub fn group_of(&self, tag: &str) -> Option<&str> {
        self.groups.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
