//! Free-text filtering and grouping over catalog items.
//!
//! Both helpers borrow their input and return references in input order, so
//! callers can chain tab selection, filtering and grouping without cloning.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::BTreeMap;

use crate::item::{AssetType, CatalogItem};

/// Items whose name, description or any tag contains `query`,
/// case-insensitively.
///
/// A blank query returns every item unchanged.
#[must_use]
pub fn filter_items<'a, I>(items: I, query: &str) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    if query.trim().is_empty() {
        return items.into_iter().collect();
    }
    let needle = query.to_lowercase();
    items.into_iter().filter(|item| item_matches(item, &needle)).collect()
}

/// Whether `item` contains the already-lowercased `needle`.
#[must_use]
pub fn item_matches(item: &CatalogItem, needle: &str) -> bool {
    item.name().to_lowercase().contains(needle)
        || item.description().to_lowercase().contains(needle)
        || item.tags().iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Partition items by type, preserving relative order inside each group.
///
/// Types with no items are absent from the map.
#[must_use]
pub fn group_by_type<'a, I>(items: I) -> BTreeMap<AssetType, Vec<&'a CatalogItem>>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let mut groups: BTreeMap<AssetType, Vec<&'a CatalogItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.asset_type()).or_default().push(item);
    }
    groups
}
