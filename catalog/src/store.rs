//! Read-only item store grouped by asset type.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the universe of items every view draws from. It is loaded
//! once from a JSON document keyed by type and never mutated afterwards.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashSet;

use serde::Deserialize;

use crate::item::{AssetType, CatalogItem};

/// Catalog document shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors raised while loading a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document is not valid catalog JSON.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// An item was listed under a type key other than its own `type`.
    #[error("item {id} is a {actual} but is listed under {listed}")]
    MisplacedItem { id: String, listed: AssetType, actual: AssetType },
    /// Two items share the same id.
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
}

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    kpi: Vec<CatalogItem>,
    #[serde(default)]
    dataviz: Vec<CatalogItem>,
    #[serde(default)]
    layout: Vec<CatalogItem>,
    #[serde(default)]
    storyboard: Vec<CatalogItem>,
}

/// Four ordered item lists, one per asset type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemStore {
    kpi: Vec<CatalogItem>,
    dataviz: Vec<CatalogItem>,
    layout: Vec<CatalogItem>,
    storyboard: Vec<CatalogItem>,
}

impl ItemStore {
    /// Load the catalog bundled with this crate.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the bundled document is malformed.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] for malformed JSON,
    /// [`StoreError::MisplacedItem`] when an item sits under the wrong key and
    /// [`StoreError::DuplicateId`] when ids collide.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let doc: CatalogDocument = serde_json::from_str(raw)?;
        let store = Self {
            kpi: doc.kpi,
            dataviz: doc.dataviz,
            layout: doc.layout,
            storyboard: doc.storyboard,
        };
        store.validate()?;
        log::debug!("catalog loaded: {} items", store.len());
        Ok(store)
    }

    /// Build a store from loose items, routing each to its own list.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut store = Self::default();
        for item in items {
            store.list_mut(item.asset_type()).push(item);
        }
        store
    }

    fn validate(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for listed in AssetType::ALL {
            for item in self.items(listed) {
                let actual = item.asset_type();
                if actual != listed {
                    return Err(StoreError::MisplacedItem { id: item.id().to_owned(), listed, actual });
                }
                if !seen.insert(item.id()) {
                    return Err(StoreError::DuplicateId(item.id().to_owned()));
                }
            }
        }
        Ok(())
    }

    fn list_mut(&mut self, asset_type: AssetType) -> &mut Vec<CatalogItem> {
        match asset_type {
            AssetType::Kpi => &mut self.kpi,
            AssetType::Dataviz => &mut self.dataviz,
            AssetType::Layout => &mut self.layout,
            AssetType::Storyboard => &mut self.storyboard,
        }
    }

    /// Items of one type, in catalog order.
    #[must_use]
    pub fn items(&self, asset_type: AssetType) -> &[CatalogItem] {
        match asset_type {
            AssetType::Kpi => &self.kpi,
            AssetType::Dataviz => &self.dataviz,
            AssetType::Layout => &self.layout,
            AssetType::Storyboard => &self.storyboard,
        }
    }

    /// Every item, kpi first, then dataviz, layout and storyboard.
    pub fn all(&self) -> impl Iterator<Item = &CatalogItem> {
        AssetType::ALL.into_iter().flat_map(|t| self.items(t).iter())
    }

    /// The first `take` items of every type, concatenated in type order.
    #[must_use]
    pub fn prefix_slice(&self, take: usize) -> Vec<&CatalogItem> {
        AssetType::ALL
            .into_iter()
            .flat_map(|t| self.items(t).iter().take(take))
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.all().find(|item| item.id() == id)
    }

    /// Number of items of one type.
    #[must_use]
    pub fn count(&self, asset_type: AssetType) -> usize {
        self.items(asset_type).len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        AssetType::ALL.into_iter().map(|t| self.count(t)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
