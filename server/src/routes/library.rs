//! Read-only JSON views of the catalog and the effective library config.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use catalog::{AssetType, CatalogItem, LibraryConfig};

use crate::state::AppState;

/// `GET /api/catalog`: every item keyed by its type, in catalog order.
pub async fn list_catalog(State(state): State<AppState>) -> Json<BTreeMap<AssetType, Vec<CatalogItem>>> {
    let grouped = AssetType::ALL
        .into_iter()
        .map(|asset_type| (asset_type, state.store.items(asset_type).to_vec()))
        .collect();
    Json(grouped)
}

/// `GET /api/config`: the library settings the server was started with.
pub async fn library_config(State(state): State<AppState>) -> Json<LibraryConfig> {
    Json(state.library.as_ref().clone())
}
