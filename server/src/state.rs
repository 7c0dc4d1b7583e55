//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is read-only, so both halves are plain `Arc`s with no locking.

use std::sync::Arc;

use catalog::{ItemStore, LibraryConfig};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ItemStore>,
    pub library: Arc<LibraryConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(store: ItemStore, library: LibraryConfig) -> Self {
        Self { store: Arc::new(store), library: Arc::new(library) }
    }
}
