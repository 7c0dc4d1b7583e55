//! Page-level library state (tab, query, favorites, access, dialogs, tour).
//!
//! DESIGN
//! ======
//! One plain struct held in an `RwSignal` context. Every mutation goes through
//! a method that delegates to the `catalog` state machines, so components only
//! read snapshots and fire callbacks. Derived views (`section_entries`,
//! `request_groups`) return owned rows because Leptos views outlive borrows.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use catalog::{
    AccessRequest, AccessSets, AccessStatus, AssetType, CatalogItem, Favorites, ItemStore, LibraryConfig, LibraryTab,
    ModalManager, Onboarding, group_by_type, visible_items,
};

/// One card in a library section: the item plus its derived access status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardEntry {
    pub item: CatalogItem,
    pub access: AccessStatus,
}

/// One category block of the request-access checklist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestGroup {
    pub asset_type: AssetType,
    pub items: Vec<CatalogItem>,
}

impl RequestGroup {
    /// Ids of every item in the group, for "Select all".
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id().to_owned()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryState {
    pub active_tab: LibraryTab,
    /// Last query emitted by the search debouncer.
    pub search_query: String,
    pub favorites: Favorites,
    pub access: AccessSets,
    pub request: AccessRequest,
    pub modal: ModalManager,
    pub onboarding: Onboarding,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new(&LibraryConfig::default(), true)
    }
}

impl LibraryState {
    pub fn new(config: &LibraryConfig, onboarding_completed: bool) -> Self {
        Self {
            active_tab: LibraryTab::default(),
            search_query: String::new(),
            favorites: Favorites::default(),
            access: AccessSets::with_granted(config.granted_ids.iter().cloned()),
            request: AccessRequest::default(),
            modal: ModalManager::default(),
            onboarding: Onboarding::from_completed(onboarding_completed),
        }
    }

    // =========================================================================
    // Browsing
    // =========================================================================

    pub fn set_tab(&mut self, tab: LibraryTab) {
        self.active_tab = tab;
    }

    pub fn apply_search(&mut self, query: &str) {
        query.clone_into(&mut self.search_query);
    }

    /// The Trending section is only shown under the Featured tab.
    pub fn shows_trending(&self) -> bool {
        self.active_tab == LibraryTab::Featured
    }

    /// Cards for `tab` under the current query, each with its access status.
    pub fn section_entries(&self, store: &ItemStore, tab: LibraryTab, config: &LibraryConfig) -> Vec<CardEntry> {
        visible_items(store, tab, &self.search_query, &self.favorites, config)
            .into_iter()
            .map(|item| CardEntry { item: item.clone(), access: self.access.status(item.id()) })
            .collect()
    }

    // =========================================================================
    // Favorites and detail modal
    // =========================================================================

    /// Flip favorite membership; returns whether `id` is now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn open_item(&mut self, id: &str) {
        self.modal.open(id);
    }

    pub fn close_item(&mut self) {
        self.modal.close();
    }

    /// The item shown in the detail modal, if it still exists in `store`.
    pub fn selected_item(&self, store: &ItemStore) -> Option<CatalogItem> {
        self.modal.selected().and_then(|id| store.get(id)).cloned()
    }

    // =========================================================================
    // Access requests
    // =========================================================================

    pub fn access_status(&self, id: &str) -> AccessStatus {
        self.access.status(id)
    }

    pub fn open_request(&mut self) {
        self.request.open();
    }

    /// Close the dialog. The selection is kept for the next open.
    pub fn close_request(&mut self) {
        self.request.close();
    }

    pub fn toggle_request_item(&mut self, id: &str) {
        self.request.toggle_select(id);
    }

    pub fn toggle_request_group(&mut self, ids: &[String]) {
        self.request.toggle_all(ids.iter().map(String::as_str));
    }

    /// Submit the selection; returns how many ids moved to pending.
    pub fn submit_request(&mut self) -> usize {
        self.request.submit(&mut self.access)
    }

    pub fn selected_request_ids(&self) -> Vec<String> {
        self.request.selection().map(str::to_owned).collect()
    }

    /// Items with neither access nor a pending request, grouped by category.
    pub fn request_groups(&self, store: &ItemStore) -> Vec<RequestGroup> {
        group_by_type(self.access.inaccessible(store.all()))
            .into_iter()
            .map(|(asset_type, items)| RequestGroup { asset_type, items: items.into_iter().cloned().collect() })
            .collect()
    }

    // =========================================================================
    // Onboarding tour
    // =========================================================================

    pub fn skip_intro(&mut self) {
        self.onboarding.dismiss_intro();
    }

    pub fn start_tour(&mut self) {
        self.onboarding.start();
    }

    pub fn next_step(&mut self) {
        self.onboarding.next();
    }

    pub fn previous_step(&mut self) {
        self.onboarding.previous();
    }

    /// End the tour; returns `true` when completion should be persisted.
    pub fn finish_tour(&mut self) -> bool {
        self.onboarding.complete()
    }
}
