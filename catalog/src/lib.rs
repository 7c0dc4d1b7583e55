//! Library catalog core: item model, store and browsing state machines.
//!
//! This crate is UI-framework agnostic so the Leptos client (and its tests)
//! can drive search, tabs, access requests and modals without a browser.

pub mod access;
pub mod config;
pub mod dates;
pub mod favorites;
pub mod item;
pub mod modal;
pub mod query;
pub mod search;
pub mod store;
pub mod tabs;
pub mod tour;

pub use access::{AccessRequest, AccessSets, AccessStatus, resolve};
pub use config::LibraryConfig;
pub use favorites::Favorites;
pub use item::{AssetType, CatalogItem, ItemBase, ItemDetails};
pub use modal::ModalManager;
pub use query::{filter_items, group_by_type};
pub use search::{RecentQueries, SearchBox, Ticket};
pub use store::{ItemStore, StoreError};
pub use tabs::{LibraryTab, NAV_TABS, items_for_tab, items_for_tab_name, visible_items};
pub use tour::{COACH_STEPS, CoachStep, Onboarding};
