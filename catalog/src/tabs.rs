//! Tab names and the item slice each tab shows.
//!
//! DESIGN
//! ======
//! Category tabs map 1:1 to an asset type. Featured and Trending are curated
//! cross-category slices built from fixed-size prefixes of each category.
//! My Favorites draws from the session favorites. Unknown names resolve to an
//! empty list rather than an error.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use crate::config::LibraryConfig;
use crate::favorites::Favorites;
use crate::item::{AssetType, CatalogItem};
use crate::query::filter_items;
use crate::store::ItemStore;

/// A named view over the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LibraryTab {
    #[default]
    Featured,
    Trending,
    Category(AssetType),
    MyFavorites,
}

/// Tabs shown in the navigation bar, in display order.
pub const NAV_TABS: [LibraryTab; 6] = [
    LibraryTab::Featured,
    LibraryTab::Category(AssetType::Kpi),
    LibraryTab::Category(AssetType::Dataviz),
    LibraryTab::Category(AssetType::Layout),
    LibraryTab::Category(AssetType::Storyboard),
    LibraryTab::MyFavorites,
];

impl LibraryTab {
    /// Display name, also accepted by [`LibraryTab::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            LibraryTab::Featured => "Featured",
            LibraryTab::Trending => "Trending",
            LibraryTab::Category(asset_type) => asset_type.label(),
            LibraryTab::MyFavorites => "My Favorites",
        }
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "featured" => Some(LibraryTab::Featured),
            "trending" => Some(LibraryTab::Trending),
            "kpi" => Some(LibraryTab::Category(AssetType::Kpi)),
            "data visualization" => Some(LibraryTab::Category(AssetType::Dataviz)),
            "layout" => Some(LibraryTab::Category(AssetType::Layout)),
            "storyboard" => Some(LibraryTab::Category(AssetType::Storyboard)),
            "my favorites" => Some(LibraryTab::MyFavorites),
            _ => None,
        }
    }

    /// Section subtitle shown under the tab title.
    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            LibraryTab::Featured => "Curated top picks from this week",
            LibraryTab::Trending => "Most popular by community",
            LibraryTab::Category(AssetType::Kpi) => "Key Performance Indicators and metrics",
            LibraryTab::Category(AssetType::Dataviz) => "Data visualization templates and dashboards",
            LibraryTab::Category(AssetType::Layout) => "Page layouts and presentation templates",
            LibraryTab::Category(AssetType::Storyboard) => "Presentation flows and narratives",
            LibraryTab::MyFavorites => "",
        }
    }
}

impl std::fmt::Display for LibraryTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unfiltered items for `tab`, in catalog order.
#[must_use]
pub fn items_for_tab<'a>(
    store: &'a ItemStore,
    tab: LibraryTab,
    favorites: &Favorites,
    config: &LibraryConfig,
) -> Vec<&'a CatalogItem> {
    match tab {
        LibraryTab::Featured => store.prefix_slice(config.featured_take),
        LibraryTab::Trending => store.prefix_slice(config.trending_take),
        LibraryTab::Category(asset_type) => store.items(asset_type).iter().collect(),
        LibraryTab::MyFavorites => store.all().filter(|item| favorites.contains(item.id())).collect(),
    }
}

/// Items for a tab given by name. Unrecognized names yield nothing.
#[must_use]
pub fn items_for_tab_name<'a>(
    store: &'a ItemStore,
    name: &str,
    favorites: &Favorites,
    config: &LibraryConfig,
) -> Vec<&'a CatalogItem> {
    LibraryTab::from_name(name).map_or_else(Vec::new, |tab| items_for_tab(store, tab, favorites, config))
}

/// Items for `tab` narrowed by the free-text `query`.
#[must_use]
pub fn visible_items<'a>(
    store: &'a ItemStore,
    tab: LibraryTab,
    query: &str,
    favorites: &Favorites,
    config: &LibraryConfig,
) -> Vec<&'a CatalogItem> {
    filter_items(items_for_tab(store, tab, favorites, config), query)
}
