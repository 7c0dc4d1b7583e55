use super::*;

fn store() -> ItemStore {
    ItemStore::builtin().unwrap()
}

fn ids<'a>(items: &[&'a CatalogItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.id()).collect()
}

// =============================================================
// Names
// =============================================================

#[test]
fn from_name_is_case_insensitive() {
    assert_eq!(LibraryTab::from_name("FEATURED"), Some(LibraryTab::Featured));
    assert_eq!(LibraryTab::from_name("data visualization"), Some(LibraryTab::Category(AssetType::Dataviz)));
    assert_eq!(LibraryTab::from_name("My Favorites"), Some(LibraryTab::MyFavorites));
    assert_eq!(LibraryTab::from_name("Podcasts"), None);
}

#[test]
fn names_round_trip_through_from_name() {
    for tab in NAV_TABS.into_iter().chain([LibraryTab::Trending]) {
        assert_eq!(LibraryTab::from_name(tab.name()), Some(tab));
    }
}

#[test]
fn nav_tabs_exclude_trending() {
    assert!(!NAV_TABS.contains(&LibraryTab::Trending));
    assert_eq!(NAV_TABS[0], LibraryTab::default());
}

#[test]
fn subtitles() {
    assert_eq!(LibraryTab::Featured.subtitle(), "Curated top picks from this week");
    assert_eq!(LibraryTab::Trending.subtitle(), "Most popular by community");
    assert_eq!(LibraryTab::Category(AssetType::Layout).subtitle(), "Page layouts and presentation templates");
    assert_eq!(LibraryTab::MyFavorites.subtitle(), "");
}

// =============================================================
// items_for_tab
// =============================================================

#[test]
fn featured_takes_two_from_each_category() {
    let store = store();
    let items = items_for_tab(&store, LibraryTab::Featured, &Favorites::default(), &LibraryConfig::default());
    assert_eq!(
        ids(&items),
        ["kpi-1", "kpi-2", "viz-pie", "viz-line", "layout-1", "layout-2", "story-1", "story-2"]
    );
}

#[test]
fn trending_takes_one_from_each_category() {
    let store = store();
    let items = items_for_tab(&store, LibraryTab::Trending, &Favorites::default(), &LibraryConfig::default());
    assert_eq!(ids(&items), ["kpi-1", "viz-pie", "layout-1", "story-1"]);
}

#[test]
fn curated_take_sizes_follow_config() {
    let store = store();
    let config = LibraryConfig { featured_take: 3, ..LibraryConfig::default() };
    let items = items_for_tab(&store, LibraryTab::Featured, &Favorites::default(), &config);
    // Layout and storyboard only have two items each.
    assert_eq!(items.len(), 3 + 3 + 2 + 2);
}

#[test]
fn category_tab_maps_to_one_type() {
    let store = store();
    let items = items_for_tab(
        &store,
        LibraryTab::Category(AssetType::Kpi),
        &Favorites::default(),
        &LibraryConfig::default(),
    );
    assert_eq!(items.len(), 6);
    assert!(items.iter().all(|i| i.asset_type() == AssetType::Kpi));
}

#[test]
fn favorites_tab_lists_favorites_in_catalog_order() {
    let store = store();
    let mut favorites = Favorites::default();
    favorites.toggle("story-2");
    favorites.toggle("kpi-3");
    let items = items_for_tab(&store, LibraryTab::MyFavorites, &favorites, &LibraryConfig::default());
    assert_eq!(ids(&items), ["kpi-3", "story-2"]);
}

#[test]
fn unknown_tab_name_is_empty() {
    let store = store();
    let items = items_for_tab_name(&store, "Archive", &Favorites::default(), &LibraryConfig::default());
    assert!(items.is_empty());
}

#[test]
fn tab_name_lookup_matches_enum_lookup() {
    let store = store();
    let by_name = items_for_tab_name(&store, "storyboard", &Favorites::default(), &LibraryConfig::default());
    assert_eq!(ids(&by_name), ["story-1", "story-2"]);
}

// =============================================================
// visible_items
// =============================================================

#[test]
fn visible_items_filters_tab_slice() {
    let store = store();
    let items = visible_items(
        &store,
        LibraryTab::Featured,
        "sales",
        &Favorites::default(),
        &LibraryConfig::default(),
    );
    // Only the two featured items that mention sales.
    assert_eq!(ids(&items), ["kpi-2", "layout-2"]);
}

#[test]
fn visible_items_with_blank_query_is_whole_tab() {
    let store = store();
    let items = visible_items(
        &store,
        LibraryTab::Category(AssetType::Dataviz),
        "  ",
        &Favorites::default(),
        &LibraryConfig::default(),
    );
    assert_eq!(items.len(), 4);
}
