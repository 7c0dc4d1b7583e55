use super::*;
use crate::item::{ItemBase, ItemDetails};
use crate::store::ItemStore;

fn item(id: &str, asset_type: AssetType, name: &str, description: &str, tags: &[&str]) -> CatalogItem {
    CatalogItem::new(
        ItemBase {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            date: "2024-01-15".to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            ..ItemBase::default()
        },
        ItemDetails::empty(asset_type),
    )
}

fn sample() -> Vec<CatalogItem> {
    vec![
        item("1", AssetType::Kpi, "Revenue Dashboard", "Track company revenue metrics", &["finance", "revenue", "monthly"]),
        item("2", AssetType::Dataviz, "Sales Chart", "Visualize sales performance", &["sales", "performance"]),
        item("3", AssetType::Layout, "Executive Layout", "Layout for executive dashboards", &["executive", "leadership"]),
    ]
}

fn ids<'a>(items: &[&'a CatalogItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.id()).collect()
}

// =============================================================
// filter_items
// =============================================================

#[test]
fn blank_query_returns_all_in_order() {
    let items = sample();
    assert_eq!(ids(&filter_items(&items, "")), ["1", "2", "3"]);
    assert_eq!(ids(&filter_items(&items, "   ")), ["1", "2", "3"]);
    assert_eq!(ids(&filter_items(&items, "\t\n")), ["1", "2", "3"]);
}

#[test]
fn filters_by_name() {
    let items = sample();
    assert_eq!(ids(&filter_items(&items, "revenue")), ["1"]);
}

#[test]
fn filters_by_description() {
    let items = sample();
    assert_eq!(ids(&filter_items(&items, "performance")), ["2"]);
}

#[test]
fn filters_by_tag() {
    let items = sample();
    assert_eq!(ids(&filter_items(&items, "leadership")), ["3"]);
}

#[test]
fn filter_is_case_insensitive() {
    let items = sample();
    assert_eq!(ids(&filter_items(&items, "REVENUE")), ["1"]);
    assert_eq!(ids(&filter_items(&items, "sAlEs")), ["2"]);
}

#[test]
fn filter_returns_multiple_matches_in_order() {
    let items = sample();
    // Name of 1, description of 3.
    assert_eq!(ids(&filter_items(&items, "dashboard")), ["1", "3"]);
}

#[test]
fn filter_without_matches_is_empty() {
    let items = sample();
    assert!(filter_items(&items, "nonexistent").is_empty());
}

#[test]
fn filter_on_empty_input_is_empty() {
    let items: Vec<CatalogItem> = Vec::new();
    assert!(filter_items(&items, "anything").is_empty());
    assert!(filter_items(&items, "").is_empty());
}

#[test]
fn filter_tolerates_items_without_tags() {
    let items = vec![item("a", AssetType::Storyboard, "Plain", "No tags here", &[])];
    assert_eq!(ids(&filter_items(&items, "plain")), ["a"]);
    assert!(filter_items(&items, "finance").is_empty());
}

#[test]
fn filter_does_not_mutate_input() {
    let items = sample();
    let before = items.clone();
    let _ = filter_items(&items, "sales");
    assert_eq!(items, before);
}

#[test]
fn filter_scenario_finance_and_chart() {
    let items = vec![
        item("k1", AssetType::Kpi, "Revenue Dashboard", "", &["finance"]),
        item("k2", AssetType::Kpi, "Sales Chart", "", &["sales"]),
    ];
    assert_eq!(ids(&filter_items(&items, "finance")), ["k1"]);
    assert_eq!(ids(&filter_items(&items, "CHART")), ["k2"]);
}

#[test]
fn filter_partitions_catalog_by_match() {
    let store = ItemStore::builtin().unwrap();
    for query in ["chart", "QUARTERLY", "sales", "rate", "zzz", "Global"] {
        let needle = query.to_lowercase();
        let kept = filter_items(store.all(), query);
        for candidate in store.all() {
            let contains = candidate.name().to_lowercase().contains(&needle)
                || candidate.description().to_lowercase().contains(&needle)
                || candidate.tags().iter().any(|t| t.to_lowercase().contains(&needle));
            let is_kept = kept.iter().any(|k| k.id() == candidate.id());
            assert_eq!(contains, is_kept, "query {query:?} item {}", candidate.id());
        }
    }
}

#[test]
fn filter_accepts_borrowed_subsets() {
    let items = sample();
    let subset: Vec<&CatalogItem> = items.iter().skip(1).collect();
    assert_eq!(ids(&filter_items(subset.iter().copied(), "e")), ["2", "3"]);
}

// =============================================================
// group_by_type
// =============================================================

#[test]
fn group_preserves_order_within_type() {
    let items = vec![
        item("1", AssetType::Kpi, "KPI 1", "Test", &[]),
        item("2", AssetType::Kpi, "KPI 2", "Test", &[]),
        item("3", AssetType::Dataviz, "Chart 1", "Test", &[]),
        item("4", AssetType::Layout, "Layout 1", "Test", &[]),
    ];
    let groups = group_by_type(&items);
    assert_eq!(groups.len(), 3);
    assert_eq!(ids(&groups[&AssetType::Kpi]), ["1", "2"]);
    assert_eq!(ids(&groups[&AssetType::Dataviz]), ["3"]);
    assert_eq!(ids(&groups[&AssetType::Layout]), ["4"]);
    assert!(!groups.contains_key(&AssetType::Storyboard));
}

#[test]
fn group_of_empty_input_is_empty() {
    let items: Vec<CatalogItem> = Vec::new();
    assert!(group_by_type(&items).is_empty());
}

#[test]
fn group_partitions_every_item_exactly_once() {
    let items = vec![
        item("s1", AssetType::Storyboard, "S", "", &[]),
        item("k1", AssetType::Kpi, "K", "", &[]),
        item("s2", AssetType::Storyboard, "S", "", &[]),
        item("v1", AssetType::Dataviz, "V", "", &[]),
    ];
    let groups = group_by_type(&items);

    let mut flattened: Vec<&str> = Vec::new();
    for (asset_type, members) in &groups {
        assert!(members.iter().all(|m| m.asset_type() == *asset_type));
        flattened.extend(members.iter().map(|m| m.id()));
    }
    // Group iteration follows type order.
    assert_eq!(flattened, ["k1", "v1", "s1", "s2"]);

    let mut sorted_input: Vec<&str> = items.iter().map(CatalogItem::id).collect();
    sorted_input.sort_unstable();
    flattened.sort_unstable();
    assert_eq!(flattened, sorted_input);
}
