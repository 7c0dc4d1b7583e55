use super::*;
use crate::item::{AssetType, ItemBase, ItemDetails};

fn set(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}

fn item(id: &str) -> CatalogItem {
    CatalogItem::new(ItemBase { id: id.to_owned(), ..ItemBase::default() }, ItemDetails::empty(AssetType::Kpi))
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_granted() {
    assert_eq!(resolve("a", &set(&["a"]), &set(&[])), AccessStatus::Granted);
}

#[test]
fn resolve_pending() {
    assert_eq!(resolve("a", &set(&[]), &set(&["a"])), AccessStatus::Pending);
}

#[test]
fn resolve_none_when_absent() {
    assert_eq!(resolve("a", &set(&[]), &set(&[])), AccessStatus::None);
    assert_eq!(resolve("unknown", &set(&["a"]), &set(&["b"])), AccessStatus::None);
}

#[test]
fn resolve_granted_wins_over_pending() {
    assert_eq!(resolve("a", &set(&["a"]), &set(&["a"])), AccessStatus::Granted);
}

#[test]
fn access_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&AccessStatus::Pending).unwrap(), "\"pending\"");
    assert_eq!(AccessStatus::default(), AccessStatus::None);
}

// =============================================================
// AccessSets
// =============================================================

#[test]
fn mark_pending_skips_granted_ids() {
    let mut sets = AccessSets::with_granted(["kpi-1"]);
    let added = sets.mark_pending(["kpi-1", "kpi-2"]);
    assert_eq!(added, 1);
    assert_eq!(sets.status("kpi-1"), AccessStatus::Granted);
    assert_eq!(sets.status("kpi-2"), AccessStatus::Pending);
    assert!(!sets.pending().contains("kpi-1"));
}

#[test]
fn mark_pending_twice_counts_once() {
    let mut sets = AccessSets::default();
    assert_eq!(sets.mark_pending(["a"]), 1);
    assert_eq!(sets.mark_pending(["a"]), 0);
}

#[test]
fn inaccessible_lists_only_none_status() {
    let items = vec![item("g"), item("p"), item("n1"), item("n2")];
    let mut sets = AccessSets::with_granted(["g"]);
    sets.mark_pending(["p"]);
    let ids: Vec<&str> = sets.inaccessible(&items).into_iter().map(CatalogItem::id).collect();
    assert_eq!(ids, ["n1", "n2"]);
}

// =============================================================
// AccessRequest
// =============================================================

#[test]
fn toggle_select_flips_membership() {
    let mut request = AccessRequest::default();
    request.toggle_select("a");
    assert!(request.is_selected("a"));
    request.toggle_select("a");
    assert!(!request.is_selected("a"));
    assert_eq!(request.selected_count(), 0);
}

#[test]
fn submit_moves_selection_to_pending_and_closes() {
    let mut sets = AccessSets::default();
    let mut request = AccessRequest::default();
    request.open();
    request.toggle_select("a");
    request.toggle_select("b");

    let added = request.submit(&mut sets);

    assert_eq!(added, 2);
    assert_eq!(sets.status("a"), AccessStatus::Pending);
    assert_eq!(sets.status("b"), AccessStatus::Pending);
    assert_eq!(request.selected_count(), 0);
    assert!(!request.is_open());
    assert_eq!(request.phase(), RequestPhase::Collecting);
}

#[test]
fn submit_with_empty_selection_keeps_dialog_open() {
    let mut sets = AccessSets::default();
    let mut request = AccessRequest::default();
    request.open();
    assert_eq!(request.submit(&mut sets), 0);
    assert!(request.is_open());
    assert!(sets.pending().is_empty());
}

#[test]
fn close_keeps_selection() {
    let mut request = AccessRequest::default();
    request.open();
    request.toggle_select("a");
    request.close();
    assert!(!request.is_open());
    assert!(request.is_selected("a"));
}

#[test]
fn toggle_all_selects_then_deselects_group() {
    let mut request = AccessRequest::default();
    request.toggle_select("a");
    request.toggle_all(["a", "b", "c"]);
    assert_eq!(request.selection().collect::<Vec<_>>(), ["a", "b", "c"]);

    request.toggle_all(["a", "b", "c"]);
    assert_eq!(request.selected_count(), 0);
}

#[test]
fn toggle_all_leaves_other_groups_alone() {
    let mut request = AccessRequest::default();
    request.toggle_select("x");
    request.toggle_all(["a", "b"]);
    request.toggle_all(["a", "b"]);
    assert_eq!(request.selection().collect::<Vec<_>>(), ["x"]);
}
