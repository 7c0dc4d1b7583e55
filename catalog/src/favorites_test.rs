use super::*;

#[test]
fn toggle_adds_then_removes() {
    let mut favorites = Favorites::default();
    assert!(favorites.toggle("kpi-1"));
    assert!(favorites.contains("kpi-1"));
    assert_eq!(favorites.len(), 1);

    assert!(!favorites.toggle("kpi-1"));
    assert!(!favorites.contains("kpi-1"));
    assert!(favorites.is_empty());
}

#[test]
fn toggles_are_independent_per_id() {
    let mut favorites = Favorites::default();
    favorites.toggle("a");
    favorites.toggle("b");
    favorites.toggle("a");
    assert!(!favorites.contains("a"));
    assert!(favorites.contains("b"));
}
