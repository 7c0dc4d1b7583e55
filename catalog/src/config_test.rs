use super::*;

#[test]
fn defaults_match_stock_library() {
    let config = LibraryConfig::default();
    assert_eq!(config.search_debounce_ms, 900);
    assert_eq!(config.recent_query_cap, 5);
    assert_eq!(config.featured_take, 2);
    assert_eq!(config.trending_take, 1);
    assert_eq!(config.granted_ids, ["kpi-1", "viz-1", "layout-1"]);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = LibraryConfig::from_json(r#"{ "search_debounce_ms": 250 }"#).unwrap();
    assert_eq!(config.search_debounce_ms, 250);
    assert_eq!(config.recent_query_cap, DEFAULT_RECENT_QUERY_CAP);
    assert_eq!(config.granted_ids.len(), 3);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(LibraryConfig::from_json("{}").unwrap(), LibraryConfig::default());
}

#[test]
fn malformed_json_is_error() {
    assert!(LibraryConfig::from_json(r#"{ "recent_query_cap": "many" }"#).is_err());
}
