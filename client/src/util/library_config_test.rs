use super::*;

// =============================================================
// embed_json
// =============================================================

#[test]
fn embedded_payload_reads_back_as_the_same_config() {
    let config = LibraryConfig { featured_take: 3, granted_ids: vec!["story-1".into()], ..LibraryConfig::default() };
    assert_eq!(parse_embedded(&embed_json(&config)), Some(config));
}

#[test]
fn embedded_payload_cannot_close_the_script_tag() {
    let config = LibraryConfig { granted_ids: vec!["</script><b>".into()], ..LibraryConfig::default() };
    let raw = embed_json(&config);
    assert!(!raw.contains('<'));
    assert_eq!(parse_embedded(&raw).map(|parsed| parsed.granted_ids), Some(vec!["</script><b>".to_owned()]));
}

// =============================================================
// parse_embedded / resolve_config
// =============================================================

#[test]
fn partial_payload_keeps_defaults() {
    let config = parse_embedded(r#"{"trending_take": 2}"#).unwrap();
    assert_eq!(config.trending_take, 2);
    assert_eq!(config.featured_take, LibraryConfig::default().featured_take);
}

#[test]
fn malformed_payload_is_rejected() {
    assert_eq!(parse_embedded("{not json"), None);
}

#[test]
fn provided_context_wins_over_defaults() {
    let owner = Owner::new();
    owner.with(|| {
        assert_eq!(resolve_config(), LibraryConfig::default());
        let config = LibraryConfig { search_debounce_ms: 250, ..LibraryConfig::default() };
        provide_context(config.clone());
        assert_eq!(resolve_config(), config);
    });
}
