use super::*;
use catalog::{ItemStore, LibraryConfig};

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_routes_build_without_leptos_options() {
    let state = AppState::new(ItemStore::default(), LibraryConfig::default());
    let _router: Router = api_routes(state);
}

#[test]
fn routes_error_names_the_leptos_section() {
    let err = RoutesError::LeptosConfig("missing output name".into());
    assert_eq!(err.to_string(), "leptos configuration: missing output name");
}

#[test]
fn ssr_context_carries_configured_library() {
    let library = LibraryConfig { featured_take: 1, granted_ids: vec!["story-1".into()], ..LibraryConfig::default() };
    let state = AppState::new(ItemStore::default(), library.clone());
    let provide = library_context(&state);

    let owner = Owner::new();
    owner.with(|| {
        provide();
        assert_eq!(use_context::<LibraryConfig>(), Some(library));
    });
}
