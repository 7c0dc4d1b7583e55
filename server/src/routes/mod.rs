//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health check and JSON catalog endpoints, then stitches them with
//! Leptos SSR rendering under a single Axum router. Every render receives the
//! server's `LibraryConfig` as context, and the shell embeds it for the
//! hydrating client. The hydration bundle is served from the site root's
//! `pkg/` directory.

pub mod library;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum RoutesError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// JSON API and health routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/catalog", get(library::list_catalog))
        .route("/api/config", get(library::library_config))
        .with_state(state)
}

/// Full application: API routes + Leptos SSR + static `pkg/` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section and no `LEPTOS_*`
/// environment).
pub fn app(state: AppState, site_root: Option<PathBuf>) -> Result<Router, RoutesError> {
    let conf = get_configuration(None).map_err(|e| RoutesError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, library_context(&state), {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = site_root.unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
    tracing::info!(site_root = %site_root_path.display(), "serving leptos assets");

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Context hook that hands each SSR render the configured `LibraryConfig`.
fn library_context(state: &AppState) -> impl Fn() + Clone + Send + Sync + 'static {
    let library = Arc::clone(&state.library);
    move || provide_context(library.as_ref().clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
