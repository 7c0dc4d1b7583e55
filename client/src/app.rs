//! Root application component with routing and context providers.

use catalog::{ItemStore, LibraryConfig};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::library::LibraryPage;
use crate::state::library::LibraryState;
use crate::util::library_config::{CONFIG_SCRIPT_ID, embed_json, resolve_config};

/// HTML shell rendered on the server for SSR + hydration.
///
/// When the server provides a `LibraryConfig`, it is embedded in `<head>` for
/// the hydrating client.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config_payload = use_context::<LibraryConfig>().map(|config| {
        view! { <script type="application/json" id=CONFIG_SCRIPT_ID inner_html=embed_json(&config)></script> }
    });
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                {config_payload}
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Load the embedded catalog, degrading to an empty library if it is corrupt.
fn load_store() -> ItemStore {
    ItemStore::builtin().unwrap_or_else(|err| {
        log::error!("embedded catalog rejected: {err}");
        ItemStore::default()
    })
}

/// Root application component.
///
/// Provides the item store, config and library state to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = resolve_config();
    let library = RwSignal::new(LibraryState::new(&config, true));

    provide_context(StoredValue::new(load_store()));
    provide_context(config);
    provide_context(library);

    view! {
        <Stylesheet id="leptos" href="/pkg/library.css"/>
        <Title text="Library"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LibraryPage/>
            </Routes>
        </Router>
    }
}
