//! # client
//!
//! Leptos front end for the analytics asset library. Pages, components and
//! reactive state live here; catalog data and the browsing state machines
//! come from the `catalog` crate. The `hydrate` feature builds the WASM
//! bundle, `ssr` the server-rendered half used by `library-server`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
