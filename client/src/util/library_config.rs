//! Carries the server's `LibraryConfig` across hydration.
//!
//! SYSTEM CONTEXT
//! ==============
//! During SSR the server provides its `LibraryConfig` as Leptos context. The
//! shell writes it into a JSON `<script>` in `<head>` so the hydrating client
//! starts from the same settings the server rendered with. Outside both
//! (route listing, malformed payload) the stock defaults apply.

#[cfg(test)]
#[path = "library_config_test.rs"]
mod library_config_test;

use catalog::LibraryConfig;
use leptos::prelude::*;

/// Element id of the embedded config payload.
pub const CONFIG_SCRIPT_ID: &str = "library-config";

/// Serialize `config` for a `<script type="application/json">` body.
///
/// `<` is escaped so no value can close the script element early.
pub fn embed_json(config: &LibraryConfig) -> String {
    match serde_json::to_string(config) {
        Ok(raw) => raw.replace('<', "\\u003c"),
        Err(err) => {
            log::warn!("library config not embeddable: {err}");
            String::from("{}")
        }
    }
}

/// Parse an embedded payload, or `None` when it is malformed.
pub fn parse_embedded(raw: &str) -> Option<LibraryConfig> {
    match LibraryConfig::from_json(raw) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("embedded library config rejected: {err}");
            None
        }
    }
}

/// The config the page should run with: server context during SSR, the
/// embedded payload while hydrating, defaults otherwise.
pub fn resolve_config() -> LibraryConfig {
    if let Some(config) = use_context::<LibraryConfig>() {
        return config;
    }
    #[cfg(feature = "hydrate")]
    {
        if let Some(config) = read_embedded() {
            return config;
        }
    }
    LibraryConfig::default()
}

#[cfg(feature = "hydrate")]
fn read_embedded() -> Option<LibraryConfig> {
    let raw = web_sys::window()?.document()?.get_element_by_id(CONFIG_SCRIPT_ID)?.text_content()?;
    parse_embedded(&raw)
}
