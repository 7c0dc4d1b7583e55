//! Browser localStorage helpers for the onboarding flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The completed-tour flag is the only thing the library persists. Values are
//! stored as JSON so the flag reads back as the literal `true`.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the completed-tour flag.
pub const ONBOARDING_KEY: &str = "hasCompletedOnboarding";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        parse_stored(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if let Err(err) = storage.set_item(key, &raw) {
            log::warn!("localStorage write failed for {key}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Decode a stored value, treating malformed JSON as absent.
pub fn parse_stored<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

/// Whether the user finished the coach tour on an earlier visit.
///
/// Outside the browser this reports `true` so the intro never renders on the
/// server.
pub fn onboarding_completed() -> bool {
    #[cfg(feature = "hydrate")]
    {
        load_json::<bool>(ONBOARDING_KEY).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

pub fn mark_onboarding_completed() {
    save_json(ONBOARDING_KEY, &true);
}
