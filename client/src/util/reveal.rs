//! One-shot reveal when an element first scrolls into view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Library sections fade their cards in the first time at least
//! [`REVEAL_THRESHOLD`] of the section is visible. After that the observer is
//! disconnected and the section stays revealed. Without an observer (server
//! render, old browsers) sections are shown immediately.

use leptos::html::Section;
use leptos::prelude::*;

/// Fraction of the section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Track whether the section behind `node` has been on screen yet.
pub fn use_reveal_once(node: NodeRef<Section>) -> ReadSignal<bool> {
    #[cfg(feature = "hydrate")]
    {
        let (revealed, set_revealed) = signal(false);
        let observer = StoredValue::new_local(None::<RevealObserver>);
        Effect::new(move || {
            let Some(element) = node.get() else {
                return;
            };
            if observer.with_value(Option::is_some) {
                return;
            }
            match RevealObserver::observe(&element, set_revealed) {
                Ok(handle) => observer.set_value(Some(handle)),
                Err(err) => {
                    log::warn!("intersection observer unavailable: {err:?}");
                    set_revealed.set(true);
                }
            }
        });
        on_cleanup(move || {
            observer.try_update_value(|handle| {
                if let Some(handle) = handle.take() {
                    handle.disconnect();
                }
            });
        });
        revealed
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node;
        signal(true).0
    }
}

/// An observer together with the JS callback it invokes. Both live exactly as
/// long as the section that created them.
#[cfg(feature = "hydrate")]
struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl RevealObserver {
    fn observe(element: &web_sys::Element, set_revealed: WriteSignal<bool>) -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        set_revealed.try_set(true);
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );
        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);
        Ok(Self { observer, _callback: callback })
    }

    /// Stop observing, then release the callback.
    fn disconnect(self) {
        self.observer.disconnect();
    }
}
