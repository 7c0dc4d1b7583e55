//! Thin wrappers over the `web_sys` calls the library page needs.

/// Vertical gap between a coach-mark target and its popover, in CSS pixels.
pub const COACH_OFFSET_PX: f64 = 10.0;

/// Milliseconds since the Unix epoch, or `0` outside the browser.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Copy the current page URL to the clipboard.
///
/// Resolves to `true` once the browser accepted the write.
#[cfg_attr(not(feature = "hydrate"), allow(clippy::unused_async))]
pub async fn copy_page_url() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let href = match window.location().href() {
            Ok(href) => href,
            Err(err) => {
                log::warn!("page url unavailable: {err:?}");
                return false;
            }
        };
        let promise = window.navigator().clipboard().write_text(&href);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => true,
            Err(err) => {
                log::warn!("clipboard write rejected: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Stop the page behind a modal from scrolling.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let value = if locked { "hidden" } else { "unset" };
        let _ = body.style().set_property("overflow", value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Page coordinates `(top, left)` just below the element tagged
/// `data-coach="{target}"`.
pub fn coach_anchor(target: &str) -> Option<(f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let element = window
            .document()?
            .query_selector(&format!("[data-coach=\"{target}\"]"))
            .ok()
            .flatten()?;
        let rect = element.get_bounding_client_rect();
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let scroll_x = window.scroll_x().unwrap_or(0.0);
        Some((rect.bottom() + scroll_y + COACH_OFFSET_PX, rect.left() + scroll_x))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
        None
    }
}
