//! Single-slot cancellable timer.
//!
//! Arming the slot again drops the previous `gloo_timers` timeout, which
//! clears it, so a slot never holds more than one pending callback. The
//! handle is `Copy` and can be captured by event handlers and cleanups.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TimerSlot {
    #[cfg(feature = "hydrate")]
    pending: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSlot {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            pending: StoredValue::new_local(None),
        }
    }

    /// Run `callback` after `delay_ms`, cancelling whatever was pending.
    pub fn arm(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let timeout = gloo_timers::callback::Timeout::new(delay_ms, callback);
            // A disposed slot drops `timeout` here, which cancels it.
            self.pending.try_update_value(|slot| *slot = Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, callback);
        }
    }

    /// Cancel the pending callback, if any.
    pub fn cancel(&self) {
        #[cfg(feature = "hydrate")]
        {
            self.pending.try_update_value(Option::take);
        }
    }
}
