//! Search box model: raw input echo, debounced emission and recent queries.
//!
//! DESIGN
//! ======
//! The debouncer is a clock-agnostic state machine. Each keystroke replaces
//! the single scheduled emission and hands back a [`Ticket`]; the host arms a
//! timer for that ticket and reports back with [`Debouncer::fire`]. Tickets
//! from replaced or cancelled schedules are stale and emit nothing, so only
//! the last value of a burst ever reaches the filter.
//!
//! Hosts that own a clock instead of timers can drive the same machine with
//! [`Debouncer::poll`].

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::collections::VecDeque;

use crate::config::{DEFAULT_RECENT_QUERY_CAP, LibraryConfig};

/// Most-recent-first, de-duplicated, bounded query history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentQueries {
    entries: VecDeque<String>,
    cap: usize,
}

impl Default for RecentQueries {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_QUERY_CAP)
    }
}

impl RecentQueries {
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self { entries: VecDeque::with_capacity(cap), cap }
    }

    /// Record `query` at the front. Blank queries are ignored; an existing
    /// equal entry moves to the front instead of duplicating.
    pub fn push(&mut self, query: &str) {
        if query.trim().is_empty() || self.cap == 0 {
            return;
        }
        self.entries.retain(|entry| entry != query);
        self.entries.push_front(query.to_owned());
        self.entries.truncate(self.cap);
    }

    /// Drop `query` from the history. Returns whether it was present.
    pub fn remove(&mut self, query: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != query);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Identifies one scheduled emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    PendingEmit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Scheduled {
    ticket: Ticket,
    value: String,
    due_ms: u64,
}

/// Holds at most one pending emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    quiet_ms: u64,
    next_ticket: u64,
    pending: Option<Scheduled>,
}

impl Debouncer {
    #[must_use]
    pub fn new(quiet_ms: u32) -> Self {
        Self { quiet_ms: u64::from(quiet_ms), next_ticket: 0, pending: None }
    }

    #[must_use]
    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    #[must_use]
    pub fn state(&self) -> DebounceState {
        if self.pending.is_some() { DebounceState::PendingEmit } else { DebounceState::Idle }
    }

    /// Schedule `value` for emission one quiet interval after `now_ms`,
    /// replacing anything already scheduled.
    pub fn schedule(&mut self, value: String, now_ms: u64) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending = Some(Scheduled { ticket, value, due_ms: now_ms.saturating_add(self.quiet_ms) });
        ticket
    }

    /// Timer callback for `ticket`. Emits only if `ticket` is still current.
    pub fn fire(&mut self, ticket: Ticket) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Emit the pending value if its quiet interval has elapsed at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now_ms >= p.due_ms) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drop any pending emission. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

/// Search input plus its debouncer and history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchBox {
    input: String,
    focused: bool,
    debouncer: Debouncer,
    recent: RecentQueries,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new(&LibraryConfig::default())
    }
}

impl SearchBox {
    #[must_use]
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            input: String::new(),
            focused: false,
            debouncer: Debouncer::new(config.search_debounce_ms),
            recent: RecentQueries::new(config.recent_query_cap),
        }
    }

    /// Current raw text of the field.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn recent(&self) -> &RecentQueries {
        &self.recent
    }

    #[must_use]
    pub fn debounce_state(&self) -> DebounceState {
        self.debouncer.state()
    }

    #[must_use]
    pub fn quiet_ms(&self) -> u64 {
        self.debouncer.quiet_ms()
    }

    /// Keystroke: echo `value` immediately and reschedule the emission.
    pub fn on_input(&mut self, value: &str, now_ms: u64) -> Ticket {
        value.clone_into(&mut self.input);
        self.debouncer.schedule(value.to_owned(), now_ms)
    }

    /// Timer callback. Returns the query to apply, if `ticket` is current.
    pub fn on_timer(&mut self, ticket: Ticket) -> Option<String> {
        let value = self.debouncer.fire(ticket)?;
        Some(self.emit(value))
    }

    /// Clock-driven alternative to [`SearchBox::on_timer`].
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        let value = self.debouncer.poll(now_ms)?;
        Some(self.emit(value))
    }

    /// Re-issue a remembered query right away, bypassing the quiet interval.
    /// The history keeps its order.
    pub fn select_recent(&mut self, query: &str) -> String {
        self.debouncer.cancel();
        query.clone_into(&mut self.input);
        self.focused = false;
        query.to_owned()
    }

    pub fn remove_recent(&mut self, query: &str) -> bool {
        self.recent.remove(query)
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Whether the recent-query dropdown should be visible.
    #[must_use]
    pub fn shows_recent(&self) -> bool {
        self.focused && !self.recent.is_empty()
    }

    /// Cancel any pending emission; call when the search box unmounts.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
    }

    fn emit(&mut self, value: String) -> String {
        self.recent.push(&value);
        value
    }
}
