//! Access resolution and the batch access-request flow.
//!
//! DESIGN
//! ======
//! Access is never stored per item. It is derived from two host-owned id sets
//! (granted and pending). The request flow collects a selection and then moves
//! it into the pending set in one step.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::item::CatalogItem;

/// Derived permission state of one item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessStatus {
    Granted,
    Pending,
    #[default]
    None,
}

/// Resolve the access state of `id`. Granted wins over pending.
#[must_use]
pub fn resolve(id: &str, granted: &HashSet<String>, pending: &HashSet<String>) -> AccessStatus {
    if granted.contains(id) {
        AccessStatus::Granted
    } else if pending.contains(id) {
        AccessStatus::Pending
    } else {
        AccessStatus::None
    }
}

/// Granted and pending id sets. An id is in at most one of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessSets {
    granted: HashSet<String>,
    pending: HashSet<String>,
}

impl AccessSets {
    /// Sets with `granted` ids already approved and nothing pending.
    #[must_use]
    pub fn with_granted<I, S>(granted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: granted.into_iter().map(Into::into).collect(),
            pending: HashSet::new(),
        }
    }

    #[must_use]
    pub fn status(&self, id: &str) -> AccessStatus {
        resolve(id, &self.granted, &self.pending)
    }

    /// Mark `ids` as pending, skipping ids that are already granted.
    ///
    /// Returns how many ids became newly pending.
    pub fn mark_pending<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        let mut added = 0;
        for id in ids {
            if self.granted.contains(id) {
                continue;
            }
            if self.pending.insert(id.to_owned()) {
                added += 1;
            }
        }
        added
    }

    #[must_use]
    pub fn granted(&self) -> &HashSet<String> {
        &self.granted
    }

    #[must_use]
    pub fn pending(&self) -> &HashSet<String> {
        &self.pending
    }

    /// Items the user has no access to and has not requested yet.
    #[must_use]
    pub fn inaccessible<'a, I>(&self, items: I) -> Vec<&'a CatalogItem>
    where
        I: IntoIterator<Item = &'a CatalogItem>,
    {
        items
            .into_iter()
            .filter(|item| self.status(item.id()) == AccessStatus::None)
            .collect()
    }
}

/// Phase of the access-request dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    /// Dialog closed or collecting a selection.
    #[default]
    Collecting,
    /// Selection is being committed to the pending set.
    Submitting,
}

/// Selection and dialog state for batch access requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessRequest {
    dialog_open: bool,
    phase: RequestPhase,
    selection: BTreeSet<String>,
}

impl AccessRequest {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.dialog_open
    }

    #[must_use]
    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn open(&mut self) {
        self.dialog_open = true;
    }

    /// Close the dialog. The selection survives for the next open.
    pub fn close(&mut self) {
        self.dialog_open = false;
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected ids in sorted order.
    pub fn selection(&self) -> impl Iterator<Item = &str> {
        self.selection.iter().map(String::as_str)
    }

    /// Flip membership of `id`. Ignored while a submit is in progress.
    pub fn toggle_select(&mut self, id: &str) {
        if self.phase != RequestPhase::Collecting {
            return;
        }
        if !self.selection.remove(id) {
            self.selection.insert(id.to_owned());
        }
    }

    /// Select every id in `ids`, or deselect them all if all are already
    /// selected.
    pub fn toggle_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        if self.phase != RequestPhase::Collecting {
            return;
        }
        let ids: Vec<&str> = ids.into_iter().collect();
        if ids.iter().all(|id| self.selection.contains(*id)) {
            for id in ids {
                self.selection.remove(id);
            }
        } else {
            self.selection.extend(ids.into_iter().map(str::to_owned));
        }
    }

    /// Move the whole selection into `sets` as pending, clear it and close
    /// the dialog.
    ///
    /// An empty selection is a no-op and leaves the dialog open. Returns the
    /// number of ids that became newly pending.
    pub fn submit(&mut self, sets: &mut AccessSets) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        self.phase = RequestPhase::Submitting;
        let selection = std::mem::take(&mut self.selection);
        let added = sets.mark_pending(selection.iter().map(String::as_str));
        self.dialog_open = false;
        self.phase = RequestPhase::Collecting;
        log::debug!("access request submitted: {} selected, {added} newly pending", selection.len());
        added
    }
}
