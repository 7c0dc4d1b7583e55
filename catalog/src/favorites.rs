//! Session-scoped favorites.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::collections::HashSet;

/// Ids the user bookmarked this session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: HashSet<String>,
}

impl Favorites {
    /// Flip `id` in or out of the set. Returns whether it is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_owned());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
