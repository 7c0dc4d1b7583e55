//! Detail-modal state: closed, or open on exactly one item.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Which item, if any, is open for detail viewing.
///
/// Opening while another item is open replaces it; there is no queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalManager {
    #[default]
    Closed,
    Open(String),
}

impl ModalManager {
    /// Open `item_id`, replacing whatever was open.
    pub fn open(&mut self, item_id: &str) {
        *self = ModalManager::Open(item_id.to_owned());
    }

    /// Close the modal. No-op when already closed.
    pub fn close(&mut self) {
        *self = ModalManager::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, ModalManager::Open(_))
    }

    /// Id of the open item.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        match self {
            ModalManager::Open(id) => Some(id),
            ModalManager::Closed => None,
        }
    }
}
