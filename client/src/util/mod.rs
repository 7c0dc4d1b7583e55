//! Browser glue shared by pages and components.
//!
//! Every helper compiles to a no-op outside the `hydrate` feature so server
//! rendering stays deterministic.

pub mod browser;
pub mod library_config;
pub mod reveal;
pub mod timer;
pub mod ui_persistence;
