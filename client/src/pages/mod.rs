//! Routed pages.

pub mod library;
