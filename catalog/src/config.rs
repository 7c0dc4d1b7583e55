//! Library behavior knobs.
//!
//! Defaults reproduce the stock Library experience. Hosts may override any
//! subset from JSON; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 900;
pub const DEFAULT_RECENT_QUERY_CAP: usize = 5;
pub const DEFAULT_FEATURED_TAKE: usize = 2;
pub const DEFAULT_TRENDING_TAKE: usize = 1;

/// Ids the user can open without requesting access.
pub const DEFAULT_GRANTED_IDS: [&str; 3] = ["kpi-1", "viz-1", "layout-1"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Quiet interval before a typed query is applied.
    pub search_debounce_ms: u32,
    /// Maximum number of remembered queries.
    pub recent_query_cap: usize,
    /// Items taken from the front of each category for the Featured tab.
    pub featured_take: usize,
    /// Items taken from the front of each category for the Trending section.
    pub trending_take: usize,
    pub granted_ids: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            recent_query_cap: DEFAULT_RECENT_QUERY_CAP,
            featured_take: DEFAULT_FEATURED_TAKE,
            trending_take: DEFAULT_TRENDING_TAKE,
            granted_ids: DEFAULT_GRANTED_IDS.iter().map(|id| (*id).to_owned()).collect(),
        }
    }
}

impl LibraryConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
