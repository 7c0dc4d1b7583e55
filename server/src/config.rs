//! Server configuration from environment variables.
//!
//! DESIGN
//! ======
//! `ServerConfig::from_lookup` takes the variable source as a closure so
//! parsing is testable without mutating the process environment;
//! `from_env` binds it to `std::env::var`. `main` loads `.env` first.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use catalog::LibraryConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Listening port.
pub const PORT_VAR: &str = "PORT";
/// Overrides the Leptos site root holding the `pkg/` bundle.
pub const SITE_ROOT_VAR: &str = "LIBRARY_SITE_ROOT";
/// Path to a JSON file overriding `LibraryConfig` fields.
pub const LIBRARY_CONFIG_VAR: &str = "LIBRARY_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort { value: String, source: std::num::ParseIntError },
    #[error("failed to read library config {}: {source}", path.display())]
    ReadLibraryConfig { path: PathBuf, source: std::io::Error },
    #[error("invalid library config {}: {source}", path.display())]
    ParseLibraryConfig { path: PathBuf, source: serde_json::Error },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_root: Option<PathBuf>,
    pub library: LibraryConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, site_root: None, library: LibraryConfig::default() }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `PORT` is not a valid port or the library
    /// config file cannot be read or parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration from `lookup`, which maps variable names to values.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup(PORT_VAR)) {
            Some(value) => {
                value.trim().parse::<u16>().map_err(|source| ConfigError::InvalidPort { value, source })?
            }
            None => DEFAULT_PORT,
        };
        let site_root = non_blank(lookup(SITE_ROOT_VAR)).map(PathBuf::from);
        let library = match non_blank(lookup(LIBRARY_CONFIG_VAR)) {
            Some(path) => load_library_config(PathBuf::from(path))?,
            None => LibraryConfig::default(),
        };
        Ok(Self { port, site_root, library })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn load_library_config(path: PathBuf) -> Result<LibraryConfig, ConfigError> {
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) => return Err(ConfigError::ReadLibraryConfig { path, source }),
    };
    LibraryConfig::from_json(&raw).map_err(|source| ConfigError::ParseLibraryConfig { path, source })
}
