//! Configuration structures
//!
//! Loaded by `tripscope-infra::config` from environment variables or a
//! JSON/TOML file. Every section has serde defaults so partial files work.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_FILE, DEFAULT_DESCRIPTION_MAX_LENGTH};

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub import: ImportConfig,
    pub geo: GeoConfig,
    pub logging: LoggingConfig,
}

/// Calendar import settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Maximum characters of the event description kept on a trip.
    pub description_max_len: usize,
    /// Run the per-event trip builder on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self { description_max_len: DEFAULT_DESCRIPTION_MAX_LENGTH, parallel: true }
    }
}

/// Coordinate resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Location of the persisted coordinate cache.
    pub cache_path: PathBuf,
    /// Seed a missing cache file with the built-in city table.
    pub seed_defaults: bool,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self { cache_path: PathBuf::from(DEFAULT_CACHE_FILE), seed_defaults: true }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: String::from("info"), json: false }
    }
}
