//! Registry loading and cache configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS, DEFAULT_PLACES_PATH, DEFAULT_REFORMS_PATH,
};

/// Where registry data lives and how long loaded snapshots are reused.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Places file (`.json` or `.csv`). Default: `data/places.json`.
    pub places_path: Option<PathBuf>,
    /// Reforms CSV. Default: `data/city_reforms.csv`.
    pub reforms_path: Option<PathBuf>,
    /// Snapshot TTL in seconds. Default: 3600.
    pub cache_ttl_seconds: Option<u64>,
    /// Snapshots held at once. Default: 4.
    pub cache_max_entries: Option<u64>,
    /// Treat a missing reforms file as an empty registry. Default: false.
    pub allow_missing_reforms: Option<bool>,
}

impl DataConfig {
    pub fn effective_places_path(&self) -> PathBuf {
        self.places_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PLACES_PATH))
    }

    pub fn effective_reforms_path(&self) -> PathBuf {
        self.reforms_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REFORMS_PATH))
    }

    pub fn effective_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds.unwrap_or(DEFAULT_CACHE_TTL_SECS))
    }

    pub fn effective_cache_max_entries(&self) -> u64 {
        self.cache_max_entries.unwrap_or(DEFAULT_CACHE_MAX_ENTRIES)
    }

    pub fn effective_allow_missing_reforms(&self) -> bool {
        self.allow_missing_reforms.unwrap_or(false)
    }
}
