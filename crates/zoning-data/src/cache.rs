//! Registry snapshot cache using moka.
//!
//! The host owns one `RegistryCache` and passes it to request handlers.
//! Snapshots are keyed by their source paths, expire after the configured
//! TTL, and can be dropped or reloaded explicitly.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::debug;
use zoning_core::config::DataConfig;
use zoning_core::ZoningResult;

use crate::registry::Registries;

/// Cache of loaded registry snapshots.
pub struct RegistryCache {
    cache: Cache<String, Arc<Registries>>,
}

impl RegistryCache {
    /// Create a cache sized and timed from `config`.
    pub fn new(config: &DataConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.effective_cache_max_entries())
            .time_to_live(config.effective_cache_ttl())
            .build();
        Self { cache }
    }

    /// Return the cached snapshot for `config`'s sources, loading it on a miss.
    /// Concurrent misses for the same sources share a single load.
    pub fn get_or_load(&self, config: &DataConfig) -> ZoningResult<Arc<Registries>> {
        let key = Self::key(config);
        self.cache
            .try_get_with(key.clone(), || {
                debug!(key = %key, "registry cache miss, loading");
                Registries::load(config).map(Arc::new)
            })
            .map_err(Arc::unwrap_or_clone)
    }

    /// Load fresh registries and replace the cached snapshot.
    /// On failure the previous snapshot is left in place.
    pub fn reload(&self, config: &DataConfig) -> ZoningResult<Arc<Registries>> {
        self.load_and_store(Self::key(config), config)
    }

    /// Drop the snapshot for `config`'s sources.
    pub fn invalidate(&self, config: &DataConfig) {
        self.cache.invalidate(&Self::key(config));
    }

    /// Drop every snapshot.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Whether a snapshot for `config`'s sources is currently cached.
    pub fn contains(&self, config: &DataConfig) -> bool {
        self.cache.contains_key(&Self::key(config))
    }

    fn load_and_store(&self, key: String, config: &DataConfig) -> ZoningResult<Arc<Registries>> {
        let loaded = Arc::new(Registries::load(config)?);
        self.cache.insert(key, Arc::clone(&loaded));
        Ok(loaded)
    }

    fn key(config: &DataConfig) -> String {
        format!(
            "{}|{}",
            config.effective_places_path().display(),
            config.effective_reforms_path().display()
        )
    }
}
