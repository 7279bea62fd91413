//! RegistryCache: snapshot reuse, invalidation, reload, missing-reforms policy.

use std::sync::{Arc, Barrier};

use zoning_core::config::DataConfig;
use zoning_core::{IPlaceRegistry, ZoningError};
use zoning_data::RegistryCache;

fn fixture_config() -> DataConfig {
    DataConfig {
        places_path: Some(test_fixtures::places_json()),
        reforms_path: Some(test_fixtures::reforms_csv()),
        ..Default::default()
    }
}

#[test]
fn second_lookup_returns_the_same_snapshot() {
    let config = fixture_config();
    let cache = RegistryCache::new(&config);

    let first = cache.get_or_load(&config).unwrap();
    let second = cache.get_or_load(&config).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.places.place_count(), 13);
    assert_eq!(first.reforms.len(), 14);
}

#[test]
fn invalidate_forces_a_fresh_load() {
    let config = fixture_config();
    let cache = RegistryCache::new(&config);

    let first = cache.get_or_load(&config).unwrap();
    cache.invalidate(&config);
    assert!(!cache.contains(&config));
    let second = cache.get_or_load(&config).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn concurrent_misses_share_one_snapshot() {
    const THREADS: usize = 4;
    let config = fixture_config();
    let cache = RegistryCache::new(&config);

    for _ in 0..5 {
        cache.invalidate_all();
        let barrier = Barrier::new(THREADS);
        let snapshots: Vec<Arc<_>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        cache.get_or_load(&config).unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(snapshots.iter().all(|s| Arc::ptr_eq(s, &snapshots[0])));
    }
}

#[test]
fn reload_replaces_the_snapshot() {
    let config = fixture_config();
    let cache = RegistryCache::new(&config);

    let first = cache.get_or_load(&config).unwrap();
    let reloaded = cache.reload(&config).unwrap();
    assert!(!Arc::ptr_eq(&first, &reloaded));
    let after = cache.get_or_load(&config).unwrap();
    assert!(Arc::ptr_eq(&reloaded, &after));
}

#[test]
fn failed_reload_keeps_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let places = dir.path().join("places.json");
    std::fs::copy(test_fixtures::places_json(), &places).unwrap();
    let config = DataConfig {
        places_path: Some(places.clone()),
        reforms_path: Some(test_fixtures::reforms_csv()),
        ..Default::default()
    };
    let cache = RegistryCache::new(&config);
    let first = cache.get_or_load(&config).unwrap();

    std::fs::write(&places, "not json").unwrap();
    assert!(matches!(cache.reload(&config), Err(ZoningError::Data(_))));

    let still = cache.get_or_load(&config).unwrap();
    assert!(Arc::ptr_eq(&first, &still));
}

#[test]
fn missing_reforms_file_depends_on_policy() {
    let strict = DataConfig {
        places_path: Some(test_fixtures::places_json()),
        reforms_path: Some(test_fixtures::fixture_path("no_such_reforms.csv")),
        ..Default::default()
    };
    let cache = RegistryCache::new(&strict);
    assert!(matches!(cache.get_or_load(&strict), Err(ZoningError::Data(_))));

    let lenient = DataConfig {
        allow_missing_reforms: Some(true),
        ..strict
    };
    let registries = cache.get_or_load(&lenient).unwrap();
    assert!(registries.reforms.is_empty());
    assert_eq!(registries.places.place_count(), 13);
}
