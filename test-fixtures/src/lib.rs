//! Test fixture loader for registry data files and golden model cases.
//!
//! Provides paths to the fixture files and typed deserialization of the
//! JSON fixtures, for use in tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixture data.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Places registry in JSON form (13 places).
pub fn places_json() -> PathBuf {
    fixture_path("places.json")
}

/// Small places registry in CSV form, with a quoted name containing a comma.
pub fn places_csv() -> PathBuf {
    fixture_path("places.csv")
}

/// Reform adoptions CSV (15 rows, one without a city name).
pub fn reforms_csv() -> PathBuf {
    fixture_path("city_reforms.csv")
}
