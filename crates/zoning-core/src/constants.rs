/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Model tag reported alongside single-reform predictions.
pub const MODEL_VERSION: &str = "v1-heuristic";

/// Shortest supported projection horizon (years).
pub const MIN_TIME_HORIZON_YEARS: u32 = 1;

/// Longest supported projection horizon (years).
pub const MAX_TIME_HORIZON_YEARS: u32 = 10;

/// Comparable cities returned per scenario request.
pub const DEFAULT_MAX_COMPARABLES: usize = 5;

/// Registry cache TTL (seconds).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Registry snapshots held by the cache at once.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 4;

/// Default place data file, relative to the host's working directory.
pub const DEFAULT_PLACES_PATH: &str = "data/places.json";

/// Default reform data file, relative to the host's working directory.
pub const DEFAULT_REFORMS_PATH: &str = "data/city_reforms.csv";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "zoning.toml";
