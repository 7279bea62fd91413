//! # zoning-data
//!
//! The single loading boundary for registry data. Raw CSV/JSON rows are
//! converted into validated [`Place`](zoning_core::Place) and
//! [`ReformRecord`](zoning_core::ReformRecord) values exactly once, at load
//! time; the prediction core never sees untyped rows.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`loader`] | Quoting-aware CSV and JSON readers with parse-or-fail validation |
//! | [`registry`] | In-memory registries implementing the lookup traits |
//! | [`cache`] | Host-owned snapshot cache with TTL expiry and explicit reload |

pub mod cache;
pub mod loader;
pub mod registry;

mod raw;

pub use cache::RegistryCache;
pub use loader::{load_places, load_reforms};
pub use registry::{PlaceRegistry, ReformRegistry, Registries};
