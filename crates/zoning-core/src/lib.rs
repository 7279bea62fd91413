//! # zoning-core
//!
//! Foundation crate for the zoning scenario engine.
//! Defines the data model, reform taxonomy, registry traits, errors, config,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::ZoningConfig;
pub use errors::{ZoningError, ZoningResult};
pub use models::{GrowthAssumption, Place, ReformRecord, ReformType, ScenarioId, ScenarioResult};
pub use traits::{IPlaceRegistry, IReformRegistry};
