//! Collaborator seams consumed by the prediction core.

pub mod registry;

pub use registry::{IPlaceRegistry, IReformRegistry};
