//! # zoning-prediction
//!
//! Reform-impact prediction for the zoning scenario engine.
//!
//! - [`heuristic`]: per-reform percent-change model with a 95% interval
//! - [`similarity`]: feature similarity between two places
//! - [`comparables`]: ranked search for places that adopted matching reforms
//! - [`engine`]: [`ScenarioEngine`], which assembles the three scenarios

pub mod comparables;
pub mod confidence;
pub mod engine;
pub mod heuristic;
pub mod narrative;
pub mod ramp;
pub mod scenarios;
pub mod similarity;

pub use comparables::ComparableSearch;
pub use engine::ScenarioEngine;
pub use heuristic::{predict, predict_breakdown};
pub use similarity::similarity;
