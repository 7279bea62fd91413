//! Configuration system for the zoning engine.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod data_config;
pub mod prediction_config;
pub mod zoning_config;

pub use data_config::DataConfig;
pub use prediction_config::PredictionConfig;
pub use zoning_config::ZoningConfig;
