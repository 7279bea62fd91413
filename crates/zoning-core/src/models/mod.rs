//! Value objects exchanged between the registries, the predictor, and the host.

pub mod place;
pub mod prediction;
pub mod reform;
pub mod reform_type;
pub mod request;
pub mod scenario;

pub use place::Place;
pub use prediction::{PredictionBreakdown, PredictionOutput, PredictionRequest, ReformPrediction};
pub use reform::ReformRecord;
pub use reform_type::ReformType;
pub use request::{ScenarioRequest, ValidatedScenarioRequest};
pub use scenario::{
    ComparableCity, GrowthAssumption, ReformContribution, Scenario, ScenarioId, ScenarioResult,
    SelectedPlace, TimePathPoint,
};
