use serde::{Deserialize, Serialize};

use super::{ComparableCity, Place, ReformType};

/// Inputs to the heuristic predictor for one reform type at one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub reform_type: ReformType,
    pub growth_rate_5yr: f64,
    pub recent_permits: u64,
    pub mf_share: f64,
    pub baseline_restrictiveness: Option<f64>,
}

impl PredictionRequest {
    /// Build a request from a place's features.
    pub fn for_place(
        reform_type: ReformType,
        place: &Place,
        baseline_restrictiveness: Option<f64>,
    ) -> Self {
        Self {
            reform_type,
            growth_rate_5yr: place.growth_rate_5yr,
            recent_permits: place.recent_permits,
            mf_share: place.mf_share,
            baseline_restrictiveness,
        }
    }
}

/// Point estimate plus 95% interval, in percent change of annual permits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutput {
    pub predicted_increase_pct: f64,
    /// `[low, high]`.
    pub interval: [f64; 2],
}

/// Every intermediate term of the heuristic, for explanation output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionBreakdown {
    pub base_pct: f64,
    pub growth_adjustment: f64,
    pub restrictiveness_adjustment: f64,
    pub size_multiplier: f64,
    pub unclamped_pct: f64,
    pub final_pct: f64,
}

/// Host-facing answer for a single reform at a single place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReformPrediction {
    pub place_id: String,
    pub reform_type: ReformType,
    pub predicted_increase_pct: f64,
    pub confidence_interval: [f64; 2],
    pub baseline_permits: u64,
    pub predicted_permits: i64,
    pub model_version: String,
    pub breakdown: PredictionBreakdown,
    pub similar_cities: Vec<ComparableCity>,
}
