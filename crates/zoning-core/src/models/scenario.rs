use std::fmt;

use serde::{Deserialize, Serialize};

use super::ReformType;
use crate::errors::ValidationError;

/// Named outcome projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioId {
    Optimistic,
    Realistic,
    Pessimistic,
}

impl ScenarioId {
    /// Scenario order in every result.
    pub const ALL: [ScenarioId; 3] = [
        ScenarioId::Optimistic,
        ScenarioId::Realistic,
        ScenarioId::Pessimistic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Optimistic => "optimistic",
            Self::Realistic => "realistic",
            Self::Pessimistic => "pessimistic",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Optimistic => "Optimistic",
            Self::Realistic => "Realistic",
            Self::Pessimistic => "Pessimistic",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macro-economic backdrop tag chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthAssumption {
    #[default]
    Baseline,
    Optimistic,
    Pessimistic,
}

impl GrowthAssumption {
    /// Parse a request tag. `None` means baseline; `fast`/`slow` are accepted aliases.
    pub fn parse(tag: Option<&str>) -> Result<Self, ValidationError> {
        let Some(raw) = tag else {
            return Ok(Self::Baseline);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "baseline" => Ok(Self::Baseline),
            "optimistic" | "fast" => Ok(Self::Optimistic),
            "pessimistic" | "slow" => Ok(Self::Pessimistic),
            _ => Err(ValidationError::UnknownGrowthAssumption {
                value: raw.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Optimistic => "optimistic",
            Self::Pessimistic => "pessimistic",
        }
    }
}

impl fmt::Display for GrowthAssumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cumulative increase reached by a given year of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePathPoint {
    pub year: u32,
    pub cumulative_increase_pct: f64,
}

/// One projected outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub description: String,
    /// One decimal place.
    pub predicted_permit_increase_pct: f64,
    pub predicted_annual_permits: i64,
    /// 0-100.
    pub confidence: u8,
    pub key_drivers: Vec<String>,
    pub time_path: Vec<TimePathPoint>,
}

/// A place that adopted a matching reform, ranked by feature similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableCity {
    pub place_id: String,
    pub place_name: String,
    pub state_name: String,
    pub reform_type: ReformType,
    pub adoption_year: i32,
    pub years_since_reform: i32,
    pub historical_change_pct: f64,
    pub current_annual_permits: u64,
    pub similarity_score: f64,
}

/// Individual point estimate of one requested reform. These sum to the
/// realistic scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReformContribution {
    pub reform_type: ReformType,
    pub predicted_increase_pct: f64,
    pub confidence_interval: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPlace {
    pub place_id: String,
    pub place_name: String,
    pub state_name: String,
}

/// Full answer to a scenario request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub selected_city: SelectedPlace,
    pub selected_reforms: Vec<ReformType>,
    pub time_horizon_years: u32,
    pub growth_assumption: GrowthAssumption,
    pub baseline_annual_permits: u64,
    /// Always optimistic, realistic, pessimistic.
    pub scenarios: Vec<Scenario>,
    pub reform_contributions: Vec<ReformContribution>,
    pub comparable_cities: Vec<ComparableCity>,
    pub key_findings: Vec<String>,
    pub caveats: Vec<String>,
}

impl ScenarioResult {
    pub fn scenario(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }
}
