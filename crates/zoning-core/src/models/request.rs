use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{GrowthAssumption, ReformType};
use crate::constants::{MAX_TIME_HORIZON_YEARS, MIN_TIME_HORIZON_YEARS};
use crate::errors::ValidationError;

/// Raw scenario request as received from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub city_id: String,
    #[serde(default)]
    pub reform_types: Vec<String>,
    pub time_horizon_years: i64,
    #[serde(default)]
    pub growth_assumption: Option<String>,
}

/// A request that passed boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedScenarioRequest {
    pub city_id: String,
    /// Distinct reform types in first-seen order.
    pub reform_types: Vec<ReformType>,
    pub time_horizon_years: u32,
    pub growth_assumption: GrowthAssumption,
}

impl ScenarioRequest {
    pub fn new(
        city_id: impl Into<String>,
        reform_types: &[&str],
        time_horizon_years: i64,
        growth_assumption: Option<&str>,
    ) -> Self {
        Self {
            city_id: city_id.into(),
            reform_types: reform_types.iter().map(|s| s.to_string()).collect(),
            time_horizon_years,
            growth_assumption: growth_assumption.map(str::to_string),
        }
    }

    /// Check every request field once, at the orchestrator boundary.
    pub fn validate(&self) -> Result<ValidatedScenarioRequest, ValidationError> {
        let city_id = self.city_id.trim();
        if city_id.is_empty() {
            return Err(ValidationError::MissingField { field: "city_id" });
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut reform_types: Vec<ReformType> = Vec::with_capacity(self.reform_types.len());
        for label in self.reform_types.iter().filter(|l| !l.trim().is_empty()) {
            let rt = ReformType::parse(label);
            if seen.insert(rt.match_key()) {
                reform_types.push(rt);
            }
        }
        if reform_types.is_empty() {
            return Err(ValidationError::EmptyReformTypes);
        }

        let horizon = self.time_horizon_years;
        if horizon < i64::from(MIN_TIME_HORIZON_YEARS) || horizon > i64::from(MAX_TIME_HORIZON_YEARS)
        {
            return Err(ValidationError::TimeHorizonOutOfRange {
                value: horizon,
                min: MIN_TIME_HORIZON_YEARS,
                max: MAX_TIME_HORIZON_YEARS,
            });
        }

        let growth_assumption = GrowthAssumption::parse(self.growth_assumption.as_deref())?;

        Ok(ValidatedScenarioRequest {
            city_id: city_id.to_string(),
            reform_types,
            time_horizon_years: horizon as u32,
            growth_assumption,
        })
    }
}
