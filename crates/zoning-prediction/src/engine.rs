//! ScenarioEngine: validates a request, runs the heuristic per reform,
//! searches comparables, and assembles the three scenarios.

use tracing::{debug, info};
use zoning_core::config::PredictionConfig;
use zoning_core::constants::MODEL_VERSION;
use zoning_core::errors::{ComputationError, NotFoundError, ValidationError};
use zoning_core::models::{
    PredictionRequest, ReformContribution, ReformPrediction, ScenarioRequest, SelectedPlace,
};
use zoning_core::{
    IPlaceRegistry, IReformRegistry, Place, ReformType, ScenarioId, ScenarioResult, ZoningResult,
};

use crate::comparables::ComparableSearch;
use crate::confidence::{effect_consistency, estimate_confidence};
use crate::heuristic;
use crate::narrative::{self, NarrativeContext};
use crate::ramp::mean_ramp_years;
use crate::scenarios::{annual_permits, build_scenarios, round1, ScenarioInputs};

/// Comparables attached to a single-reform prediction.
const SIMILAR_CITIES_FOR_SINGLE_REFORM: usize = 5;

/// Scenario engine over borrowed registries. Cheap to construct per request.
pub struct ScenarioEngine<'a> {
    places: &'a dyn IPlaceRegistry,
    reforms: &'a dyn IReformRegistry,
    config: PredictionConfig,
}

impl<'a> ScenarioEngine<'a> {
    pub fn new(
        places: &'a dyn IPlaceRegistry,
        reforms: &'a dyn IReformRegistry,
        config: PredictionConfig,
    ) -> Self {
        Self {
            places,
            reforms,
            config,
        }
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Build optimistic, realistic, and pessimistic scenarios for a request.
    ///
    /// Fails with a validation error for malformed requests, `NotFound` for
    /// an unknown place, and a computation error if a non-finite value
    /// appears. No partial result is ever returned.
    pub fn build_scenarios(&self, request: &ScenarioRequest) -> ZoningResult<ScenarioResult> {
        let request = request.validate()?;
        let place = self.resolve_place(&request.city_id)?;
        let restrictiveness = self.reforms.latest_restrictiveness(&place.place_id);
        let horizon = request.time_horizon_years;

        let mut contributions = Vec::with_capacity(request.reform_types.len());
        let mut combined = 0.0;
        for reform_type in &request.reform_types {
            let breakdown = heuristic::checked_breakdown(&PredictionRequest::for_place(
                reform_type.clone(),
                place,
                restrictiveness,
            ))?;
            let output = heuristic::output_from(&breakdown);
            debug!(
                reform_type = %reform_type,
                predicted_increase_pct = output.predicted_increase_pct,
                "reform estimate"
            );
            combined += output.predicted_increase_pct;
            contributions.push(ReformContribution {
                reform_type: reform_type.clone(),
                predicted_increase_pct: round1(output.predicted_increase_pct),
                confidence_interval: output.interval.map(round1),
            });
        }
        let combined = ComputationError::ensure_finite("combined_estimate", combined)?;

        let comparables = self.search().find(
            place,
            &request.reform_types,
            self.config.effective_max_comparables(),
        )?;
        let effects: Vec<f64> = comparables
            .iter()
            .map(|c| c.historical_change_pct)
            .collect();
        let base_confidence =
            estimate_confidence(comparables.len(), effect_consistency(&effects), horizon);

        let scenarios = build_scenarios(&ScenarioInputs {
            point_estimate: combined,
            baseline_permits: place.recent_permits,
            base_confidence,
            horizon_years: horizon,
            ramp_years: mean_ramp_years(&request.reform_types),
            n_comparables: comparables.len(),
        });
        let realistic_pct = scenarios
            .iter()
            .find(|s| s.id == ScenarioId::Realistic)
            .map_or(round1(combined), |s| s.predicted_permit_increase_pct);

        let key_findings = narrative::key_findings(&NarrativeContext {
            place,
            reform_types: &request.reform_types,
            realistic_pct,
            n_comparables: comparables.len(),
            horizon_years: horizon,
            growth_assumption: request.growth_assumption,
        });
        let caveats = narrative::caveats(comparables.len(), horizon, request.reform_types.len());

        info!(
            city_id = %place.place_id,
            reforms = request.reform_types.len(),
            horizon_years = horizon,
            realistic_pct,
            comparables = comparables.len(),
            "built scenarios"
        );

        Ok(ScenarioResult {
            selected_city: SelectedPlace {
                place_id: place.place_id.clone(),
                place_name: place.place_name.clone(),
                state_name: place.state_name.clone(),
            },
            selected_reforms: request.reform_types,
            time_horizon_years: horizon,
            growth_assumption: request.growth_assumption,
            baseline_annual_permits: place.recent_permits,
            scenarios,
            reform_contributions: contributions,
            comparable_cities: comparables,
            key_findings,
            caveats,
        })
    }

    /// Heuristic prediction for one reform at one place, with its breakdown
    /// and the most similar cities that adopted the same reform.
    pub fn predict_reform(&self, city_id: &str, reform_type: &str) -> ZoningResult<ReformPrediction> {
        let city_id = city_id.trim();
        if city_id.is_empty() {
            return Err(ValidationError::MissingField { field: "city_id" }.into());
        }
        if reform_type.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "reform_type",
            }
            .into());
        }
        let reform_type = ReformType::parse(reform_type);
        let place = self.resolve_place(city_id)?;
        let restrictiveness = self.reforms.latest_restrictiveness(&place.place_id);

        let breakdown = heuristic::checked_breakdown(&PredictionRequest::for_place(
            reform_type.clone(),
            place,
            restrictiveness,
        ))?;
        let output = heuristic::output_from(&breakdown);
        let pct = round1(output.predicted_increase_pct);

        let similar_cities = self.search().find(
            place,
            std::slice::from_ref(&reform_type),
            SIMILAR_CITIES_FOR_SINGLE_REFORM,
        )?;

        info!(
            city_id = %place.place_id,
            reform_type = %reform_type,
            predicted_increase_pct = pct,
            "predicted single reform"
        );

        Ok(ReformPrediction {
            place_id: place.place_id.clone(),
            reform_type,
            predicted_increase_pct: pct,
            confidence_interval: output.interval.map(round1),
            baseline_permits: place.recent_permits,
            predicted_permits: annual_permits(place.recent_permits, pct),
            model_version: MODEL_VERSION.to_string(),
            breakdown,
            similar_cities,
        })
    }

    /// Look up a place and reject features the model cannot use.
    fn resolve_place(&self, place_id: &str) -> ZoningResult<&'a Place> {
        let places: &'a dyn IPlaceRegistry = self.places;
        let place = places.place(place_id).ok_or_else(|| NotFoundError::Place {
            place_id: place_id.to_string(),
        })?;
        place.check_finite()?;
        Ok(place)
    }

    fn search(&self) -> ComparableSearch<'a> {
        ComparableSearch::new(
            self.places,
            self.reforms,
            self.config.effective_as_of_year(),
        )
    }
}
