//! Optimistic / realistic / pessimistic projections around a point estimate.

use zoning_core::models::Scenario;
use zoning_core::ScenarioId;

use crate::confidence::scenario_confidence;
use crate::ramp::time_path;

/// Share of the realistic estimate added or removed for the outer scenarios.
const SPREAD_RATIO: f64 = 0.5;

/// Smallest spread, so the three scenarios stay distinct at or below zero.
const MIN_SPREAD_PCT: f64 = 0.1;

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scenario percentages, already rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioSpread {
    pub optimistic: f64,
    pub realistic: f64,
    pub pessimistic: f64,
}

impl ScenarioSpread {
    pub fn around(point_estimate: f64) -> Self {
        let realistic = round1(point_estimate);
        let spread = round1(realistic.abs() * SPREAD_RATIO).max(MIN_SPREAD_PCT);
        Self {
            optimistic: round1(realistic + spread),
            realistic,
            pessimistic: round1(realistic - spread),
        }
    }

    pub fn pct(&self, id: ScenarioId) -> f64 {
        match id {
            ScenarioId::Optimistic => self.optimistic,
            ScenarioId::Realistic => self.realistic,
            ScenarioId::Pessimistic => self.pessimistic,
        }
    }
}

/// Annual permits after a percentage change, to the nearest unit.
pub fn annual_permits(baseline: u64, pct: f64) -> i64 {
    (baseline as f64 * (1.0 + pct / 100.0)).round() as i64
}

/// Inputs shared by all three scenarios.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioInputs {
    pub point_estimate: f64,
    pub baseline_permits: u64,
    pub base_confidence: f64,
    pub horizon_years: u32,
    pub ramp_years: f64,
    pub n_comparables: usize,
}

/// Build the three scenarios in their fixed order.
pub fn build_scenarios(inputs: &ScenarioInputs) -> Vec<Scenario> {
    let spread = ScenarioSpread::around(inputs.point_estimate);
    ScenarioId::ALL
        .iter()
        .map(|&id| {
            let pct = spread.pct(id);
            Scenario {
                id,
                name: id.display_name().to_string(),
                description: description(id, inputs.n_comparables),
                predicted_permit_increase_pct: pct,
                predicted_annual_permits: annual_permits(inputs.baseline_permits, pct),
                confidence: scenario_confidence(id, inputs.base_confidence),
                key_drivers: key_drivers(id).iter().map(|d| d.to_string()).collect(),
                time_path: time_path(pct, inputs.horizon_years, inputs.ramp_years),
            }
        })
        .collect()
}

fn description(id: ScenarioId, n_comparables: usize) -> String {
    match id {
        ScenarioId::Optimistic => "Best case: strong implementation, favorable economic \
            conditions, and higher-than-average developer response."
            .to_string(),
        ScenarioId::Realistic => format!(
            "Most likely outcome given current local conditions, informed by {n_comparables} \
             comparable cities that adopted these reforms."
        ),
        ScenarioId::Pessimistic => "Conservative case: implementation delays, economic \
            headwinds, or a muted developer response."
            .to_string(),
    }
}

fn key_drivers(id: ScenarioId) -> [&'static str; 3] {
    match id {
        ScenarioId::Optimistic => ["Strong implementation", "Economic growth", "Developer interest"],
        ScenarioId::Realistic => ["Historical average", "Local conditions", "Reform type"],
        ScenarioId::Pessimistic => [
            "Implementation challenges",
            "Economic uncertainty",
            "Market conditions",
        ],
    }
}
