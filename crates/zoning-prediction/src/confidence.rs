//! Confidence scoring for scenario outputs.

use zoning_core::ScenarioId;

const BASE_CONFIDENCE: f64 = 50.0;
const PER_COMPARABLE: f64 = 5.0;
const MAX_COMPARABLE_BONUS: f64 = 25.0;
const CONSISTENCY_WEIGHT: f64 = 15.0;
const PER_HORIZON_YEAR: f64 = 2.0;
const MAX_HORIZON_BONUS: f64 = 10.0;
const MIN_CONFIDENCE: f64 = 20.0;
const MAX_CONFIDENCE: f64 = 95.0;

/// Dispersion assumed when only one observation is available, as a fraction of the mean.
const SINGLE_OBSERVATION_DISPERSION: f64 = 0.3;

/// Consistency when the mean historical effect is not positive.
const NEUTRAL_CONSISTENCY: f64 = 0.5;

/// How consistent the comparable cities' historical effects are, in [0, 1].
pub fn effect_consistency(effects: &[f64]) -> f64 {
    if effects.is_empty() {
        return 1.0 - SINGLE_OBSERVATION_DISPERSION;
    }
    let n = effects.len() as f64;
    let mean = effects.iter().sum::<f64>() / n;
    if mean <= 0.0 {
        return NEUTRAL_CONSISTENCY;
    }
    let std = if effects.len() > 1 {
        (effects.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / n).sqrt()
    } else {
        mean * SINGLE_OBSERVATION_DISPERSION
    };
    (1.0 - std / mean).max(0.0)
}

/// Base confidence (20-95) from evidence volume, consistency, and horizon.
pub fn estimate_confidence(n_comparables: usize, consistency: f64, horizon_years: u32) -> f64 {
    let confidence = BASE_CONFIDENCE
        + (n_comparables as f64 * PER_COMPARABLE).min(MAX_COMPARABLE_BONUS)
        + consistency * CONSISTENCY_WEIGHT
        + (f64::from(horizon_years) * PER_HORIZON_YEAR).min(MAX_HORIZON_BONUS);
    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Integer confidence for one scenario. Extremes are less certain than the
/// central case, and the optimistic case least of all.
pub fn scenario_confidence(id: ScenarioId, base: f64) -> u8 {
    let factor = match id {
        ScenarioId::Realistic => 1.0,
        ScenarioId::Pessimistic => 0.8,
        ScenarioId::Optimistic => 0.6,
    };
    (base * factor).round().clamp(0.0, 100.0) as u8
}
