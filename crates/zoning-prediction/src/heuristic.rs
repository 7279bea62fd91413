//! Heuristic reform-impact model.
//!
//! ```text
//! base        = table[reform_type]                 (10 when unrecognized)
//! adjusted    = base + base × (growth_5yr / 100) × 0.5
//! restricted  = adjusted + (restrictiveness − 1) × −5   (0 when absent)
//! size        = min(permits / 5000, 1)
//! final       = clamp(restricted × (0.8 + 0.4 × size), −30, 100)
//! se          = |final| × 0.4
//! interval    = [final − 1.96 se, final + 1.96 se]
//! ```
//!
//! Pure and deterministic. Inputs are assumed validated by the caller.

use zoning_core::errors::ComputationError;
use zoning_core::models::{PredictionBreakdown, PredictionOutput, PredictionRequest};
use zoning_core::ReformType;

/// Base increase for reform types missing from the table.
pub const DEFAULT_BASE_INCREASE_PCT: f64 = 10.0;

/// Share of the 5-year growth rate passed through to the base effect.
const GROWTH_PASS_THROUGH: f64 = 0.5;

/// Percentage points gained per unit of restrictiveness below 1.0.
const RESTRICTIVENESS_SLOPE: f64 = -5.0;

/// Annual permits at which a place counts as full-size.
const FULL_SIZE_PERMITS: f64 = 5000.0;

const SIZE_FLOOR: f64 = 0.8;
const SIZE_RANGE: f64 = 0.4;

pub const MIN_INCREASE_PCT: f64 = -30.0;
pub const MAX_INCREASE_PCT: f64 = 100.0;

/// Standard error as a fraction of the point estimate.
const STANDARD_ERROR_RATIO: f64 = 0.4;

/// Two-sided 95% normal quantile.
const Z_95: f64 = 1.96;

/// Base percentage increase by reform type.
pub fn base_increase_pct(reform_type: &ReformType) -> f64 {
    match reform_type {
        ReformType::AduLotSplit => 12.0,
        ReformType::ComprehensiveReform => 18.0,
        ReformType::ZoningUpzones => 15.0,
        ReformType::HeightDensityIncrease => 15.0,
        ReformType::ParkingReduction => 5.0,
        ReformType::AffordabilityRequirements => 3.0,
        ReformType::MixedUseZoning => 12.0,
        ReformType::TransitOrientedDevelopment => 18.0,
        ReformType::SingleFamilyElimination => 25.0,
        ReformType::Other(_) => DEFAULT_BASE_INCREASE_PCT,
    }
}

/// Compute every term of the model.
pub fn predict_breakdown(request: &PredictionRequest) -> PredictionBreakdown {
    let base = base_increase_pct(&request.reform_type);

    let growth_adjustment = base * (request.growth_rate_5yr / 100.0) * GROWTH_PASS_THROUGH;
    let adjusted = base + growth_adjustment;

    let restrictiveness_adjustment = request
        .baseline_restrictiveness
        .map(|r| (r - 1.0) * RESTRICTIVENESS_SLOPE)
        .unwrap_or(0.0);
    let with_restrictiveness = adjusted + restrictiveness_adjustment;

    let size_factor = (request.recent_permits as f64 / FULL_SIZE_PERMITS).min(1.0);
    let size_multiplier = SIZE_FLOOR + size_factor * SIZE_RANGE;
    let unclamped = with_restrictiveness * size_multiplier;

    PredictionBreakdown {
        base_pct: base,
        growth_adjustment,
        restrictiveness_adjustment,
        size_multiplier,
        unclamped_pct: unclamped,
        final_pct: unclamped.clamp(MIN_INCREASE_PCT, MAX_INCREASE_PCT),
    }
}

/// [`predict_breakdown`] that fails on a non-finite intermediate value
/// instead of letting the clamp hide it.
pub fn checked_breakdown(
    request: &PredictionRequest,
) -> Result<PredictionBreakdown, ComputationError> {
    let breakdown = predict_breakdown(request);
    ComputationError::ensure_finite("reform_estimate", breakdown.unclamped_pct)?;
    Ok(breakdown)
}

/// Point estimate and 95% interval for one reform at one place.
pub fn predict(request: &PredictionRequest) -> PredictionOutput {
    output_from(&predict_breakdown(request))
}

/// Interval around an already computed breakdown.
pub fn output_from(breakdown: &PredictionBreakdown) -> PredictionOutput {
    let estimate = breakdown.final_pct;
    let margin = Z_95 * estimate.abs() * STANDARD_ERROR_RATIO;
    PredictionOutput {
        predicted_increase_pct: estimate,
        interval: [estimate - margin, estimate + margin],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(reform: &str, growth: f64, permits: u64, r: Option<f64>) -> PredictionRequest {
        PredictionRequest {
            reform_type: ReformType::parse(reform),
            growth_rate_5yr: growth,
            recent_permits: permits,
            mf_share: 50.0,
            baseline_restrictiveness: r,
        }
    }

    #[test]
    fn reference_adu_case() {
        let out = predict(&request("ADU/Lot Split", 0.0, 5000, Some(1.0)));
        assert!((out.predicted_increase_pct - 14.4).abs() < 1e-9);
        assert!((out.interval[0] - 3.1104).abs() < 1e-9);
        assert!((out.interval[1] - 25.6896).abs() < 1e-9);
    }

    #[test]
    fn unknown_type_uses_default_base() {
        let b = predict_breakdown(&request("Bogus Type", 0.0, 0, None));
        assert_eq!(b.base_pct, DEFAULT_BASE_INCREASE_PCT);
        assert!((b.final_pct - 8.0).abs() < 1e-9);
    }

    #[test]
    fn absent_restrictiveness_contributes_nothing() {
        let b = predict_breakdown(&request("Zoning Upzones", 0.0, 5000, None));
        assert_eq!(b.restrictiveness_adjustment, 0.0);
    }

    #[test]
    fn size_factor_saturates_above_reference() {
        let at = predict(&request("Parking Reduction", 2.0, 5000, None));
        let above = predict(&request("Parking Reduction", 2.0, 80_000, None));
        assert_eq!(at, above);
    }

    #[test]
    fn negative_estimate_has_ordered_interval() {
        let out = predict(&request("Affordability Requirements", -50.0, 100, Some(2.5)));
        assert!(out.predicted_increase_pct < 0.0);
        assert!(out.interval[0] < out.predicted_increase_pct);
        assert!(out.interval[1] > out.predicted_increase_pct);
    }

    #[test]
    fn overflow_fails_instead_of_clamping() {
        let req = request("ADU/Lot Split", 0.0, 5000, Some(1e308));
        assert_eq!(predict_breakdown(&req).final_pct, MIN_INCREASE_PCT);
        assert!(matches!(
            checked_breakdown(&req),
            Err(ComputationError::NonFinite { stage: "reform_estimate", .. })
        ));
        let nan = request("ADU/Lot Split", 0.0, 5000, Some(f64::NAN));
        assert!(checked_breakdown(&nan).is_err());
        assert!(checked_breakdown(&request("ADU/Lot Split", 0.0, 5000, Some(1.0))).is_ok());
    }

    #[test]
    fn output_matches_breakdown() {
        let req = request("Mixed-Use Zoning", 7.5, 3100, Some(1.4));
        assert_eq!(
            predict(&req).predicted_increase_pct,
            predict_breakdown(&req).final_pct
        );
    }
}
