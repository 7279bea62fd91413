//! How quickly a reform's effect builds up after adoption.

use zoning_core::models::TimePathPoint;
use zoning_core::ReformType;

use crate::scenarios::round1;

/// Ramp used for reform types without an observed adoption curve.
const DEFAULT_RAMP_YEARS: f64 = 3.0;

/// Shape of the early ramp; > 1 gives a slow start.
const RAMP_EXPONENT: f64 = 1.5;

/// Years until a reform type reaches its full effect.
pub fn typical_ramp_years(reform_type: &ReformType) -> f64 {
    match reform_type {
        ReformType::AduLotSplit => 3.0,
        ReformType::ComprehensiveReform => 5.0,
        ReformType::ZoningUpzones => 4.0,
        ReformType::HeightDensityIncrease => 4.0,
        ReformType::ParkingReduction => 2.0,
        ReformType::AffordabilityRequirements => 3.0,
        ReformType::MixedUseZoning => 4.0,
        ReformType::TransitOrientedDevelopment => 5.0,
        ReformType::SingleFamilyElimination => 4.0,
        ReformType::Other(_) => DEFAULT_RAMP_YEARS,
    }
}

/// Mean ramp across a reform package.
pub fn mean_ramp_years(reform_types: &[ReformType]) -> f64 {
    if reform_types.is_empty() {
        return DEFAULT_RAMP_YEARS;
    }
    reform_types.iter().map(typical_ramp_years).sum::<f64>() / reform_types.len() as f64
}

/// Fraction of the full effect realized `years_since` years after adoption, in [0, 1].
pub fn adoption_progress(years_since: i32, ramp_years: f64) -> f64 {
    (f64::from(years_since) / ramp_years).clamp(0.0, 1.0)
}

/// Cumulative increase for each year of the horizon, on an S-shaped ramp
/// that reaches `peak_pct` after `ramp_years`.
pub fn time_path(peak_pct: f64, horizon_years: u32, ramp_years: f64) -> Vec<TimePathPoint> {
    (1..=horizon_years)
        .map(|year| {
            let y = f64::from(year);
            let factor = if y <= ramp_years {
                (y / ramp_years).powf(RAMP_EXPONENT)
            } else {
                1.0
            };
            TimePathPoint {
                year,
                cumulative_increase_pct: round1(peak_pct * factor),
            }
        })
        .collect()
}
