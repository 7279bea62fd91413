//! Feature similarity between two places.
//!
//! Each feature difference is normalized by a fixed scale, the three are
//! combined as a Euclidean distance, and the distance maps to a score with
//! `exp(-d)`. Identical features score exactly 1.

use zoning_core::Place;

const PERMIT_SCALE: f64 = 10_000.0;
const GROWTH_SCALE: f64 = 100.0;
const MF_SHARE_SCALE: f64 = 100.0;

/// Similarity score in (0, 1]. Pure; callers sort.
pub fn similarity(a: &Place, b: &Place) -> f64 {
    let permits = (a.permits_f64() - b.permits_f64()).abs() / PERMIT_SCALE;
    let growth = (a.growth_rate_5yr - b.growth_rate_5yr).abs() / GROWTH_SCALE;
    let mf = (a.mf_share - b.mf_share).abs() / MF_SHARE_SCALE;

    let distance = (permits * permits + growth * growth + mf * mf).sqrt();

    // Far-apart places underflow exp(); keep the score strictly positive.
    (-distance).exp().max(f64::MIN_POSITIVE)
}
