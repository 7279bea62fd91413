//! Property tests for the heuristic, similarity scoring, and scenario spread.

use proptest::prelude::*;
use zoning_core::models::PredictionRequest;
use zoning_core::{Place, ReformType};
use zoning_prediction::heuristic::{predict, MAX_INCREASE_PCT, MIN_INCREASE_PCT};
use zoning_prediction::scenarios::{annual_permits, build_scenarios, ScenarioInputs, ScenarioSpread};
use zoning_prediction::similarity;

fn reform_type() -> impl Strategy<Value = ReformType> {
    prop_oneof![
        (0..ReformType::RECOGNIZED.len()).prop_map(|i| ReformType::RECOGNIZED[i].clone()),
        "[A-Za-z ]{1,20}".prop_map(|s| ReformType::parse(&s)),
    ]
}

fn prediction_request() -> impl Strategy<Value = PredictionRequest> {
    (
        reform_type(),
        -100.0..500.0f64,
        0u64..200_000,
        0.0..=100.0f64,
        proptest::option::of(0.1..5.0f64),
    )
        .prop_map(|(reform_type, growth, permits, mf, r)| PredictionRequest {
            reform_type,
            growth_rate_5yr: growth,
            recent_permits: permits,
            mf_share: mf,
            baseline_restrictiveness: r,
        })
}

fn place() -> impl Strategy<Value = Place> {
    (0u64..100_000, -100.0..500.0f64, 0.0..=100.0f64).prop_map(|(permits, growth, mf)| Place {
        place_id: "p".to_string(),
        place_name: "P".to_string(),
        state_id: "00".to_string(),
        state_name: "S".to_string(),
        recent_permits: permits,
        growth_rate_5yr: growth,
        mf_share: mf,
    })
}

proptest! {
    #[test]
    fn predict_is_deterministic(req in prediction_request()) {
        let a = predict(&req);
        let b = predict(&req);
        prop_assert_eq!(a.predicted_increase_pct.to_bits(), b.predicted_increase_pct.to_bits());
        prop_assert_eq!(a.interval[0].to_bits(), b.interval[0].to_bits());
        prop_assert_eq!(a.interval[1].to_bits(), b.interval[1].to_bits());
    }

    #[test]
    fn predict_is_clamped(req in prediction_request()) {
        let pct = predict(&req).predicted_increase_pct;
        prop_assert!((MIN_INCREASE_PCT..=MAX_INCREASE_PCT).contains(&pct));
    }

    #[test]
    fn interval_brackets_estimate(req in prediction_request()) {
        let out = predict(&req);
        prop_assert!(out.interval[0] <= out.predicted_increase_pct);
        prop_assert!(out.interval[1] >= out.predicted_increase_pct);
    }

    #[test]
    fn similarity_to_self_is_one(a in place()) {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn similarity_is_bounded_and_symmetric(a in place(), b in place()) {
        let ab = similarity(&a, &b);
        prop_assert!(ab > 0.0 && ab <= 1.0);
        prop_assert_eq!(ab, similarity(&b, &a));
    }

    #[test]
    fn scenarios_strictly_ordered(estimate in -300.0..1000.0f64) {
        let s = ScenarioSpread::around(estimate);
        prop_assert!(s.optimistic > s.realistic);
        prop_assert!(s.realistic > s.pessimistic);
    }

    #[test]
    fn scenario_permits_follow_rounded_pct(
        estimate in -300.0..1000.0f64,
        baseline in 0u64..100_000,
        confidence in 20.0..=95.0f64,
        horizon in 1u32..=10,
    ) {
        let scenarios = build_scenarios(&ScenarioInputs {
            point_estimate: estimate,
            baseline_permits: baseline,
            base_confidence: confidence,
            horizon_years: horizon,
            ramp_years: 3.5,
            n_comparables: 3,
        });
        prop_assert_eq!(scenarios.len(), 3);
        for s in &scenarios {
            prop_assert_eq!(
                s.predicted_annual_permits,
                annual_permits(baseline, s.predicted_permit_increase_pct)
            );
            prop_assert_eq!(s.time_path.len() as u32, horizon);
        }
    }
}
