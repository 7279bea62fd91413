//! Error taxonomy: codes, statuses, and aggregation.

use zoning_core::errors::{
    ComputationError, ConfigError, DataError, NotFoundError, ValidationError, ZoningErrorCode,
};
use zoning_core::ZoningError;

#[test]
fn validation_maps_to_bad_request() {
    let err: ZoningError = ValidationError::EmptyReformTypes.into();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert_eq!(err.status_code(), 400);
}

#[test]
fn missing_place_maps_to_not_found() {
    let err: ZoningError = NotFoundError::Place {
        place_id: "9999999".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "NOT_FOUND");
    assert_eq!(err.status_code(), 404);
    assert_eq!(
        err.client_string(),
        "[NOT_FOUND] Not found: place not found: 9999999"
    );
}

#[test]
fn internal_failures_map_to_500() {
    let computation: ZoningError = ComputationError::NonFinite {
        stage: "combined_estimate",
        value: f64::NAN,
    }
    .into();
    let data: ZoningError = DataError::UnsupportedFormat {
        path: "places.xml".to_string(),
    }
    .into();
    let config: ZoningError = ConfigError::FileNotFound {
        path: "zoning.toml".to_string(),
    }
    .into();
    for err in [computation, data, config] {
        assert_eq!(err.status_code(), 500);
    }
}

#[test]
fn ensure_finite_passes_finite_and_rejects_nan() {
    assert_eq!(ComputationError::ensure_finite("stage", 1.5), Ok(1.5));
    assert!(matches!(
        ComputationError::ensure_finite("stage", f64::INFINITY),
        Err(ComputationError::NonFinite { stage: "stage", .. })
    ));
}

#[test]
fn horizon_message_names_bounds() {
    let err = ValidationError::TimeHorizonOutOfRange {
        value: 11,
        min: 1,
        max: 10,
    };
    assert_eq!(
        err.to_string(),
        "time horizon must be between 1 and 10 years, got 11"
    );
}
