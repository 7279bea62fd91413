//! Request validation errors.

use super::error_code::{self, ZoningErrorCode};

/// Missing or out-of-range request fields. Surfaced to the caller as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("at least one reform type is required")]
    EmptyReformTypes,

    #[error("time horizon must be between {min} and {max} years, got {value}")]
    TimeHorizonOutOfRange { value: i64, min: u32, max: u32 },

    #[error("unknown growth assumption: {value}")]
    UnknownGrowthAssumption { value: String },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("place {place_id} has a non-finite {field}")]
    NonFiniteFeature {
        place_id: String,
        field: &'static str,
    },
}

impl ZoningErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }

    fn status_code(&self) -> u16 {
        error_code::STATUS_BAD_REQUEST
    }
}
