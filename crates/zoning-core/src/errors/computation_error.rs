//! Internal numeric failures.

use super::error_code::{self, ZoningErrorCode};

/// A non-finite value surfaced inside the model. Never expected once inputs
/// are validated, so it is reported as an internal fault rather than hidden.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputationError {
    #[error("non-finite value produced in {stage}: {value}")]
    NonFinite { stage: &'static str, value: f64 },
}

impl ComputationError {
    /// Pass `value` through, or fail with the stage that produced it.
    pub fn ensure_finite(stage: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { stage, value })
        }
    }
}

impl ZoningErrorCode for ComputationError {
    fn error_code(&self) -> &'static str {
        error_code::COMPUTATION_ERROR
    }
}
