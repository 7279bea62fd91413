//! Lookup failures.

use super::error_code::{self, ZoningErrorCode};

/// Unknown identifiers in a request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NotFoundError {
    #[error("place not found: {place_id}")]
    Place { place_id: String },
}

impl ZoningErrorCode for NotFoundError {
    fn error_code(&self) -> &'static str {
        error_code::NOT_FOUND
    }

    fn status_code(&self) -> u16 {
        error_code::STATUS_NOT_FOUND
    }
}
