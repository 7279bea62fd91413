//! Registry loading errors.

use super::error_code::{self, ZoningErrorCode};

/// Errors raised while turning raw CSV/JSON rows into validated records.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed CSV in {path}: {message}")]
    Csv { path: String, message: String },

    #[error("malformed JSON in {path}: {message}")]
    Json { path: String, message: String },

    #[error("unsupported data format for {path} (expected .json or .csv)")]
    UnsupportedFormat { path: String },

    #[error("{path} row {row}: invalid {field}: {message}")]
    InvalidField {
        path: String,
        row: usize,
        field: &'static str,
        message: String,
    },

    #[error("{path}: duplicate place id {place_id}")]
    DuplicatePlace { path: String, place_id: String },
}

impl ZoningErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        error_code::DATA_ERROR
    }
}
