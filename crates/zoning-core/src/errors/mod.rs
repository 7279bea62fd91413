//! Error handling for the zoning scenario engine.
//! One error enum per subsystem, `thiserror` only, aggregated into [`ZoningError`].

pub mod computation_error;
pub mod config_error;
pub mod data_error;
pub mod error_code;
pub mod not_found_error;
pub mod validation_error;

pub use computation_error::ComputationError;
pub use config_error::ConfigError;
pub use data_error::DataError;
pub use error_code::ZoningErrorCode;
pub use not_found_error::NotFoundError;
pub use validation_error::ValidationError;

/// Top-level error for every fallible engine operation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ZoningError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("Computation error: {0}")]
    Computation(#[from] ComputationError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias used throughout the workspace.
pub type ZoningResult<T> = Result<T, ZoningError>;

impl ZoningErrorCode for ZoningError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::NotFound(e) => e.error_code(),
            Self::Computation(e) => e.error_code(),
            Self::Data(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }

    fn status_code(&self) -> u16 {
        match self {
            Self::Validation(e) => e.status_code(),
            Self::NotFound(e) => e.status_code(),
            Self::Computation(e) => e.status_code(),
            Self::Data(e) => e.status_code(),
            Self::Config(e) => e.status_code(),
        }
    }
}
