//! ZoningErrorCode trait for host-facing error conversion.

/// Trait for mapping engine errors onto the host application's response.
/// Every error enum implements this so a route handler can pick a status
/// and a stable code string without matching on variants.
pub trait ZoningErrorCode {
    /// Returns the stable error code string (e.g., "NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the HTTP-equivalent status for the condition.
    fn status_code(&self) -> u16 {
        STATUS_INTERNAL
    }

    /// Returns the formatted client string: `[ERROR_CODE] message`.
    fn client_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const COMPUTATION_ERROR: &str = "COMPUTATION_ERROR";
pub const DATA_ERROR: &str = "DATA_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

// HTTP-equivalent statuses.
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL: u16 = 500;
