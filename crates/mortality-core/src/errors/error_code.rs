//! Stable machine-readable error codes for host boundaries.

/// Every error enum implements this to expose a structured code a host
/// can match on without parsing messages.
pub trait ErrorCode {
    /// The error code string (e.g., "UNKNOWN_LOCATION").
    fn error_code(&self) -> &'static str;

    /// `[ERROR_CODE] message`, the form handed across a host boundary.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_LOCATION: &str = "UNKNOWN_LOCATION";
pub const INVALID_AGE: &str = "INVALID_AGE";
pub const INVALID_SEX: &str = "INVALID_SEX";
pub const INVALID_DATA: &str = "INVALID_DATA";
pub const NO_DATA: &str = "NO_DATA";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ALREADY_INITIALIZED: &str = "ALREADY_INITIALIZED";
