use super::error_code::{self, ErrorCode};
use super::DataError;

/// Top-level error type for the mortality engine.
///
/// Input errors (`UnknownLocation`, `InvalidAge`, `InvalidSex`) are the
/// caller's to fix. Everything else is a build or deployment defect.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MortalityError {
    #[error("unknown location: {location}")]
    UnknownLocation { location: String },

    #[error("invalid age: {age} (expected an integer in 0..={max_age})")]
    InvalidAge { age: f64, max_age: u32 },

    #[error("invalid sex: {sex}")]
    InvalidSex { sex: String },

    #[error("invalid mortality data: {0}")]
    InvalidData(#[from] DataError),

    #[error("mortality table is empty")]
    NoData,

    #[error("config error: {0}")]
    Config(String),

    #[error("mortality runtime already initialized")]
    AlreadyInitialized,
}

impl MortalityError {
    /// Whether the caller can recover by correcting its input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownLocation { .. } | Self::InvalidAge { .. } | Self::InvalidSex { .. }
        )
    }

    /// Whether this is an invariant violation in the data or deployment.
    pub fn is_internal(&self) -> bool {
        !self.is_input_error()
    }
}

impl ErrorCode for MortalityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownLocation { .. } => error_code::UNKNOWN_LOCATION,
            Self::InvalidAge { .. } => error_code::INVALID_AGE,
            Self::InvalidSex { .. } => error_code::INVALID_SEX,
            Self::InvalidData(_) => error_code::INVALID_DATA,
            Self::NoData => error_code::NO_DATA,
            Self::Config(_) => error_code::CONFIG_ERROR,
            Self::AlreadyInitialized => error_code::ALREADY_INITIALIZED,
        }
    }
}

/// Convenience type alias.
pub type MortalityResult<T> = Result<T, MortalityError>;
