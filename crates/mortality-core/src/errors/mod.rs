mod data_error;
mod error_code;
mod mortality_error;

pub use data_error::DataError;
pub use error_code::ErrorCode;
pub use mortality_error::{MortalityError, MortalityResult};

pub mod codes {
    pub use super::error_code::{
        ALREADY_INITIALIZED, CONFIG_ERROR, INVALID_AGE, INVALID_DATA, INVALID_SEX, NO_DATA,
        UNKNOWN_LOCATION,
    };
}
