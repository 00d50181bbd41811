//! # mortality-core
//!
//! Foundation crate for the mortality-cause estimation engine.
//! Defines the data model, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::MortalityConfig;
pub use errors::{DataError, ErrorCode, MortalityError, MortalityResult};
pub use models::{
    AgeBracket, CauseDistribution, CauseId, CauseRecord, DemographicKey, LocationId, RankOrder,
    SexCategory, Uncertainty,
};
