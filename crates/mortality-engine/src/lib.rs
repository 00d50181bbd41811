//! # mortality-engine
//!
//! Query path of the mortality-cause estimator:
//! normalize → resolve → rank.
//!
//! ## Architecture
//!
//! - `normalizer`: validates raw (location, age, sex) into a [`DemographicKey`]
//! - `resolver`: exact lookup with pre-aggregated fallbacks
//! - `ranking`: deterministic ranking or seeded weighted sampling
//! - `engine`: [`MortalityEngine`], owns the table and config
//! - `runtime`: process-wide engine behind `OnceLock`, plus the free
//!   [`predict`] and [`get_locations`] entry points
//!
//! [`DemographicKey`]: mortality_core::DemographicKey

pub mod engine;
pub mod normalizer;
pub mod ranking;
pub mod resolver;
pub mod runtime;

pub use engine::{MortalityEngine, PredictOptions, Prediction};
pub use normalizer::Normalizer;
pub use resolver::{Resolution, ResolutionLevel, Resolver};
pub use runtime::{get_locations, predict};
