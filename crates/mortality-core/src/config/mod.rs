pub mod data_config;
pub mod defaults;
pub mod normalizer_config;
pub mod observability_config;
pub mod ranking_config;

use serde::{Deserialize, Serialize};

use crate::errors::{MortalityError, MortalityResult};

pub use data_config::DataConfig;
pub use normalizer_config::NormalizerConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::{RankMode, RankingConfig};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MortalityConfig {
    pub data: DataConfig,
    pub normalizer: NormalizerConfig,
    pub ranking: RankingConfig,
    pub observability: ObservabilityConfig,
}

impl MortalityConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> MortalityResult<()> {
        let tolerance = self.data.probability_tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(MortalityError::Config(format!(
                "data.probability_tolerance must be positive, got {tolerance}"
            )));
        }
        let max_age = self.normalizer.max_age;
        if max_age == 0 || max_age == u32::MAX {
            return Err(MortalityError::Config(format!(
                "normalizer.max_age must be in 1..{}, got {max_age}",
                u32::MAX
            )));
        }
        if self.data.measure.trim().is_empty() {
            return Err(MortalityError::Config(
                "data.measure must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
