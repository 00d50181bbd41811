use serde::{Deserialize, Serialize};

use super::defaults;

/// Input validation limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Oldest accepted age, inclusive. Open-ended brackets such as
    /// `80+ years` extend up to here.
    pub max_age: u32,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_age: defaults::DEFAULT_MAX_AGE,
        }
    }
}
