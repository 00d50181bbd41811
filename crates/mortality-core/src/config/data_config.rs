use serde::{Deserialize, Serialize};

use super::defaults;

/// Dataset selection and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Only rows with this `measure_name` are loaded.
    pub measure: String,
    /// Year to load. `None` selects the most recent year in the dataset.
    pub year: Option<u32>,
    /// Allowed deviation from 1.0 for `Percent` rows of one key.
    pub probability_tolerance: f64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            measure: defaults::DEFAULT_MEASURE.to_string(),
            year: None,
            probability_tolerance: defaults::DEFAULT_PROBABILITY_TOLERANCE,
        }
    }
}
