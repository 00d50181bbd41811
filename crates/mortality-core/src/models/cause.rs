use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Cause-of-death label, shared between every distribution that mentions it.
pub type CauseId = Arc<str>;

/// Uncertainty interval reported alongside a cause probability.
///
/// Scaled by the same normalization factor as the probability, so it is
/// comparable to it. Never used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Uncertainty {
    pub lower: f64,
    pub upper: f64,
}

/// A single cause of death and its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauseRecord {
    pub cause: CauseId,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<Uncertainty>,
}

impl CauseRecord {
    pub fn new(cause: impl Into<CauseId>, probability: f64) -> Self {
        Self {
            cause: cause.into(),
            probability,
            uncertainty: None,
        }
    }

    pub fn with_uncertainty(mut self, lower: f64, upper: f64) -> Self {
        self.uncertainty = Some(Uncertainty { lower, upper });
        self
    }
}
