use serde::{Deserialize, Serialize};

use crate::models::RankOrder;

use super::defaults;

/// Ranking mode as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    #[default]
    Rank,
    Sample,
}

/// Output ordering and truncation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub mode: RankMode,
    /// Seed for `sample` mode.
    pub seed: Option<u64>,
    /// Keep only the first K entries after ranking. `None` or 0 keeps all.
    pub top_k: Option<usize>,
}

impl RankingConfig {
    pub fn order(&self) -> RankOrder {
        match self.mode {
            RankMode::Rank => RankOrder::Descending,
            RankMode::Sample => RankOrder::Sampled {
                seed: self.seed.unwrap_or(defaults::DEFAULT_SAMPLE_SEED),
            },
        }
    }
}
