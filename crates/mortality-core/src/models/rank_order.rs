use serde::{Deserialize, Serialize};

/// How a distribution is turned into an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankOrder {
    /// Probability descending, ties by cause ascending.
    #[default]
    Descending,
    /// Weighted random order without replacement, reproducible for a seed.
    Sampled { seed: u64 },
}
