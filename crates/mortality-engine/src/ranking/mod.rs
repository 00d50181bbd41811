//! Ranker/Sampler: distribution → ordered cause list.
//!
//! Output length always equals the number of causes in the distribution;
//! truncation to a top-K is the caller's business.

mod ranker;
mod sampler;

use mortality_core::models::{CauseDistribution, CauseRecord, RankOrder};

/// Materialize a distribution as an ordered list.
pub fn materialize(distribution: &CauseDistribution, order: RankOrder) -> Vec<CauseRecord> {
    let mut records = distribution.records().to_vec();
    match order {
        RankOrder::Descending => ranker::rank(&mut records),
        RankOrder::Sampled { seed } => sampler::sample_order(&mut records, seed),
    }
    records
}
