//! Population-weighted averaging of cause distributions.

use rustc_hash::FxHashMap;

use mortality_core::models::{CauseDistribution, CauseId, CauseRecord};

use crate::store::TableEntry;

/// Weighted average of several entries.
///
/// A cause missing from one input counts as probability 0 there. The
/// result is renormalized so it sums to 1 and carries the summed weight.
/// Cause order follows first appearance. Uncertainty intervals do not
/// survive aggregation.
///
/// Returns `None` when there is nothing to average.
pub(crate) fn weighted_average<'a>(
    entries: impl IntoIterator<Item = &'a TableEntry>,
) -> Option<TableEntry> {
    let mut order: Vec<CauseId> = Vec::new();
    let mut mass: FxHashMap<CauseId, f64> = FxHashMap::default();
    let mut total_weight = 0.0;

    for entry in entries {
        if entry.weight <= 0.0 {
            continue;
        }
        total_weight += entry.weight;
        for record in entry.distribution.iter() {
            let slot = mass.entry(record.cause.clone()).or_insert_with(|| {
                order.push(record.cause.clone());
                0.0
            });
            *slot += entry.weight * record.probability;
        }
    }

    if total_weight <= 0.0 || order.is_empty() {
        return None;
    }

    let sum: f64 = mass.values().sum();
    if sum <= 0.0 {
        return None;
    }

    let records = order
        .into_iter()
        .map(|cause| {
            let p = mass.get(&cause).copied().unwrap_or(0.0) / sum;
            CauseRecord::new(cause, p)
        })
        .collect();

    Some(TableEntry {
        distribution: CauseDistribution::new(records),
        weight: total_weight,
    })
}
