use std::cmp::Ordering;

use mortality_core::models::CauseRecord;

/// Probability descending, then cause ascending.
fn compare_descending(a: &CauseRecord, b: &CauseRecord) -> Ordering {
    b.probability
        .total_cmp(&a.probability)
        .then_with(|| a.cause.cmp(&b.cause))
}

pub(super) fn rank(records: &mut [CauseRecord]) {
    records.sort_by(compare_descending);
}
