//! Seeded weighted ordering without replacement.
//!
//! Each cause draws `u ~ U(0, 1]` and gets key `ln(u) / p`; sorting by key
//! descending is equivalent to drawing causes one by one with probability
//! proportional to `p` (Efraimidis–Spirakis). Zero-probability causes go
//! last, in ranked order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mortality_core::models::CauseRecord;

use super::ranker;

pub(super) fn sample_order(records: &mut Vec<CauseRecord>, seed: u64) {
    // Canonical order first, so the draw does not depend on input order.
    ranker::rank(records);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut keyed: Vec<(f64, CauseRecord)> = records
        .drain(..)
        .map(|record| {
            let u: f64 = rng.gen_range(f64::EPSILON..=1.0);
            let key = if record.probability > 0.0 {
                u.ln() / record.probability
            } else {
                f64::NEG_INFINITY
            };
            (key, record)
        })
        .collect();

    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    records.extend(keyed.into_iter().map(|(_, record)| record));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<CauseRecord> {
        vec![
            CauseRecord::new("rare", 0.1),
            CauseRecord::new("common", 0.9),
            CauseRecord::new("never", 0.0),
        ]
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = records();
        let mut b = records();
        sample_order(&mut a, 1234);
        sample_order(&mut b, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut a = records();
        let mut b = records();
        b.reverse();
        sample_order(&mut a, 77);
        sample_order(&mut b, 77);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_probability_goes_last() {
        for seed in 0..50 {
            let mut out = records();
            sample_order(&mut out, seed);
            assert_eq!(&*out[2].cause, "never");
        }
    }

    #[test]
    fn heavier_cause_usually_first() {
        let first_common = (0..400)
            .filter(|seed| {
                let mut out = records();
                sample_order(&mut out, *seed);
                &*out[0].cause == "common"
            })
            .count();
        assert!(first_common > 300, "common first only {first_common}/400 times");
    }
}
