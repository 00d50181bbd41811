use mortality_core::config::MortalityConfig;
use mortality_table::MortalityTable;
use proptest::prelude::*;
use test_fixtures::{csv, Row};

/// A random tiling of `[0, 121)` into brackets, one location, counts per cause.
fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    (
        prop::collection::btree_set(1u32..120, 0..6),
        prop::collection::vec(1u32..500, 1..5),
    )
        .prop_map(|(cuts, counts)| {
            let mut bounds: Vec<u32> = vec![0];
            bounds.extend(cuts);
            let mut rows = Vec::new();
            for (i, lo) in bounds.iter().enumerate() {
                let label = match bounds.get(i + 1) {
                    Some(next) => format!("{lo}-{} years", next - 1),
                    None => format!("{lo}+ years"),
                };
                for (c, count) in counts.iter().enumerate() {
                    for sex in ["Male", "Female"] {
                        rows.push(
                            Row::new("Somewhere", sex, &label, &format!("cause_{c}"), 0.0)
                                .metric("Number")
                                .raw_val(&(count + i as u32).to_string()),
                        );
                    }
                }
            }
            rows
        })
}

proptest! {
    #[test]
    fn every_level_is_normalized(rows in arb_rows()) {
        let table = MortalityTable::from_csv_str(&csv(&rows), &MortalityConfig::default()).unwrap();
        for (_, entry) in table.iter() {
            prop_assert!(entry.distribution.is_normalized(1e-6));
        }
        let global = table.global().unwrap();
        prop_assert!(global.is_normalized(1e-6));
        for bracket in table.brackets() {
            let location = table.locations()[0].clone();
            let agg = table.sex_aggregate(&location, bracket).unwrap();
            prop_assert!(agg.is_normalized(1e-6));
        }
    }

    #[test]
    fn every_age_has_exactly_one_bracket(rows in arb_rows()) {
        let table = MortalityTable::from_csv_str(&csv(&rows), &MortalityConfig::default()).unwrap();
        for age in 0..=120u32 {
            let containing = table.brackets().iter().filter(|b| b.contains(age)).count();
            prop_assert_eq!(containing, 1, "age {}", age);
            prop_assert!(table.bracket_for_age(age).is_some());
        }
    }
}
