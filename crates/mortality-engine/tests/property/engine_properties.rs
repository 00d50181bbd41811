use mortality_core::config::MortalityConfig;
use mortality_core::models::RankOrder;
use mortality_engine::{MortalityEngine, PredictOptions};
use proptest::prelude::*;
use std::sync::OnceLock;

fn engine() -> &'static MortalityEngine {
    static ENGINE: OnceLock<MortalityEngine> = OnceLock::new();
    ENGINE.get_or_init(|| MortalityEngine::embedded(MortalityConfig::default()).unwrap())
}

fn arb_query() -> impl Strategy<Value = (usize, u32, &'static str)> {
    (0usize..5, 0u32..=120, prop::sample::select(vec!["male", "female", "both"]))
}

fn arb_order() -> impl Strategy<Value = RankOrder> {
    prop_oneof![
        Just(RankOrder::Descending),
        any::<u64>().prop_map(|seed| RankOrder::Sampled { seed }),
    ]
}

proptest! {
    #[test]
    fn every_valid_query_answers_a_distribution((loc, age, sex) in arb_query()) {
        let locations = engine().locations();
        let result = engine().predict(locations[loc].as_str(), age, sex).unwrap();
        prop_assert!(!result.is_empty());
        let total: f64 = result.iter().map(|r| r.probability).sum();
        prop_assert!((total - 1.0).abs() < 1e-6);
        prop_assert!(result.iter().all(|r| (0.0..=1.0).contains(&r.probability)));
    }

    #[test]
    fn descending_results_are_sorted((loc, age, sex) in arb_query()) {
        let locations = engine().locations();
        let result = engine().predict(locations[loc].as_str(), age, sex).unwrap();
        for pair in result.windows(2) {
            prop_assert!(
                pair[0].probability > pair[1].probability
                    || (pair[0].probability == pair[1].probability && pair[0].cause < pair[1].cause)
            );
        }
    }

    #[test]
    fn identical_queries_give_identical_answers(
        (loc, age, sex) in arb_query(),
        order in arb_order(),
    ) {
        let locations = engine().locations();
        let options = PredictOptions { order: Some(order), top_k: None };
        let a = engine().predict_with(locations[loc].as_str(), age, sex, options).unwrap();
        let b = engine().predict_with(locations[loc].as_str(), age, sex, options).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_ages_are_rejected(age in 121u32..10_000) {
        prop_assert!(engine().predict("Tokyo", age, "male").unwrap_err().is_input_error());
    }
}
