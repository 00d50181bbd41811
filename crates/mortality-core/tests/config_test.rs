use mortality_core::config::*;
use mortality_core::models::RankOrder;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MortalityConfig::from_toml("").unwrap();

    // Data defaults
    assert_eq!(config.data.measure, "Deaths");
    assert_eq!(config.data.year, None);
    assert_eq!(config.data.probability_tolerance, 1e-6);

    // Normalizer defaults
    assert_eq!(config.normalizer.max_age, 120);

    // Ranking defaults
    assert_eq!(config.ranking.mode, RankMode::Rank);
    assert_eq!(config.ranking.top_k, None);
    assert_eq!(config.ranking.order(), RankOrder::Descending);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");

    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[data]
year = 2019

[ranking]
mode = "sample"
seed = 42
top_k = 10
"#;
    let config = MortalityConfig::from_toml(toml).unwrap();
    assert_eq!(config.data.year, Some(2019));
    // Non-overridden fields keep defaults
    assert_eq!(config.data.measure, "Deaths");
    assert_eq!(config.ranking.top_k, Some(10));
    assert_eq!(config.ranking.order(), RankOrder::Sampled { seed: 42 });
}

#[test]
fn sample_mode_without_seed_uses_default_seed() {
    let config = MortalityConfig::from_toml("[ranking]\nmode = \"sample\"").unwrap();
    assert_eq!(
        config.ranking.order(),
        RankOrder::Sampled {
            seed: defaults::DEFAULT_SAMPLE_SEED
        }
    );
}

#[test]
fn unknown_rank_mode_is_rejected() {
    assert!(MortalityConfig::from_toml("[ranking]\nmode = \"shuffle\"").is_err());
}

#[test]
fn validate_rejects_bad_values() {
    let mut config = MortalityConfig::default();
    config.data.probability_tolerance = 0.0;
    assert!(config.validate().is_err());

    let mut config = MortalityConfig::default();
    config.normalizer.max_age = 0;
    assert!(config.validate().is_err());

    let mut config = MortalityConfig::default();
    config.data.measure = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_max_age_without_room_for_an_open_bracket() {
    let config = MortalityConfig::from_toml("[normalizer]\nmax_age = 4294967295").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, mortality_core::MortalityError::Config(_)));
    assert!(err.to_string().contains("max_age"));

    let config = MortalityConfig::from_toml("[normalizer]\nmax_age = 4294967294").unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn config_serde_roundtrip() {
    let mut config = MortalityConfig::default();
    config.ranking.top_k = Some(5);
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = MortalityConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}
