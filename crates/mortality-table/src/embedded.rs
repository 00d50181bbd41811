//! The dataset compiled into the binary.

/// Cause-of-death shares by location, sex, and age group (GBD export layout).
pub const EMBEDDED_DATASET: &str = include_str!("../data/mortality_data.csv");
