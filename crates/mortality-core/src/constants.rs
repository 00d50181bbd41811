/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance for "sums to 1.0" checks on resolved distributions.
pub const PROBABILITY_EPSILON: f64 = 1e-6;

/// Environment variable read by `tracing_setup::init_tracing`.
pub const LOG_ENV_VAR: &str = "MORTALITY_LOG";

/// Age-group labels that describe aggregates rather than a bracket.
pub const AGGREGATE_AGE_GROUPS: &[&str] = &["All ages", "Age-standardized"];
