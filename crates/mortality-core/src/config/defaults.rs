// Single source of truth for all default values.

// --- Data ---
pub const DEFAULT_MEASURE: &str = "Deaths";
pub const DEFAULT_PROBABILITY_TOLERANCE: f64 = 1e-6;

// --- Normalizer ---
pub const DEFAULT_MAX_AGE: u32 = 120;

// --- Ranking ---
pub const DEFAULT_SAMPLE_SEED: u64 = 0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
