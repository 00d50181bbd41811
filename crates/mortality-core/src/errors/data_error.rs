use super::error_code::{self, ErrorCode};

/// Load-time dataset errors. Raised only while building the mortality table.
///
/// `row` is the 1-based data row (header excluded).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("malformed CSV at line {line}: {message}")]
    Csv { line: u64, message: String },

    #[error("row {row}: unrecognized age group '{label}'")]
    UnknownAgeGroup { row: usize, label: String },

    #[error("row {row}: unrecognized sex '{label}'")]
    UnknownSex { row: usize, label: String },

    #[error("row {row}: unrecognized metric '{label}'")]
    UnknownMetric { row: usize, label: String },

    #[error("row {row}: invalid {field} value {value}")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: f64,
    },

    #[error("row {row}: uncertainty needs both lower and upper bounds")]
    PartialUncertainty { row: usize },

    #[error("duplicate cause '{cause}' for {key}")]
    DuplicateCause { key: String, cause: String },

    #[error("{key} uses metric '{second}', but the selection uses '{first}'")]
    MixedMetrics {
        key: String,
        first: String,
        second: String,
    },

    #[error("probabilities for {key} sum to {sum}, expected 1")]
    ProbabilitySum { key: String, sum: f64 },

    #[error("values for {key} sum to zero")]
    ZeroMass { key: String },

    #[error("locations '{first}' and '{second}' differ only by case")]
    AmbiguousLocation { first: String, second: String },

    #[error("age brackets {first} and {second} overlap")]
    BracketOverlap { first: String, second: String },

    #[error("no age bracket covers ages {from}..{to}")]
    BracketGap { from: u32, to: u32 },

    #[error("age brackets end at {covered_to}, must cover up to {max_age}")]
    IncompleteCoverage { covered_to: u32, max_age: u32 },
}

impl ErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_DATA
    }
}
