use serde::Deserialize;

/// One row of the dataset, in the Global Burden of Disease export layout.
///
/// Columns are matched by header name. The `*_id` columns are not read.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MortalityRecord {
    pub measure_name: String,
    pub location_name: String,
    pub sex_name: String,
    pub age_name: String,
    pub cause_name: String,
    pub metric_name: String,
    pub year: u32,
    pub val: f64,
    pub upper: Option<f64>,
    pub lower: Option<f64>,
}
