//! Test fixture loader for mortality tables and inline CSV builders.
//!
//! Fixture files live in the workspace-level `test-fixtures/` directory.

use std::path::PathBuf;

/// Header row of the GBD export layout.
pub const HEADER: &str = "measure_id,measure_name,location_id,location_name,sex_id,sex_name,age_id,age_name,cause_id,cause_name,metric_id,metric_name,year,val,upper,lower";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("tables").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load a fixture file as a string.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_str(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load a table from `test-fixtures/tables/`.
pub fn load_table(name: &str) -> String {
    load_fixture_str(&format!("tables/{name}"))
}

/// One row of an inline table.
#[derive(Debug, Clone)]
pub struct Row {
    pub measure: String,
    pub location: String,
    pub sex: String,
    pub age: String,
    pub cause: String,
    pub metric: String,
    pub year: u32,
    pub val: String,
    pub upper: Option<f64>,
    pub lower: Option<f64>,
}

impl Row {
    /// A 2019 `Deaths` row in `Percent`.
    pub fn new(location: &str, sex: &str, age: &str, cause: &str, val: f64) -> Self {
        Self {
            measure: "Deaths".to_string(),
            location: location.to_string(),
            sex: sex.to_string(),
            age: age.to_string(),
            cause: cause.to_string(),
            metric: "Percent".to_string(),
            year: 2019,
            val: val.to_string(),
            upper: None,
            lower: None,
        }
    }

    pub fn metric(mut self, metric: &str) -> Self {
        self.metric = metric.to_string();
        self
    }

    pub fn measure(mut self, measure: &str) -> Self {
        self.measure = measure.to_string();
        self
    }

    pub fn year(mut self, year: u32) -> Self {
        self.year = year;
        self
    }

    /// Raw `val` cell, for values `f64` cannot print (empty, text).
    pub fn raw_val(mut self, val: &str) -> Self {
        self.val = val.to_string();
        self
    }

    /// Uncertainty bounds; `None` leaves the cell empty.
    pub fn bounds(mut self, lower: Option<f64>, upper: Option<f64>) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    fn to_line(&self) -> String {
        let cell = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        format!(
            "1,{},1,{},1,{},1,{},1,{},1,{},{},{},{},{}",
            self.measure,
            self.location,
            self.sex,
            self.age,
            self.cause,
            self.metric,
            self.year,
            self.val,
            cell(self.upper),
            cell(self.lower)
        )
    }
}

/// Render rows under the standard header.
pub fn csv(rows: &[Row]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&row.to_line());
        out.push('\n');
    }
    out
}

/// Rows for one key whose causes split the mass evenly, covering
/// `[0, 121)` with a single `0+ years` bracket.
pub fn single_bracket_rows(location: &str, sex: &str, causes: &[&str]) -> Vec<Row> {
    let share = 1.0 / causes.len() as f64;
    causes
        .iter()
        .map(|c| Row::new(location, sex, "0+ years", c, share))
        .collect()
}
