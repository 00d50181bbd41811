//! CSV ingestion and load-time validation.

use std::collections::BTreeSet;

use csv::{ReaderBuilder, Trim};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use mortality_core::config::DataConfig;
use mortality_core::errors::{DataError, MortalityError, MortalityResult};
use mortality_core::models::{
    AgeBracket, CauseDistribution, CauseId, CauseRecord, DemographicKey, LocationId, SexCategory,
};

use crate::age_group::{self, AgeGroup};
use crate::catalog::LocationCatalog;
use crate::metric::Metric;
use crate::record::MortalityRecord;
use crate::store::{MortalityTable, TableEntry};

/// Counters reported once a table is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows in the CSV.
    pub rows_read: usize,
    /// Rows that became part of an entry.
    pub rows_loaded: usize,
    /// Rows dropped by measure, year, or aggregate age-group selection.
    pub rows_skipped: usize,
    /// Year the table was built from.
    pub year: u32,
}

struct RawCause {
    cause: CauseId,
    val: f64,
    lower: Option<f64>,
    upper: Option<f64>,
}

struct Accumulator {
    metric: Metric,
    causes: Vec<RawCause>,
}

/// Interns location and cause names so every key and record shares one
/// allocation per distinct name.
#[derive(Default)]
struct Interner {
    locations: FxHashMap<String, LocationId>,
    causes: FxHashMap<String, CauseId>,
}

impl Interner {
    fn location(&mut self, name: &str) -> LocationId {
        self.locations
            .entry(name.to_string())
            .or_insert_with(|| LocationId::new(name))
            .clone()
    }

    fn cause(&mut self, name: &str) -> CauseId {
        self.causes
            .entry(name.to_string())
            .or_insert_with(|| CauseId::from(name))
            .clone()
    }
}

pub(crate) fn build(csv: &str, config: &DataConfig, max_age: u32) -> MortalityResult<MortalityTable> {
    let mut stats = LoadStats::default();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(csv.as_bytes());

    // Pass 1: parse, keep the configured measure.
    let measure = config.measure.trim();
    let mut candidates: Vec<(usize, MortalityRecord)> = Vec::new();
    for (i, result) in reader.deserialize::<MortalityRecord>().enumerate() {
        let record = result.map_err(csv_error)?;
        stats.rows_read += 1;
        if record.measure_name.eq_ignore_ascii_case(measure) {
            candidates.push((i + 1, record));
        } else {
            stats.rows_skipped += 1;
        }
    }

    let year = match config.year {
        Some(year) => year,
        None => candidates
            .iter()
            .map(|(_, r)| r.year)
            .max()
            .ok_or(MortalityError::NoData)?,
    };
    stats.year = year;

    // Pass 2: validate rows and group them by key.
    let mut interner = Interner::default();
    let mut groups: FxHashMap<DemographicKey, Accumulator> = FxHashMap::default();
    // Weights are only comparable within one metric, so a selection uses one.
    let mut selection_metric: Option<Metric> = None;
    for (row, record) in candidates {
        if record.year != year {
            stats.rows_skipped += 1;
            continue;
        }
        let bracket = match age_group::parse(&record.age_name, max_age) {
            Some(AgeGroup::Bracket(bracket)) => bracket,
            Some(AgeGroup::Skipped) => {
                stats.rows_skipped += 1;
                continue;
            }
            None => {
                return Err(DataError::UnknownAgeGroup {
                    row,
                    label: record.age_name,
                }
                .into())
            }
        };
        let sex = SexCategory::parse(&record.sex_name).ok_or_else(|| DataError::UnknownSex {
            row,
            label: record.sex_name.clone(),
        })?;
        let metric = Metric::parse(&record.metric_name).ok_or_else(|| DataError::UnknownMetric {
            row,
            label: record.metric_name.clone(),
        })?;
        check_value(row, "val", record.val)?;
        if let Some(lower) = record.lower {
            check_value(row, "lower", lower)?;
        }
        if let Some(upper) = record.upper {
            check_value(row, "upper", upper)?;
        }
        if record.lower.is_some() != record.upper.is_some() {
            return Err(DataError::PartialUncertainty { row }.into());
        }

        let key = DemographicKey::new(interner.location(&record.location_name), bracket, sex);
        let cause = interner.cause(&record.cause_name);

        let first = *selection_metric.get_or_insert(metric);
        if first != metric {
            return Err(DataError::MixedMetrics {
                key: key.to_string(),
                first: first.to_string(),
                second: metric.to_string(),
            }
            .into());
        }

        let acc = groups.entry(key.clone()).or_insert_with(|| Accumulator {
            metric,
            causes: Vec::new(),
        });
        if acc.causes.iter().any(|c| c.cause == cause) {
            return Err(DataError::DuplicateCause {
                key: key.to_string(),
                cause: cause.to_string(),
            }
            .into());
        }
        acc.causes.push(RawCause {
            cause,
            val: record.val,
            lower: record.lower,
            upper: record.upper,
        });
        stats.rows_loaded += 1;
    }

    if groups.is_empty() {
        return Err(MortalityError::NoData);
    }
    debug!(
        rows_read = stats.rows_read,
        rows_skipped = stats.rows_skipped,
        year,
        "mortality rows selected"
    );

    // Normalize each key into a distribution.
    let mut entries = FxHashMap::default();
    let mut brackets = BTreeSet::new();
    for (key, acc) in groups {
        let entry = normalize(&key, acc, config.probability_tolerance)?;
        brackets.insert(key.bracket);
        entries.insert(key, entry);
    }

    let brackets: Vec<AgeBracket> = brackets.into_iter().collect();
    validate_partition(&brackets, max_age)?;

    let catalog = LocationCatalog::build(interner.locations.into_values())?;

    info!(
        rows_loaded = stats.rows_loaded,
        rows_skipped = stats.rows_skipped,
        keys = entries.len(),
        locations = catalog.len(),
        brackets = brackets.len(),
        year,
        "mortality table built"
    );

    Ok(MortalityTable::assemble(
        entries, brackets, catalog, max_age, stats,
    ))
}

fn csv_error(err: csv::Error) -> MortalityError {
    DataError::Csv {
        line: err.position().map(|p| p.line()).unwrap_or_default(),
        message: err.to_string(),
    }
    .into()
}

fn check_value(row: usize, field: &'static str, value: f64) -> Result<(), DataError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DataError::InvalidValue { row, field, value })
    }
}

fn normalize(key: &DemographicKey, acc: Accumulator, tolerance: f64) -> MortalityResult<TableEntry> {
    let sum: f64 = acc.causes.iter().map(|c| c.val).sum();
    if sum <= 0.0 {
        return Err(DataError::ZeroMass {
            key: key.to_string(),
        }
        .into());
    }
    if acc.metric == Metric::Percent && (sum - 1.0).abs() > tolerance {
        return Err(DataError::ProbabilitySum {
            key: key.to_string(),
            sum,
        }
        .into());
    }

    let weight = match acc.metric {
        Metric::Number => sum,
        Metric::Percent | Metric::Rate => 1.0,
    };

    let records = acc
        .causes
        .into_iter()
        .map(|c| {
            let record = CauseRecord::new(c.cause, c.val / sum);
            match (c.lower, c.upper) {
                (Some(lower), Some(upper)) => record.with_uncertainty(lower / sum, upper / sum),
                _ => record,
            }
        })
        .collect();

    Ok(TableEntry {
        distribution: CauseDistribution::new(records),
        weight,
    })
}

/// Sorted brackets must tile `[0, max_age]` exactly.
fn validate_partition(brackets: &[AgeBracket], max_age: u32) -> Result<(), DataError> {
    let mut covered_to = 0;
    let mut previous: Option<&AgeBracket> = None;
    for bracket in brackets {
        if bracket.lo < covered_to {
            return Err(DataError::BracketOverlap {
                first: previous.map(ToString::to_string).unwrap_or_default(),
                second: bracket.to_string(),
            });
        }
        if bracket.lo > covered_to {
            return Err(DataError::BracketGap {
                from: covered_to,
                to: bracket.lo,
            });
        }
        covered_to = bracket.hi;
        previous = Some(bracket);
    }
    if covered_to <= max_age {
        return Err(DataError::IncompleteCoverage {
            covered_to,
            max_age,
        });
    }
    Ok(())
}
