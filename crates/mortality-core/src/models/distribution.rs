use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::CauseRecord;

/// A normalized probability distribution over causes of death.
///
/// The records live behind an `Arc`, so cloning a distribution out of the
/// table never copies the cause list.
#[derive(Debug, Clone, PartialEq)]
pub struct CauseDistribution {
    records: Arc<[CauseRecord]>,
}

impl CauseDistribution {
    /// Wrap already-normalized records. Callers are responsible for the
    /// sum-to-one invariant; see [`CauseDistribution::is_normalized`].
    pub fn new(records: Vec<CauseRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[CauseRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CauseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.probability).sum()
    }

    /// Whether the probabilities sum to 1 within `tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        !self.records.is_empty() && (self.total() - 1.0).abs() <= tolerance
    }

    /// Probability of a cause, or 0 when the cause is absent.
    pub fn probability_of(&self, cause: &str) -> f64 {
        self.records
            .iter()
            .find(|r| &*r.cause == cause)
            .map(|r| r.probability)
            .unwrap_or(0.0)
    }

    /// Whether two distributions share the same backing allocation.
    pub fn shares_storage_with(&self, other: &CauseDistribution) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl Serialize for CauseDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}
