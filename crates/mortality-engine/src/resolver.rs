//! Distribution Resolver: exact entry first, then pre-aggregated fallbacks.

use serde::Serialize;
use tracing::debug;

use mortality_core::constants::PROBABILITY_EPSILON;
use mortality_core::errors::{MortalityError, MortalityResult};
use mortality_core::models::{AgeBracket, CauseDistribution, DemographicKey};
use mortality_table::MortalityTable;

/// Which level of the fallback chain answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionLevel {
    /// The table has an entry for the exact key.
    Exact,
    /// Same location and bracket, across sex categories.
    SexAggregate,
    /// Same location, closest bracket with data.
    NearestBracket,
    /// Whole-table distribution.
    Global,
}

/// A resolved distribution and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub distribution: CauseDistribution,
    pub level: ResolutionLevel,
    /// Bracket the distribution was taken from. `None` for `Global`.
    pub bracket: Option<AgeBracket>,
}

pub struct Resolver<'a> {
    table: &'a MortalityTable,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a MortalityTable) -> Self {
        Self { table }
    }

    /// Resolve a key to a normalized, non-empty distribution.
    ///
    /// Walks: exact → sex aggregate → nearest bracket (same sex, then sex
    /// aggregate) → global. Every level is precomputed by the table, so
    /// this is a handful of hash lookups. Fails with `NoData` only when the
    /// table has no data at all.
    pub fn resolve(&self, key: &DemographicKey) -> MortalityResult<Resolution> {
        let resolution = self.walk(key).ok_or(MortalityError::NoData)?;
        debug_assert!(resolution.distribution.is_normalized(PROBABILITY_EPSILON));
        debug!(
            key = %key,
            level = ?resolution.level,
            causes = resolution.distribution.len(),
            "resolved distribution"
        );
        Ok(resolution)
    }

    fn walk(&self, key: &DemographicKey) -> Option<Resolution> {
        if let Some(distribution) = self.table.lookup(key) {
            return Some(Resolution {
                distribution,
                level: ResolutionLevel::Exact,
                bracket: Some(key.bracket),
            });
        }

        if let Some(distribution) = self.table.sex_aggregate(&key.location, &key.bracket) {
            return Some(Resolution {
                distribution,
                level: ResolutionLevel::SexAggregate,
                bracket: Some(key.bracket),
            });
        }

        let nearest = self.table.nearest_with_sex(key).or_else(|| {
            self.table
                .nearest_sex_aggregate(&key.location, &key.bracket)
        });
        if let Some((bracket, distribution)) = nearest {
            return Some(Resolution {
                distribution,
                level: ResolutionLevel::NearestBracket,
                bracket: Some(bracket),
            });
        }

        self.table.global().map(|distribution| Resolution {
            distribution,
            level: ResolutionLevel::Global,
            bracket: None,
        })
    }
}
