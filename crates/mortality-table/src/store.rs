use std::sync::Arc;

use rustc_hash::FxHashMap;

use mortality_core::config::MortalityConfig;
use mortality_core::errors::MortalityResult;
use mortality_core::models::{
    AgeBracket, CauseDistribution, DemographicKey, LocationId, SexCategory,
};

use crate::aggregate::weighted_average;
use crate::builder::{self, LoadStats};
use crate::catalog::LocationCatalog;
use crate::embedded::EMBEDDED_DATASET;
use crate::nearest;

/// A normalized distribution plus the population weight used when it is
/// averaged with others.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    pub distribution: CauseDistribution,
    pub weight: f64,
}

/// Immutable mapping from [`DemographicKey`] to cause distribution, with
/// every fallback level pre-aggregated at build time.
#[derive(Debug)]
pub struct MortalityTable {
    entries: FxHashMap<DemographicKey, TableEntry>,
    ordered_keys: Vec<DemographicKey>,
    brackets: Vec<AgeBracket>,
    sex_aggregates: FxHashMap<(LocationId, usize), TableEntry>,
    nearest_by_sex: FxHashMap<(LocationId, SexCategory), Vec<usize>>,
    nearest_aggregate: FxHashMap<LocationId, Vec<usize>>,
    global: Option<TableEntry>,
    catalog: LocationCatalog,
    max_age: u32,
    stats: LoadStats,
}

impl MortalityTable {
    /// Build from the dataset compiled into this crate.
    pub fn embedded(config: &MortalityConfig) -> MortalityResult<Self> {
        Self::from_csv_str(EMBEDDED_DATASET, config)
    }

    /// Build from a CSV export in the GBD layout.
    ///
    /// Every dataset defect surfaces here as `InvalidData`, or `NoData` when
    /// no row survives measure/year selection.
    pub fn from_csv_str(csv: &str, config: &MortalityConfig) -> MortalityResult<Self> {
        config.validate()?;
        builder::build(csv, &config.data, config.normalizer.max_age)
    }

    pub(crate) fn assemble(
        entries: FxHashMap<DemographicKey, TableEntry>,
        brackets: Vec<AgeBracket>,
        catalog: LocationCatalog,
        max_age: u32,
        stats: LoadStats,
    ) -> Self {
        let mut ordered_keys: Vec<DemographicKey> = entries.keys().cloned().collect();
        ordered_keys.sort();

        let bracket_idx = |b: &AgeBracket| brackets.binary_search(b).unwrap_or_default();

        // Level 1: per (location, bracket), across sexes.
        let mut by_cell: FxHashMap<(LocationId, usize), Vec<&DemographicKey>> =
            FxHashMap::default();
        for key in &ordered_keys {
            by_cell
                .entry((key.location.clone(), bracket_idx(&key.bracket)))
                .or_default()
                .push(key);
        }
        let mut sex_aggregates = FxHashMap::default();
        for (cell, keys) in by_cell {
            let both = keys.iter().find(|k| k.sex == SexCategory::Both);
            let aggregate = match both {
                Some(key) => entries.get(*key).cloned(),
                None => weighted_average(keys.iter().filter_map(|k| entries.get(*k))),
            };
            if let Some(aggregate) = aggregate {
                sex_aggregates.insert(cell, aggregate);
            }
        }

        // Level 2: nearest bracket with data, per (location, sex) and per
        // location over the sex aggregates.
        let mut present_by_sex: FxHashMap<(LocationId, SexCategory), Vec<bool>> =
            FxHashMap::default();
        for key in &ordered_keys {
            present_by_sex
                .entry((key.location.clone(), key.sex))
                .or_insert_with(|| vec![false; brackets.len()])[bracket_idx(&key.bracket)] = true;
        }
        let nearest_by_sex = present_by_sex
            .into_iter()
            .filter_map(|(k, present)| nearest::build_index(&brackets, &present).map(|i| (k, i)))
            .collect();

        let mut present_aggregate: FxHashMap<LocationId, Vec<bool>> = FxHashMap::default();
        for (location, idx) in sex_aggregates.keys() {
            present_aggregate
                .entry(location.clone())
                .or_insert_with(|| vec![false; brackets.len()])[*idx] = true;
        }
        let nearest_aggregate = present_aggregate
            .into_iter()
            .filter_map(|(k, present)| nearest::build_index(&brackets, &present).map(|i| (k, i)))
            .collect();

        // Level 3: everything. Sex aggregates avoid counting a `Both` entry
        // on top of its own `Male`/`Female` parts.
        let mut cells: Vec<&(LocationId, usize)> = sex_aggregates.keys().collect();
        cells.sort();
        let global = weighted_average(cells.into_iter().filter_map(|c| sex_aggregates.get(c)));

        Self {
            entries,
            ordered_keys,
            brackets,
            sex_aggregates,
            nearest_by_sex,
            nearest_aggregate,
            global,
            catalog,
            max_age,
            stats,
        }
    }

    /// Exact-match lookup.
    pub fn lookup(&self, key: &DemographicKey) -> Option<CauseDistribution> {
        self.entries.get(key).map(|e| e.distribution.clone())
    }

    pub fn entry(&self, key: &DemographicKey) -> Option<&TableEntry> {
        self.entries.get(key)
    }

    /// Distribution for a (location, bracket) cell across sex categories.
    pub fn sex_aggregate(
        &self,
        location: &LocationId,
        bracket: &AgeBracket,
    ) -> Option<CauseDistribution> {
        let idx = self.bracket_index(bracket)?;
        self.sex_aggregates
            .get(&(location.clone(), idx))
            .map(|e| e.distribution.clone())
    }

    /// Closest bracket with an exact entry for the key's location and sex.
    pub fn nearest_with_sex(&self, key: &DemographicKey) -> Option<(AgeBracket, CauseDistribution)> {
        let idx = self.bracket_index(&key.bracket)?;
        let near = *self
            .nearest_by_sex
            .get(&(key.location.clone(), key.sex))?
            .get(idx)?;
        let bracket = self.brackets[near];
        let found = DemographicKey::new(key.location.clone(), bracket, key.sex);
        self.lookup(&found).map(|d| (bracket, d))
    }

    /// Closest bracket with a sex aggregate for the location.
    pub fn nearest_sex_aggregate(
        &self,
        location: &LocationId,
        bracket: &AgeBracket,
    ) -> Option<(AgeBracket, CauseDistribution)> {
        let idx = self.bracket_index(bracket)?;
        let near = *self.nearest_aggregate.get(location)?.get(idx)?;
        self.sex_aggregates
            .get(&(location.clone(), near))
            .map(|e| (self.brackets[near], e.distribution.clone()))
    }

    /// Population-weighted distribution over the whole table.
    pub fn global(&self) -> Option<CauseDistribution> {
        self.global.as_ref().map(|e| e.distribution.clone())
    }

    /// Loaded brackets, sorted and partitioning `[0, max_age]`.
    pub fn brackets(&self) -> &[AgeBracket] {
        &self.brackets
    }

    /// The bracket containing `age`, found by binary search.
    pub fn bracket_for_age(&self, age: u32) -> Option<AgeBracket> {
        let idx = self.brackets.partition_point(|b| b.hi <= age);
        self.brackets.get(idx).copied().filter(|b| b.contains(age))
    }

    fn bracket_index(&self, bracket: &AgeBracket) -> Option<usize> {
        self.brackets.binary_search(bracket).ok()
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// Shared, sorted view of every location in the table.
    pub fn locations(&self) -> Arc<[LocationId]> {
        self.catalog.locations()
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Number of exact entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&DemographicKey, &TableEntry)> {
        self.ordered_keys
            .iter()
            .filter_map(|k| self.entries.get(k).map(|e| (k, e)))
    }
}
