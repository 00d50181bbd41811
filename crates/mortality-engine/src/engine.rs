//! MortalityEngine: owns the table and config, runs normalize → resolve → rank.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use mortality_core::config::MortalityConfig;
use mortality_core::errors::MortalityResult;
use mortality_core::models::{CauseRecord, DemographicKey, LocationId, RankOrder};
use mortality_table::MortalityTable;

use crate::normalizer::Normalizer;
use crate::ranking;
use crate::resolver::{Resolution, ResolutionLevel, Resolver};

/// Per-call overrides of the configured ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictOptions {
    /// Overrides `ranking.mode` / `ranking.seed`.
    pub order: Option<RankOrder>,
    /// Overrides `ranking.top_k`. `Some(0)` means no limit.
    pub top_k: Option<usize>,
}

/// Full answer to a query, with the key it normalized to and the fallback
/// level that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub key: DemographicKey,
    pub level: ResolutionLevel,
    pub causes: Vec<CauseRecord>,
}

pub struct MortalityEngine {
    table: MortalityTable,
    config: MortalityConfig,
}

impl MortalityEngine {
    pub fn new(table: MortalityTable, config: MortalityConfig) -> Self {
        Self { table, config }
    }

    /// Engine over the embedded dataset.
    pub fn embedded(config: MortalityConfig) -> MortalityResult<Self> {
        let table = MortalityTable::embedded(&config)?;
        Ok(Self::new(table, config))
    }

    /// Engine over a caller-supplied CSV dataset.
    pub fn from_csv_str(csv: &str, config: MortalityConfig) -> MortalityResult<Self> {
        let table = MortalityTable::from_csv_str(csv, &config)?;
        Ok(Self::new(table, config))
    }

    pub fn table(&self) -> &MortalityTable {
        &self.table
    }

    pub fn config(&self) -> &MortalityConfig {
        &self.config
    }

    pub fn normalize(
        &self,
        location: &str,
        age: impl Into<f64>,
        sex: &str,
    ) -> MortalityResult<DemographicKey> {
        Normalizer::new(&self.table).normalize(location, age.into(), sex)
    }

    pub fn resolve(&self, key: &DemographicKey) -> MortalityResult<Resolution> {
        Resolver::new(&self.table).resolve(key)
    }

    /// Ordered causes for a person, using the configured ranking.
    pub fn predict(
        &self,
        location: &str,
        age: impl Into<f64>,
        sex: &str,
    ) -> MortalityResult<Vec<CauseRecord>> {
        self.predict_with(location, age, sex, PredictOptions::default())
            .map(|p| p.causes)
    }

    pub fn predict_with(
        &self,
        location: &str,
        age: impl Into<f64>,
        sex: &str,
        options: PredictOptions,
    ) -> MortalityResult<Prediction> {
        let key = self.normalize(location, age, sex)?;
        let resolution = self.resolve(&key)?;

        let order = options.order.unwrap_or_else(|| self.config.ranking.order());
        let mut causes = ranking::materialize(&resolution.distribution, order);
        if let Some(k) = options
            .top_k
            .or(self.config.ranking.top_k)
            .filter(|k| *k > 0)
        {
            causes.truncate(k);
        }

        debug!(key = %key, ?order, returned = causes.len(), "prediction");
        Ok(Prediction {
            key,
            level: resolution.level,
            causes,
        })
    }

    /// Every location the engine accepts, sorted. Shared, not copied.
    pub fn locations(&self) -> Arc<[LocationId]> {
        self.table.locations()
    }
}
