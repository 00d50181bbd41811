//! Process-wide engine.
//!
//! The engine is a singleton stored behind `OnceLock`. A host either calls
//! `initialize()` once with its own options, or lets the first `predict` /
//! `get_locations` build one from the embedded dataset and default config.
//! After a failed `initialize()`, queries return that failure until a later
//! `initialize()` succeeds; the embedded dataset is never substituted.

use std::sync::{Arc, Mutex, OnceLock};

use tracing::{info, warn};

use mortality_core::config::MortalityConfig;
use mortality_core::constants::VERSION;
use mortality_core::errors::{MortalityError, MortalityResult};
use mortality_core::models::{CauseRecord, LocationId};
use mortality_core::tracing_setup;

use crate::engine::MortalityEngine;

/// Global singleton.
static RUNTIME: OnceLock<Arc<MortalityEngine>> = OnceLock::new();

/// Error from the last failed `initialize()`, cleared on success.
static FAILED_INIT: Mutex<Option<MortalityError>> = Mutex::new(None);

fn failed_init() -> std::sync::MutexGuard<'static, Option<MortalityError>> {
    FAILED_INIT.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Options for initializing the runtime.
#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. If None, uses defaults.
    pub config_toml: Option<String>,
    /// CSV dataset. If None, uses the embedded one.
    pub dataset_csv: Option<String>,
    /// Install the tracing subscriber.
    pub init_tracing: bool,
}

fn build(opts: &RuntimeOptions) -> MortalityResult<MortalityEngine> {
    let config = match &opts.config_toml {
        Some(toml_str) => MortalityConfig::from_toml(toml_str)
            .map_err(|e| MortalityError::Config(e.to_string()))?,
        None => MortalityConfig::default(),
    };

    if opts.init_tracing {
        tracing_setup::init_tracing(&config.observability.log_level);
    }

    let engine = match &opts.dataset_csv {
        Some(csv) => MortalityEngine::from_csv_str(csv, config)?,
        None => MortalityEngine::embedded(config)?,
    };
    info!(
        version = VERSION,
        locations = engine.table().catalog().len(),
        entries = engine.table().len(),
        "mortality runtime ready"
    );
    Ok(engine)
}

/// Initialize the global engine.
///
/// Returns an error if already initialized or if the dataset or config is
/// invalid. Such failures are deployment defects, not input errors.
pub fn initialize(opts: RuntimeOptions) -> MortalityResult<()> {
    if RUNTIME.get().is_some() {
        return Err(MortalityError::AlreadyInitialized);
    }
    let engine = match build(&opts) {
        Ok(engine) => engine,
        Err(err) => {
            warn!(error = %err, "mortality runtime initialization failed");
            *failed_init() = Some(err.clone());
            return Err(err);
        }
    };
    RUNTIME
        .set(Arc::new(engine))
        .map_err(|_| MortalityError::AlreadyInitialized)?;
    *failed_init() = None;
    Ok(())
}

/// Get the global engine, building the default one on first use.
///
/// Returns the error of a failed `initialize()` instead of falling back to
/// the default engine.
pub fn get() -> MortalityResult<Arc<MortalityEngine>> {
    if let Some(engine) = RUNTIME.get() {
        return Ok(Arc::clone(engine));
    }
    if let Some(err) = failed_init().as_ref() {
        return Err(err.clone());
    }
    let engine = Arc::new(build(&RuntimeOptions::default())?);
    // Another caller may have won the race; theirs is kept.
    Ok(Arc::clone(RUNTIME.get_or_init(|| engine)))
}

/// Check if the runtime has been initialized.
pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

/// Ordered causes of death for a person.
///
/// Fails with `UnknownLocation`, `InvalidAge` or `InvalidSex` on bad input.
pub fn predict(location: &str, age: impl Into<f64>, sex: &str) -> MortalityResult<Vec<CauseRecord>> {
    get()?.predict(location, age, sex)
}

/// All known locations, sorted, without duplicates.
pub fn get_locations() -> MortalityResult<Arc<[LocationId]>> {
    Ok(get()?.locations())
}
