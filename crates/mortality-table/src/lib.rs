//! # mortality-table
//!
//! The Mortality Table Store. Parses the embedded CSV dataset once,
//! validates it, normalizes every (location, age bracket, sex) entry into a
//! cause distribution, and pre-aggregates the fallback levels the resolver
//! walks when an exact entry is missing.
//!
//! The built [`MortalityTable`] is immutable and `Send + Sync`; concurrent
//! lookups need no locking.

mod age_group;
mod aggregate;
mod builder;
pub mod catalog;
pub mod embedded;
mod metric;
mod nearest;
mod record;
mod store;

pub use builder::LoadStats;
pub use catalog::LocationCatalog;
pub use metric::Metric;
pub use store::{MortalityTable, TableEntry};
