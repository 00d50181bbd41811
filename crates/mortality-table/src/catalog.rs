//! Location Catalog: the sorted set of locations present in the table.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use mortality_core::errors::{DataError, MortalityResult};
use mortality_core::models::LocationId;

/// Built once with the table. `locations()` hands out the same shared
/// slice on every call.
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    ordered: Arc<[LocationId]>,
    by_folded: FxHashMap<String, LocationId>,
}

impl LocationCatalog {
    /// Build from distinct locations. Two names that differ only in case or
    /// surrounding whitespace are rejected, since lookups could not tell
    /// them apart.
    pub(crate) fn build(locations: impl IntoIterator<Item = LocationId>) -> MortalityResult<Self> {
        let mut ordered: Vec<LocationId> = locations.into_iter().collect();
        ordered.sort();
        ordered.dedup();

        let mut by_folded = FxHashMap::default();
        for location in &ordered {
            if let Some(existing) = by_folded.insert(location.folded(), location.clone()) {
                return Err(DataError::AmbiguousLocation {
                    first: existing.to_string(),
                    second: location.to_string(),
                }
                .into());
            }
        }

        Ok(Self {
            ordered: ordered.into(),
            by_folded,
        })
    }

    /// All locations, sorted lexicographically, no duplicates.
    pub fn locations(&self) -> Arc<[LocationId]> {
        Arc::clone(&self.ordered)
    }

    pub fn as_slice(&self) -> &[LocationId] {
        &self.ordered
    }

    /// Case-insensitive match against the catalog.
    pub fn find(&self, raw: &str) -> Option<&LocationId> {
        self.by_folded.get(&LocationId::fold(raw))
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.find(raw).is_some()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_and_deduplicated() {
        let catalog = LocationCatalog::build(
            ["Tokyo", "Lagos", "Tokyo", "London"]
                .into_iter()
                .map(LocationId::from),
        )
        .unwrap();
        let names: Vec<&str> = catalog.as_slice().iter().map(LocationId::as_str).collect();
        assert_eq!(names, ["Lagos", "London", "Tokyo"]);
    }

    #[test]
    fn find_is_case_insensitive() {
        let catalog = LocationCatalog::build([LocationId::from("Sao Paulo")]).unwrap();
        assert_eq!(catalog.find("sao paulo").unwrap().as_str(), "Sao Paulo");
        assert_eq!(catalog.find("  SAO PAULO ").unwrap().as_str(), "Sao Paulo");
        assert!(catalog.find("Atlantis").is_none());
    }

    #[test]
    fn case_collision_is_invalid_data() {
        let err = LocationCatalog::build(["Tokyo", "TOKYO"].into_iter().map(LocationId::from))
            .unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn locations_are_shared() {
        let catalog = LocationCatalog::build([LocationId::from("Tokyo")]).unwrap();
        assert!(Arc::ptr_eq(&catalog.locations(), &catalog.locations()));
    }
}
