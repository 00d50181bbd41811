//! Demographic Normalizer: raw input → [`DemographicKey`].

use mortality_core::errors::{MortalityError, MortalityResult};
use mortality_core::models::{DemographicKey, SexCategory};
use mortality_table::MortalityTable;

/// Validates and canonicalizes raw query input against a table.
///
/// Pure: no side effects, no defaulting. An unknown location is an error,
/// never a silent fallback to some other location.
pub struct Normalizer<'a> {
    table: &'a MortalityTable,
}

impl<'a> Normalizer<'a> {
    pub fn new(table: &'a MortalityTable) -> Self {
        Self { table }
    }

    /// Checks run location, age, sex; the first failure is returned.
    pub fn normalize(&self, location: &str, age: f64, sex: &str) -> MortalityResult<DemographicKey> {
        let location = self
            .table
            .catalog()
            .find(location)
            .cloned()
            .ok_or_else(|| MortalityError::UnknownLocation {
                location: location.to_string(),
            })?;

        let age = self.validate_age(age)?;
        let bracket = self
            .table
            .bracket_for_age(age)
            .ok_or(MortalityError::InvalidAge {
                age: f64::from(age),
                max_age: self.table.max_age(),
            })?;

        let sex = SexCategory::parse(sex).ok_or_else(|| MortalityError::InvalidSex {
            sex: sex.to_string(),
        })?;

        Ok(DemographicKey::new(location, bracket, sex))
    }

    /// Finite, non-negative, whole, and at most `max_age`.
    fn validate_age(&self, age: f64) -> MortalityResult<u32> {
        let max_age = self.table.max_age();
        if !age.is_finite() || age < 0.0 || age.fract() != 0.0 || age > f64::from(max_age) {
            return Err(MortalityError::InvalidAge { age, max_age });
        }
        Ok(age as u32)
    }
}
