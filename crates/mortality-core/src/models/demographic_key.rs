use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AgeBracket, LocationId, SexCategory};

/// Normalized (location, age bracket, sex) lookup key. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DemographicKey {
    pub location: LocationId,
    pub bracket: AgeBracket,
    pub sex: SexCategory,
}

impl DemographicKey {
    pub fn new(location: LocationId, bracket: AgeBracket, sex: SexCategory) -> Self {
        Self {
            location,
            bracket,
            sex,
        }
    }
}

impl fmt::Display for DemographicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.location, self.bracket, self.sex)
    }
}
