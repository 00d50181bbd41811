use std::fmt;

use serde::{Deserialize, Serialize};

/// Half-open integer age interval `[lo, hi)`.
///
/// The set of brackets loaded from a table partitions `[0, max_age]` with no
/// gaps and no overlaps; that invariant is checked by the table builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgeBracket {
    pub lo: u32,
    pub hi: u32,
}

impl AgeBracket {
    /// Create a bracket. Returns `None` when the interval is empty.
    pub fn new(lo: u32, hi: u32) -> Option<Self> {
        (lo < hi).then_some(Self { lo, hi })
    }

    pub fn contains(&self, age: u32) -> bool {
        self.lo <= age && age < self.hi
    }

    /// Whether the two intervals share at least one age.
    pub fn overlaps(&self, other: &AgeBracket) -> bool {
        self.lo < other.hi && other.lo < self.hi
    }

    /// Integer gap between two brackets: 0 for the same bracket, 1 for
    /// adjacent brackets, growing with every age in between.
    pub fn distance(&self, other: &AgeBracket) -> u32 {
        if self == other || self.overlaps(other) {
            0
        } else if other.hi <= self.lo {
            self.lo - other.hi + 1
        } else {
            other.lo - self.hi + 1
        }
    }

    /// Number of integer ages covered.
    pub fn width(&self) -> u32 {
        self.hi - self.lo
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lo, self.hi)
    }
}
