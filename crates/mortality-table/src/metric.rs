use std::fmt;

/// Unit of the `val` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Share of all deaths; a key's values already sum to 1.
    Percent,
    /// Death counts. The count total doubles as the population weight.
    Number,
    /// Deaths per 100,000.
    Rate,
}

impl Metric {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "percent" => Some(Self::Percent),
            "number" => Some(Self::Number),
            "rate" => Some(Self::Rate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percent => "Percent",
            Self::Number => "Number",
            Self::Rate => "Rate",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
