mod age_bracket;
mod cause;
mod demographic_key;
mod distribution;
mod location;
mod rank_order;
mod sex;

pub use age_bracket::AgeBracket;
pub use cause::{CauseId, CauseRecord, Uncertainty};
pub use demographic_key::DemographicKey;
pub use distribution::CauseDistribution;
pub use location::LocationId;
pub use rank_order::RankOrder;
pub use sex::SexCategory;
