//! Age-group label parsing.
//!
//! Accepted forms: `<1 year`, `Under 5`, `15-19 years`, `80+ years`.
//! Aggregate groups and sub-year groups (days, months) are skipped since
//! an integer age can never select them.

use mortality_core::constants::AGGREGATE_AGE_GROUPS;
use mortality_core::models::AgeBracket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AgeGroup {
    Bracket(AgeBracket),
    Skipped,
}

/// Parse a label into a half-open bracket. Open-ended groups run to
/// `max_age` inclusive. Returns `None` for unrecognized labels.
pub(crate) fn parse(label: &str, max_age: u32) -> Option<AgeGroup> {
    let label = label.trim();
    if AGGREGATE_AGE_GROUPS
        .iter()
        .any(|agg| agg.eq_ignore_ascii_case(label))
        || label.ends_with(" days")
        || label.ends_with(" months")
    {
        return Some(AgeGroup::Skipped);
    }

    let body = label
        .strip_suffix(" years")
        .or_else(|| label.strip_suffix(" year"))
        .unwrap_or(label)
        .trim();

    if let Some(upper) = body
        .strip_prefix('<')
        .or_else(|| body.strip_prefix("Under "))
    {
        let hi = upper.trim().parse::<u32>().ok()?;
        return AgeBracket::new(0, hi).map(AgeGroup::Bracket);
    }

    if let Some(lower) = body.strip_suffix('+') {
        let lo = lower.trim().parse::<u32>().ok()?;
        return AgeBracket::new(lo, lo.max(max_age).checked_add(1)?).map(AgeGroup::Bracket);
    }

    let (lo, hi) = body.split_once('-').or_else(|| body.split_once(" to "))?;
    let lo = lo.trim().parse::<u32>().ok()?;
    let hi = hi.trim().parse::<u32>().ok()?;
    // Labels are inclusive on both ends.
    AgeBracket::new(lo, hi.checked_add(1)?).map(AgeGroup::Bracket)
}
