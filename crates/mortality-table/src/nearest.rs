//! Nearest-bracket index, precomputed so fallback lookups are O(1).

use mortality_core::models::AgeBracket;

/// For a bracket index, the index of the closest bracket with data.
/// Ties go to the younger bracket.
pub(crate) fn build_index(brackets: &[AgeBracket], present: &[bool]) -> Option<Vec<usize>> {
    if !present.iter().any(|p| *p) {
        return None;
    }

    let index = brackets
        .iter()
        .map(|target| {
            brackets
                .iter()
                .enumerate()
                .filter(|(j, _)| present[*j])
                .min_by_key(|(j, candidate)| (target.distance(candidate), *j))
                .map(|(j, _)| j)
                .unwrap_or_default()
        })
        .collect();
    Some(index)
}
