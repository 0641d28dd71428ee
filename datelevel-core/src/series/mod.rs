//! Algorithms over date-level series.
//!
//! - `overlay`: merge or split a new interval into an existing series
//! - `rebuild`: recompute end dates and collapse equal-value runs
//! - `update`: apply a mutation to a date sub-range
//! - `trim`: clamp a series to a new first or last day
//! - `query`: point-in-time and range-overlap lookups
//! - `verify`: check non-overlap and contiguity

/// Day arithmetic and the open-ended sentinel.
pub mod calendar;
/// Overlay engine.
pub mod overlay;
/// Query helpers.
pub mod query;
/// Series normalization.
pub mod rebuild;
/// Start/end trimming.
pub mod trim;
/// Range updates.
pub mod update;
/// Invariant checker.
pub mod verify;

use std::collections::HashMap;

use crate::DateLevelEntity;

/// Indices of `entries` grouped by `key_of`, groups in order of first appearance.
pub(crate) fn group_indices<E, K, F>(entries: &[E], key_of: F) -> Vec<Vec<usize>>
where
    K: Eq + std::hash::Hash,
    F: Fn(&E) -> K,
{
    let mut slot: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (i, e) in entries.iter().enumerate() {
        let g = *slot.entry(key_of(e)).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[g].push(i);
    }
    groups
}

/// Sort indices by the start date of the entries they point to. Stable.
pub(crate) fn sort_by_start<E: DateLevelEntity>(entries: &[E], indices: &mut [usize]) {
    indices.sort_by_key(|&i| entries[i].start());
}
