use std::hash::Hash;

use crate::DateLevelEntity;
use crate::series::calendar::{MAX_END_DATE, prev_day};
use crate::series::{group_indices, sort_by_start};

/// Rebuild every series in `entries` into canonical form, grouping by key.
///
/// Within each key, entries are ordered by start date and existing end dates
/// are ignored. An entry whose value equals its predecessor's is merged into it
/// and removed from `entries`; otherwise the predecessor is closed the day
/// before the entry starts. The last entry of each key becomes open-ended.
///
/// Survivors keep their relative order in `entries`. Returns the number of
/// removed entries.
pub fn rebuild_date_level_series<E: DateLevelEntity>(entries: &mut Vec<E>) -> usize {
    rebuild_date_level_series_by(entries, E::key)
}

/// Like [`rebuild_date_level_series`], grouping by `key_of` instead of the entity key.
pub fn rebuild_date_level_series_by<E, K, F>(entries: &mut Vec<E>, key_of: F) -> usize
where
    E: DateLevelEntity,
    K: Eq + Hash,
    F: Fn(&E) -> K,
{
    let removed = rebuild_marking(entries, key_of);
    drop_indices(entries, &removed);
    removed.len()
}

/// Rebuild `entries` as one series regardless of key.
pub fn rebuild_single_series<E: DateLevelEntity>(entries: &mut Vec<E>) -> usize {
    rebuild_date_level_series_by(entries, |_| ())
}

/// Rebuild in place and hand every merged-away entry to `remove` instead of
/// deleting it.
///
/// For collections the caller cannot shrink through a `Vec`, such as a backing
/// store tracking deletions. Entries passed to `remove` are left in `entries`
/// with stale bounds.
pub fn rebuild_date_level_series_with<E, K, F, R>(entries: &mut [E], key_of: F, mut remove: R)
where
    E: DateLevelEntity,
    K: Eq + Hash,
    F: Fn(&E) -> K,
    R: FnMut(&E),
{
    for i in rebuild_marking(entries, key_of) {
        remove(&entries[i]);
    }
}

fn rebuild_marking<E, K, F>(entries: &mut [E], key_of: F) -> Vec<usize>
where
    E: DateLevelEntity,
    K: Eq + Hash,
    F: Fn(&E) -> K,
{
    let mut removed = Vec::new();
    for mut group in group_indices(entries, key_of) {
        sort_by_start(entries, &mut group);
        rebuild_group(entries, &group, &mut removed);
    }
    #[cfg(feature = "tracing")]
    if !removed.is_empty() {
        tracing::debug!(removed = removed.len(), "merged equal-value entries while rebuilding");
    }
    removed
}

fn rebuild_group<E: DateLevelEntity>(entries: &mut [E], group: &[usize], removed: &mut Vec<usize>) {
    let Some((&first, rest)) = group.split_first() else {
        return;
    };
    let mut current = first;
    for &i in rest {
        if entries[current].has_same_value(&entries[i]) {
            removed.push(i);
            let end = entries[i].end();
            entries[current].set_end(end);
        } else {
            let end = prev_day(entries[i].start());
            entries[current].set_end(end);
            current = i;
        }
    }
    entries[current].set_end(MAX_END_DATE);
}

fn drop_indices<E>(entries: &mut Vec<E>, indices: &[usize]) {
    if indices.is_empty() {
        return;
    }
    let mut doomed = vec![false; entries.len()];
    for &i in indices {
        doomed[i] = true;
    }
    let mut idx = 0;
    entries.retain(|_| {
        let keep = !doomed[idx];
        idx += 1;
        keep
    });
}
