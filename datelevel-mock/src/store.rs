//! In-memory stand-in for a persistence layer that deletes rows by id.

use std::collections::BTreeSet;

use datelevel_core::{DateLevelEntity, rebuild_date_level_series_with};

use crate::{ContractSpec, SpreadSpec};

/// Rows with a stable identity the store can delete by.
pub trait Identified {
    fn id(&self) -> u64;
}

impl Identified for SpreadSpec {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for ContractSpec {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A table of date-level rows that records which ids it was asked to delete.
///
/// Rebuilding goes through the removal-callback variant, as a store that
/// cannot hand out its rows as an owned `Vec` would.
#[derive(Debug)]
pub struct MockStore<E> {
    rows: Vec<E>,
    deleted: BTreeSet<u64>,
    rebuilds: usize,
}

impl<E> Default for MockStore<E> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            deleted: BTreeSet::new(),
            rebuilds: 0,
        }
    }
}

impl<E: DateLevelEntity + Identified> MockStore<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = E>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn insert(&mut self, row: E) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    /// Rows of `key` in start order.
    pub fn rows_for(&self, key: &E::Key) -> Vec<&E> {
        let mut out: Vec<&E> = self.rows.iter().filter(|r| &r.key() == key).collect();
        out.sort_by_key(|r| r.start());
        out
    }

    /// Ids deleted so far, ascending.
    pub fn deleted_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.deleted.iter().copied()
    }

    pub fn was_deleted(&self, id: u64) -> bool {
        self.deleted.contains(&id)
    }

    pub const fn rebuild_count(&self) -> usize {
        self.rebuilds
    }

    /// Rebuild every key's series in place, then flush the merged-away rows.
    ///
    /// Returns how many rows were deleted.
    pub fn rebuild(&mut self) -> usize {
        let mut doomed = BTreeSet::new();
        rebuild_date_level_series_with(&mut self.rows, E::key, |row| {
            doomed.insert(row.id());
        });
        self.rows.retain(|row| !doomed.contains(&row.id()));
        self.rebuilds += 1;
        let removed = doomed.len();
        self.deleted.extend(doomed);
        removed
    }
}
