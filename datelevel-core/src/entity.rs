//! The contract every date-level entry fulfils, plus a generic ready-made entry.

use std::fmt::Debug;
use std::hash::Hash;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::series::calendar::MAX_END_DATE;

/// A value valid over an inclusive range of calendar days, belonging to one
/// series identified by its key.
///
/// Implementors decide what "same value" means; it does not have to be full
/// structural equality. The algorithms in this crate mutate bounds in place and
/// create new entries only through [`clone_with_same_key_and_value`].
///
/// [`clone_with_same_key_and_value`]: DateLevelEntity::clone_with_same_key_and_value
pub trait DateLevelEntity {
    /// Series identity. Never changes over the life of an entry.
    type Key: Eq + Hash + Clone + Debug;

    /// Key of the series this entry belongs to.
    fn key(&self) -> Self::Key;

    /// First day the value applies.
    fn start(&self) -> NaiveDate;

    /// Last day the value applies.
    fn end(&self) -> NaiveDate;

    /// Move the first day.
    fn set_start(&mut self, start: NaiveDate);

    /// Move the last day.
    fn set_end(&mut self, end: NaiveDate);

    /// Whether `other` carries a value equal to this entry's value.
    fn has_same_value(&self, other: &Self) -> bool;

    /// Produce an independent entry with the same key and value. The caller sets
    /// the bounds afterwards.
    #[must_use]
    fn clone_with_same_key_and_value(&self) -> Self
    where
        Self: Sized;

    /// Whether `date` falls inside `[start, end]`.
    fn contains(&self, date: NaiveDate) -> bool {
        self.start() <= date && date <= self.end()
    }

    /// Whether the inclusive range `[start, end]` shares at least one day with this entry.
    fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        !(start > self.end() || end < self.start())
    }
}

/// A plain entry whose value is compared with `PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateLevel<K, V> {
    /// Series key.
    pub key: K,
    /// First day the value applies.
    pub start: NaiveDate,
    /// Last day the value applies.
    pub end: NaiveDate,
    /// The payload.
    pub value: V,
}

impl<K, V> DateLevel<K, V> {
    /// Build an entry over `[start, end]`.
    pub const fn new(key: K, start: NaiveDate, end: NaiveDate, value: V) -> Self {
        Self {
            key,
            start,
            end,
            value,
        }
    }

    /// Build an entry that is open-ended into the future.
    pub const fn open_ended(key: K, start: NaiveDate, value: V) -> Self {
        Self::new(key, start, MAX_END_DATE, value)
    }
}

impl<K, V> DateLevelEntity for DateLevel<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: PartialEq + Clone,
{
    type Key = K;

    fn key(&self) -> K {
        self.key.clone()
    }

    fn start(&self) -> NaiveDate {
        self.start
    }

    fn end(&self) -> NaiveDate {
        self.end
    }

    fn set_start(&mut self, start: NaiveDate) {
        self.start = start;
    }

    fn set_end(&mut self, end: NaiveDate) {
        self.end = end;
    }

    fn has_same_value(&self, other: &Self) -> bool {
        self.value == other.value
    }

    fn clone_with_same_key_and_value(&self) -> Self {
        self.clone()
    }
}
