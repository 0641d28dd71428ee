use chrono::NaiveDate;

use crate::DateLevelEntity;

/// Entries in effect on `date`, whatever their key.
///
/// Returns one entry per series when `items` mixes keys.
pub fn effective<'a, I, E>(items: I, date: NaiveDate) -> impl Iterator<Item = &'a E>
where
    I: IntoIterator<Item = &'a E>,
    E: DateLevelEntity + 'a,
{
    items.into_iter().filter(move |e| e.contains(date))
}

/// The first entry of `key` in effect on `date`, if any.
pub fn effective_for_key<'a, I, E>(items: I, key: &E::Key, date: NaiveDate) -> Option<&'a E>
where
    I: IntoIterator<Item = &'a E>,
    E: DateLevelEntity + 'a,
{
    items
        .into_iter()
        .find(|e| &e.key() == key && e.contains(date))
}

/// Entries sharing at least one day with `[start, end]`.
///
/// Assumes `items` holds a single series; see [`overlapping_for_key`] otherwise.
pub fn overlapping<'a, I, E>(items: I, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = &'a E>
where
    I: IntoIterator<Item = &'a E>,
    E: DateLevelEntity + 'a,
{
    items.into_iter().filter(move |e| e.overlaps(start, end))
}

/// Entries of `key` sharing at least one day with `[start, end]`.
pub fn overlapping_for_key<'a, 'k, I, E>(
    items: I,
    key: &'k E::Key,
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &'a E>
where
    I: IntoIterator<Item = &'a E>,
    E: DateLevelEntity + 'a,
{
    overlapping(items.into_iter().filter(move |e| &e.key() == key), start, end)
}
