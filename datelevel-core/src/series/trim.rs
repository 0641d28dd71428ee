use chrono::NaiveDate;

use crate::DateLevelEntity;

/// Drop entries ending before `new_start` and move the start of the entry
/// straddling it to `new_start`.
///
/// Assumes `series` is a single, well-formed series.
pub fn trim_start<I, E>(series: I, new_start: NaiveDate) -> impl Iterator<Item = E>
where
    I: IntoIterator<Item = E>,
    E: DateLevelEntity,
{
    series.into_iter().filter_map(move |mut item| {
        if item.end() < new_start {
            return None;
        }
        if item.start() < new_start {
            item.set_start(new_start);
        }
        Some(item)
    })
}

/// Drop entries starting after `new_end` and move the end of the entry
/// straddling it to `new_end`.
///
/// Assumes `series` is a single, well-formed series.
pub fn trim_end<I, E>(series: I, new_end: NaiveDate) -> impl Iterator<Item = E>
where
    I: IntoIterator<Item = E>,
    E: DateLevelEntity,
{
    series.into_iter().filter_map(move |mut item| {
        if item.start() > new_end {
            return None;
        }
        if item.end() > new_end {
            item.set_end(new_end);
        }
        Some(item)
    })
}
