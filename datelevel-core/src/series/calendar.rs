//! Day arithmetic on inclusive date bounds.

use chrono::NaiveDate;

/// Sentinel end date of an open-ended entry. The last entry of a canonical
/// series always ends here.
pub const MAX_END_DATE: NaiveDate = match NaiveDate::from_ymd_opt(9999, 12, 31) {
    Some(d) => d,
    None => NaiveDate::MAX,
};

/// The day after `date`, saturating at the end of the representable calendar.
#[must_use]
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// The day before `date`, saturating at the start of the representable calendar.
#[must_use]
pub fn prev_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

/// Whether an entry starting on `later_start` begins the day after `earlier_end`.
#[must_use]
pub fn is_adjacent(earlier_end: NaiveDate, later_start: NaiveDate) -> bool {
    earlier_end.succ_opt() == Some(later_start)
}
