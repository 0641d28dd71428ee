use chrono::NaiveDate;

use crate::DateLevelEntity;
use crate::series::calendar::{next_day, prev_day};
use crate::series::rebuild::rebuild_date_level_series;
use crate::types::DateLevelError;

/// Apply `modify` to every day of `series` within `[start, end]`.
///
/// The range applies to every entry regardless of key. Entries fully inside
/// the range are modified in place. Entries straddling a range boundary are
/// split: the part inside the range is a modified clone pushed onto `series`,
/// and the original entry is truncated to the part outside. An entry covering the range on both
/// sides additionally yields an unmodified clone for its right remainder.
/// Days not covered by any entry stay uncovered.
///
/// With `rebuild`, every key is normalized afterwards on its own, which also
/// makes each key's last entry open-ended.
///
/// # Errors
/// Returns `DateLevelError::InvalidRange` if `start > end`; `series` is left untouched.
pub fn update_date_level<E, M>(
    series: &mut Vec<E>,
    mut modify: M,
    start: NaiveDate,
    end: NaiveDate,
    rebuild: bool,
) -> Result<(), DateLevelError>
where
    E: DateLevelEntity,
    M: FnMut(&mut E),
{
    if start > end {
        return Err(DateLevelError::invalid_range(start, end));
    }
    // entries pushed during the sweep are never revisited
    let existing = series.len();
    for i in 0..existing {
        let (cur_start, cur_end) = (series[i].start(), series[i].end());
        if end < cur_start || cur_end < start {
            continue;
        } else if start <= cur_start && cur_end <= end {
            modify(&mut series[i]);
        } else if cur_start < start && end < cur_end {
            let mut after = series[i].clone_with_same_key_and_value();
            after.set_start(next_day(end));
            after.set_end(cur_end);
            series.push(after);

            let mut inner = series[i].clone_with_same_key_and_value();
            modify(&mut inner);
            inner.set_start(start);
            inner.set_end(end);
            series.push(inner);

            series[i].set_end(prev_day(start));
        } else if start <= cur_start && cur_start <= end && end < cur_end {
            let mut head = series[i].clone_with_same_key_and_value();
            modify(&mut head);
            head.set_start(cur_start);
            head.set_end(end);
            series.push(head);
            series[i].set_start(next_day(end));
        } else if cur_start < start && start <= cur_end && cur_end <= end {
            let mut tail = series[i].clone_with_same_key_and_value();
            modify(&mut tail);
            tail.set_start(start);
            tail.set_end(cur_end);
            series.push(tail);
            series[i].set_end(prev_day(start));
        }
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        %start,
        %end,
        added = series.len() - existing,
        "updated date-level range"
    );
    if rebuild {
        rebuild_date_level_series(series);
    }
    Ok(())
}

/// Like [`update_date_level`], restricted to the entries whose key is `key`.
///
/// Entries of other keys keep their relative order; the updated key's entries
/// are moved to the end of `series`.
///
/// # Errors
/// Returns `DateLevelError::InvalidRange` if `start > end`; `series` is left untouched.
pub fn update_date_level_for<E, M>(
    series: &mut Vec<E>,
    key: &E::Key,
    modify: M,
    start: NaiveDate,
    end: NaiveDate,
    rebuild: bool,
) -> Result<(), DateLevelError>
where
    E: DateLevelEntity,
    M: FnMut(&mut E),
{
    if start > end {
        return Err(DateLevelError::invalid_range(start, end));
    }
    let (mut mine, others): (Vec<E>, Vec<E>) = std::mem::take(series)
        .into_iter()
        .partition(|e| &e.key() == key);
    let outcome = update_date_level(&mut mine, modify, start, end, rebuild);
    *series = others;
    series.append(&mut mine);
    outcome
}
