use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::DateLevelEntity;
use crate::series::calendar::{is_adjacent, next_day, prev_day};
use crate::types::DateLevelError;

/// Series-membership predicate as a plain function pointer.
pub type SameSeries<E> = fn(&E, &E) -> bool;

fn same_key<E: DateLevelEntity>(a: &E, b: &E) -> bool {
    a.key() == b.key()
}

const fn single_series<E>(_: &E, _: &E) -> bool {
    true
}

/// Overlay `src` onto the entries of `series` that share its key.
///
/// Entries of other keys pass through untouched and in order. See [`Overlay`]
/// for how each same-key entry is merged, split, truncated or dropped.
///
/// ```
/// use chrono::NaiveDate;
/// use datelevel_core::{DateLevel, set_date_level};
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2022, m, day).unwrap();
/// let series = vec![DateLevel::new(1, d(1, 1), d(1, 31), 100)];
/// let out = set_date_level(series, DateLevel::new(1, d(1, 10), d(1, 20), 200))
///     .unwrap()
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// let mut bounds: Vec<_> = out.iter().map(|e| (e.start, e.end, e.value)).collect();
/// bounds.sort();
/// assert_eq!(
///     bounds,
///     vec![(d(1, 1), d(1, 9), 100), (d(1, 10), d(1, 20), 200), (d(1, 21), d(1, 31), 100)]
/// );
/// ```
///
/// # Errors
/// Returns `DateLevelError::InvalidRange` if `src` starts after it ends. No
/// input is consumed in that case.
pub fn set_date_level<I, E>(
    series: I,
    src: E,
) -> Result<Overlay<I::IntoIter, E, SameSeries<E>>, DateLevelError>
where
    I: IntoIterator<Item = E>,
    E: DateLevelEntity,
{
    set_date_level_by(series, src, same_key::<E> as SameSeries<E>)
}

/// Overlay `src` onto `series`, treating every entry as part of the same series.
///
/// # Errors
/// Returns `DateLevelError::InvalidRange` if `src` starts after it ends.
pub fn set_date_level_single<I, E>(
    series: I,
    src: E,
) -> Result<Overlay<I::IntoIter, E, SameSeries<E>>, DateLevelError>
where
    I: IntoIterator<Item = E>,
    E: DateLevelEntity,
{
    set_date_level_by(series, src, single_series::<E> as SameSeries<E>)
}

/// Overlay `src` onto the entries of `series` for which `same_series(entry, src)` holds.
///
/// # Errors
/// Returns `DateLevelError::InvalidRange` if `src` starts after it ends.
pub fn set_date_level_by<I, E, F>(
    series: I,
    src: E,
    same_series: F,
) -> Result<Overlay<I::IntoIter, E, F>, DateLevelError>
where
    I: IntoIterator<Item = E>,
    E: DateLevelEntity,
    F: FnMut(&E, &E) -> bool,
{
    let (start, end) = (src.start(), src.end());
    if start > end {
        return Err(DateLevelError::invalid_range(start, end));
    }
    Ok(Overlay {
        input: series.into_iter().fuse(),
        src: Some(src),
        same_series,
        pending: None,
        requested: (start, end),
        seen_same_series: false,
        touched: false,
        reported: false,
    })
}

/// Whether overlaying `src` onto `series` would be accepted.
///
/// True when no entry belongs to the same series, or when at least one such
/// entry overlaps `src` or sits right next to it. This is exactly the condition
/// under which [`Overlay`] finishes without `Discontinuity`, checked without
/// mutating anything.
pub fn is_contiguous_with<'a, I, E, F>(series: I, src: &E, mut same_series: F) -> bool
where
    I: IntoIterator<Item = &'a E>,
    E: DateLevelEntity + 'a,
    F: FnMut(&E, &E) -> bool,
{
    let mut seen = false;
    for item in series {
        if !same_series(item, src) {
            continue;
        }
        seen = true;
        if item.overlaps(src.start(), src.end())
            || is_adjacent(src.end(), item.start())
            || is_adjacent(item.end(), src.start())
        {
            return true;
        }
    }
    !seen
}

/// Lazy output of an overlay.
///
/// Each same-series entry is compared against the current `src`, which starts
/// as the supplied entry and is replaced whenever an equal-value neighbour
/// absorbs it. The first matching relation decides:
///
/// 1. `src` covers the entry: equal value extends the entry to `src` and it
///    becomes `src`; otherwise the entry is dropped.
/// 2. The entry strictly covers `src`: equal value makes the entry `src`;
///    otherwise the entry is split into a left part and a right clone around it.
/// 3. `src` overlaps the entry's head: merge, or move the entry's start past `src`.
/// 4. `src` overlaps the entry's tail: merge, or pull the entry's end before `src`.
/// 5. The entry starts the day after `src` ends: merge or pass through.
/// 6. The entry ends the day before `src` starts: merge or pass through.
/// 7. Otherwise the entry passes through.
///
/// Merged survivors keep their identity; the supplied entry is the one discarded.
/// Once the input is drained the resolved `src` is yielded last. If the input
/// held same-series entries but none of them touched `src`, a final
/// `Err(DateLevelError::Discontinuity)` follows it, so a caller that drains
/// the iterator still receives every corrected entry.
#[must_use = "an overlay does nothing until it is iterated"]
pub struct Overlay<I, E, F> {
    input: std::iter::Fuse<I>,
    src: Option<E>,
    same_series: F,
    pending: Option<E>,
    requested: (NaiveDate, NaiveDate),
    seen_same_series: bool,
    touched: bool,
    reported: bool,
}

impl<I, E, F> Overlay<I, E, F>
where
    I: Iterator<Item = E>,
    E: DateLevelEntity,
    F: FnMut(&E, &E) -> bool,
{
    /// Drain the overlay, keeping every produced entry even if it fails.
    ///
    /// Returns the entries together with the terminal outcome.
    pub fn collect_partial(self) -> (Vec<E>, Result<(), DateLevelError>) {
        let mut out = Vec::new();
        let mut outcome = Ok(());
        for next in self {
            match next {
                Ok(e) => out.push(e),
                Err(err) => outcome = Err(err),
            }
        }
        (out, outcome)
    }

    fn absorb(&mut self, mut item: E) -> Option<E> {
        let Some(src) = self.src.as_ref() else {
            return Some(item);
        };
        if !(self.same_series)(&item, src) {
            return Some(item);
        }
        self.seen_same_series = true;

        let (src_start, src_end) = (src.start(), src.end());
        let (start, end) = (item.start(), item.end());
        let same = src.has_same_value(&item);

        if src_start <= start && end <= src_end {
            self.touched = true;
            if same {
                item.set_start(src_start);
                item.set_end(src_end);
                self.src = Some(item);
            }
            None
        } else if start < src_start && src_end < end {
            self.touched = true;
            if same {
                self.src = Some(item);
                return None;
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(%start, %end, %src_start, %src_end, "splitting entry around overlay");
            let mut after = item.clone_with_same_key_and_value();
            after.set_start(next_day(src_end));
            after.set_end(end);
            item.set_end(prev_day(src_start));
            self.pending = Some(after);
            Some(item)
        } else if src_start <= start && start <= src_end && src_end < end {
            self.touched = true;
            if same {
                item.set_start(src_start);
                self.src = Some(item);
                None
            } else {
                item.set_start(next_day(src_end));
                Some(item)
            }
        } else if start < src_start && src_start <= end && end <= src_end {
            self.touched = true;
            if same {
                item.set_end(src_end);
                self.src = Some(item);
                None
            } else {
                item.set_end(prev_day(src_start));
                Some(item)
            }
        } else if is_adjacent(src_end, start) {
            self.touched = true;
            if same {
                item.set_start(src_start);
                self.src = Some(item);
                None
            } else {
                Some(item)
            }
        } else if is_adjacent(end, src_start) {
            self.touched = true;
            if same {
                item.set_end(src_end);
                self.src = Some(item);
                None
            } else {
                Some(item)
            }
        } else {
            Some(item)
        }
    }
}

impl<I, E, F> Iterator for Overlay<I, E, F>
where
    I: Iterator<Item = E>,
    E: DateLevelEntity,
    F: FnMut(&E, &E) -> bool,
{
    type Item = Result<E, DateLevelError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(after) = self.pending.take() {
            return Some(Ok(after));
        }
        while let Some(item) = self.input.next() {
            if let Some(out) = self.absorb(item) {
                return Some(Ok(out));
            }
        }
        if let Some(src) = self.src.take() {
            return Some(Ok(src));
        }
        if !self.reported {
            self.reported = true;
            if self.seen_same_series && !self.touched {
                let (start, end) = self.requested;
                #[cfg(feature = "tracing")]
                tracing::warn!(%start, %end, "overlay would break series continuity");
                return Some(Err(DateLevelError::discontinuity(start, end)));
            }
        }
        None
    }
}

impl<I, E, F> FusedIterator for Overlay<I, E, F>
where
    I: Iterator<Item = E>,
    E: DateLevelEntity,
    F: FnMut(&E, &E) -> bool,
{
}
