use crate::DateLevelEntity;
use crate::series::calendar::is_adjacent;
use crate::series::group_indices;
use crate::types::{DateLevelError, ViolationKind};

fn violation<E: DateLevelEntity>(kind: ViolationKind, entry: &E) -> DateLevelError {
    DateLevelError::violation(kind, format!("{:?}", entry.key()), entry.start(), entry.end())
}

fn check_sorted<'a, E, I>(sorted: I) -> Result<(), DateLevelError>
where
    E: DateLevelEntity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut previous: Option<&E> = None;
    for item in sorted {
        if item.start() > item.end() {
            return Err(violation(ViolationKind::InvertedBounds, item));
        }
        if let Some(prev) = previous {
            if prev.end() >= item.start() {
                return Err(violation(ViolationKind::Overlap, item));
            }
            if !is_adjacent(prev.end(), item.start()) {
                return Err(violation(ViolationKind::Gap, item));
            }
        }
        previous = Some(item);
    }
    Ok(())
}

/// Check that `series`, taken as a single series in start order, has no
/// inverted bounds, no overlaps and no gaps.
///
/// Every adjacent pair is checked. The open-ended tail is not required.
///
/// # Errors
/// Returns `DateLevelError::InvariantViolation` for the first offending entry.
pub fn check_series<E: DateLevelEntity>(series: &[E]) -> Result<(), DateLevelError> {
    let mut sorted: Vec<&E> = series.iter().collect();
    sorted.sort_by_key(|e| e.start());
    check_sorted(sorted)
}

/// Like [`check_series`], over only the entries of `entries` whose key is `key`.
///
/// # Errors
/// Returns `DateLevelError::InvariantViolation` for the first offending entry.
pub fn check_series_for_key<E: DateLevelEntity>(
    entries: &[E],
    key: &E::Key,
) -> Result<(), DateLevelError> {
    let mut sorted: Vec<&E> = entries.iter().filter(|e| &e.key() == key).collect();
    sorted.sort_by_key(|e| e.start());
    check_sorted(sorted)
}

/// Verify `series` and either fail or report `false` on the first violation.
///
/// # Errors
/// With `throw_on_error`, returns the violation instead of `Ok(false)`.
pub fn verify_series<E: DateLevelEntity>(
    series: &[E],
    throw_on_error: bool,
) -> Result<bool, DateLevelError> {
    settle(check_series(series), throw_on_error)
}

/// Verify each key of a mixed collection as its own series.
///
/// # Errors
/// With `throw_on_error`, returns the first violation instead of `Ok(false)`.
pub fn verify_each_series<E: DateLevelEntity>(
    entries: &[E],
    throw_on_error: bool,
) -> Result<bool, DateLevelError> {
    let outcome = group_indices(entries, E::key).into_iter().try_for_each(|group| {
        let mut sorted: Vec<&E> = group.iter().map(|&i| &entries[i]).collect();
        sorted.sort_by_key(|e| e.start());
        check_sorted(sorted)
    });
    settle(outcome, throw_on_error)
}

/// Whether `series` passes [`check_series`].
#[must_use]
pub fn is_valid_series<E: DateLevelEntity>(series: &[E]) -> bool {
    check_series(series).is_ok()
}

fn settle(outcome: Result<(), DateLevelError>, throw_on_error: bool) -> Result<bool, DateLevelError> {
    match outcome {
        Ok(()) => Ok(true),
        Err(err) if throw_on_error => Err(err),
        Err(_) => Ok(false),
    }
}
