//! Datelevel keeps keyed date-range series consistent.
//!
//! Overview
//! - A series is the set of entries sharing one key. Each entry carries a value
//!   over an inclusive range of calendar days.
//! - A well-formed series covers a contiguous span with no overlaps, and its last
//!   entry is open-ended (ends on `MAX_END_DATE`).
//! - [`Series`] owns a collection of entries, possibly of many keys, and applies
//!   overlays, range updates and normalization to one key at a time.
//! - The free functions of `datelevel_core` are re-exported for callers that keep
//!   their own collections.
//!
//! Key behaviors and trade-offs
//! - Overlay commit:
//!   - `BestEffort`: a rejected overlay still leaves every corrected entry plus
//!     the rejected one in place; nothing is lost, but the key may hold a gap.
//!   - `Atomic`: continuity is checked first and the series is left untouched on
//!     rejection.
//! - Verification after writes: off, logged, or returned as an error.
//! - Range updates split entries at the range bounds and can normalize the key
//!   afterwards, merging neighbours that ended up with equal values.
//! - Identity: entries that survive a merge are the ones the caller supplied,
//!   with adjusted bounds. New entries are only created by splitting.
//!
//! Examples
//! Overlaying a new value into the middle of a series:
//! ```rust
//! use chrono::NaiveDate;
//! use datelevel::{DateLevel, Series};
//!
//! let d = |m, day| NaiveDate::from_ymd_opt(2022, m, day).unwrap();
//! let mut fees = Series::builder()
//!     .entry(DateLevel::open_ended("NYSE", d(1, 1), 100))
//!     .build()?;
//!
//! fees.set(DateLevel::new("NYSE", d(3, 1), d(3, 31), 150))?;
//!
//! let bounds: Vec<_> = fees
//!     .series_for(&"NYSE")
//!     .iter()
//!     .map(|e| (e.start, e.value))
//!     .collect();
//! assert_eq!(bounds, vec![(d(1, 1), 100), (d(3, 1), 150), (d(4, 1), 100)]);
//! # Ok::<(), datelevel::DateLevelError>(())
//! ```
//!
//! Updating a range in place:
//! ```rust
//! use chrono::NaiveDate;
//! use datelevel::{DateLevel, Series};
//!
//! let d = |m, day| NaiveDate::from_ymd_opt(2022, m, day).unwrap();
//! let mut fees = Series::builder()
//!     .entry(DateLevel::open_ended("NYSE", d(1, 1), 100))
//!     .build()?;
//!
//! fees.update(&"NYSE", d(2, 1), d(2, 28), |e| e.value += 10)?;
//! assert_eq!(fees.effective_for(&"NYSE", d(2, 14)).map(|e| e.value), Some(110));
//! assert_eq!(fees.effective_for(&"NYSE", d(3, 1)).map(|e| e.value), Some(100));
//! assert_eq!(fees.verify(true), Ok(true));
//! # Ok::<(), datelevel::DateLevelError>(())
//! ```
//!
//! See `datelevel/examples/` for a runnable end-to-end demonstration.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Series, SeriesBuilder};

// Re-export core types for convenience
pub use datelevel_core::{
    // Entities
    DateLevel,
    DateLevelEntity,
    // Errors & configuration
    DateLevelError,
    // Calendar
    MAX_END_DATE,
    OverlayCommit,
    // Engine
    Overlay,
    SameSeries,
    SeriesConfig,
    VerifyMode,
    ViolationKind,

    check_series,
    check_series_for_key,
    effective,
    effective_for_key,
    is_contiguous_with,
    is_valid_series,
    next_day,
    overlapping,
    overlapping_for_key,
    prev_day,
    rebuild_date_level_series,
    rebuild_date_level_series_by,
    rebuild_date_level_series_with,
    rebuild_single_series,
    set_date_level,
    set_date_level_by,
    set_date_level_single,
    trim_end,
    trim_start,
    update_date_level,
    update_date_level_for,
    verify_each_series,
    verify_series,
};
