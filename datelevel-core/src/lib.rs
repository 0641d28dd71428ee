//! datelevel-core
//!
//! Algorithms that keep date-level series consistent: per-key partitions of
//! the calendar into contiguous, non-overlapping inclusive intervals, each
//! carrying a value.
//!
//! - `entity`: the `DateLevelEntity` contract and the generic `DateLevel` entry.
//! - `series`: overlay, rebuild, range update, trimming, queries and verification.
//! - `types`: error and configuration types shared with `datelevel-types`.
//!
//! Everything runs synchronously over caller-owned, in-memory collections.
//! Entries move through the algorithms by value and have their bounds adjusted
//! in place, so an entry that survives a merge is the same entry the caller
//! passed in.
#![warn(missing_docs)]

/// Entity contract and a generic entry.
pub mod entity;
/// Series algorithms.
pub mod series;
pub mod types;

pub use entity::{DateLevel, DateLevelEntity};
pub use series::calendar::{MAX_END_DATE, next_day, prev_day};
pub use series::overlay::{
    Overlay, SameSeries, is_contiguous_with, set_date_level, set_date_level_by,
    set_date_level_single,
};
pub use series::query::{effective, effective_for_key, overlapping, overlapping_for_key};
pub use series::rebuild::{
    rebuild_date_level_series, rebuild_date_level_series_by, rebuild_date_level_series_with,
    rebuild_single_series,
};
pub use series::trim::{trim_end, trim_start};
pub use series::update::{update_date_level, update_date_level_for};
pub use series::verify::{
    check_series, check_series_for_key, is_valid_series, verify_each_series, verify_series,
};
pub use types::*;
