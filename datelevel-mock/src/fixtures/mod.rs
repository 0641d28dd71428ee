use std::collections::BTreeMap;

use chrono::{Days, Months, NaiveDate};
use datelevel_core::prev_day;
use rand::Rng;
use rust_decimal::Decimal;

use crate::SpreadSpec;

pub mod dates;

fn monthly_with(
    market_id: i32,
    series_start: NaiveDate,
    series_end: NaiveDate,
    mut value_of: impl FnMut() -> Decimal,
) -> Vec<SpreadSpec> {
    let mut out = Vec::new();
    let mut start = series_start;
    while start <= series_end {
        let Some(next) = start.checked_add_months(Months::new(1)) else {
            out.push(SpreadSpec::new(market_id, start, series_end, value_of()));
            break;
        };
        let end = prev_day(next).min(series_end);
        out.push(SpreadSpec::new(market_id, start, end, value_of()));
        start = next;
    }
    out
}

/// One entry per calendar month from `series_start`, the last one cut at
/// `series_end`, all carrying `value`.
pub fn monthly_series(
    market_id: i32,
    series_start: NaiveDate,
    series_end: NaiveDate,
    value: impl Into<Decimal>,
) -> Vec<SpreadSpec> {
    let value = value.into();
    monthly_with(market_id, series_start, series_end, || value)
}

/// Like [`monthly_series`] with a random value in `1..100` per month.
pub fn random_monthly_series<R: Rng>(
    rng: &mut R,
    market_id: i32,
    series_start: NaiveDate,
    series_end: NaiveDate,
) -> Vec<SpreadSpec> {
    monthly_with(market_id, series_start, series_end, || {
        Decimal::from(rng.random_range(1..100_i64))
    })
}

/// A contiguous series of short random-length entries covering exactly
/// `[series_start, series_end]`, plus the value expected on every day.
pub fn random_series<R: Rng>(
    rng: &mut R,
    market_id: i32,
    series_start: NaiveDate,
    series_end: NaiveDate,
) -> (Vec<SpreadSpec>, BTreeMap<NaiveDate, Decimal>) {
    let mut entries = Vec::new();
    let mut by_day = BTreeMap::new();
    let mut start = series_start;
    while start <= series_end {
        let span = rng.random_range(0..10_u64);
        let end = start
            .checked_add_days(Days::new(span))
            .map_or(series_end, |end| end.min(series_end));
        let value = Decimal::from(rng.random_range(1..100_i64));
        for day in start.iter_days().take_while(|d| *d <= end) {
            by_day.insert(day, value);
        }
        entries.push(SpreadSpec::new(market_id, start, end, value));
        match end.succ_opt() {
            Some(next) => start = next,
            None => break,
        }
    }
    (entries, by_day)
}
