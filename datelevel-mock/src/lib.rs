//! Sample entities and fixtures for exercising date-level series.
//!
//! Every entity built here gets a process-unique `id`, including entities
//! produced by `clone_with_same_key_and_value`, so tests can tell a surviving
//! original apart from an engine-made copy.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use datelevel_core::{DateLevelEntity, MAX_END_DATE};
use rust_decimal::Decimal;

mod fixtures;
mod store;

pub use fixtures::{dates, monthly_series, random_monthly_series, random_series};
pub use store::{Identified, MockStore};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A per-market spread, keyed by market. Two spreads hold the same value when
/// both market and amount match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadSpec {
    pub id: u64,
    pub market_id: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub value: Decimal,
}

impl SpreadSpec {
    pub fn new(market_id: i32, start: NaiveDate, end: NaiveDate, value: impl Into<Decimal>) -> Self {
        Self {
            id: next_id(),
            market_id,
            start,
            end,
            value: value.into(),
        }
    }

    pub fn open_ended(market_id: i32, start: NaiveDate, value: impl Into<Decimal>) -> Self {
        Self::new(market_id, start, MAX_END_DATE, value)
    }

    /// Whether `other` is this very entity rather than an equal-looking copy.
    #[must_use]
    pub const fn is_same_entity(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl DateLevelEntity for SpreadSpec {
    type Key = i32;

    fn key(&self) -> i32 {
        self.market_id
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
        self.market_id == other.market_id && self.value == other.value
    }

    fn clone_with_same_key_and_value(&self) -> Self {
        Self::new(self.market_id, self.start, self.end, self.value)
    }
}

/// A contract specification. Only the amount takes part in value equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSpec {
    pub id: u64,
    pub market_id: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub value: Decimal,
    pub note: Option<String>,
}

impl ContractSpec {
    pub fn open_ended(market_id: i32, start: NaiveDate, value: impl Into<Decimal>) -> Self {
        Self {
            id: next_id(),
            market_id,
            start,
            end: MAX_END_DATE,
            value: value.into(),
            note: None,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl DateLevelEntity for ContractSpec {
    type Key = i32;

    fn key(&self) -> i32 {
        self.market_id
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

    // notes are commentary and never split a run
    fn has_same_value(&self, other: &Self) -> bool {
        self.value == other.value
    }

    fn clone_with_same_key_and_value(&self) -> Self {
        Self {
            id: next_id(),
            market_id: self.market_id,
            start: self.start,
            end: self.end,
            value: self.value,
            note: self.note.clone(),
        }
    }
}
