use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which series invariant an entry broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ViolationKind {
    /// The entry starts after it ends.
    InvertedBounds,
    /// The entry starts on or before the end of its predecessor.
    Overlap,
    /// At least one day lies between the predecessor's end and this entry's start.
    Gap,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::InvertedBounds => "start date is greater than end date",
            Self::Overlap => "start date overlaps with previous end date",
            Self::Gap => "start date is not continuous from previous end date",
        };
        f.write_str(s)
    }
}

/// Unified error type for the datelevel workspace.
///
/// Argument errors (`InvalidRange`) are raised before any work is done.
/// `Discontinuity` is raised by the overlay engine only after its whole output
/// has been produced, and `InvariantViolation` by the series checker.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateLevelError {
    /// The supplied interval starts after it ends.
    #[error("invalid range: start date {start} cannot be greater than end date {end}")]
    InvalidRange {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day.
        end: NaiveDate,
    },

    /// Inserting the interval would leave a gap in an existing series.
    #[error(
        "discontinuity: {start}..={end} neither overlaps nor touches the existing series; adjust its start and end dates"
    )]
    Discontinuity {
        /// First day of the rejected interval.
        start: NaiveDate,
        /// Last day of the rejected interval.
        end: NaiveDate,
    },

    /// A series failed verification.
    #[error("series invariant violated for key {key} at {start}..={end}: {kind}")]
    InvariantViolation {
        /// The broken invariant.
        kind: ViolationKind,
        /// Debug rendering of the offending entry's key.
        key: String,
        /// First day of the offending entry.
        start: NaiveDate,
        /// Last day of the offending entry.
        end: NaiveDate,
    },
}

impl DateLevelError {
    /// Helper: build an `InvalidRange` error.
    #[must_use]
    pub const fn invalid_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Helper: build a `Discontinuity` error for the rejected interval.
    #[must_use]
    pub const fn discontinuity(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Discontinuity { start, end }
    }

    /// Helper: build an `InvariantViolation` error for an offending entry.
    pub fn violation(
        kind: ViolationKind,
        key: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self::InvariantViolation {
            kind,
            key: key.into(),
            start,
            end,
        }
    }

    /// Returns true for errors caused by the caller's arguments rather than by
    /// the state of the series.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }
}
