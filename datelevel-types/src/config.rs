//! Configuration types for series handles.

use serde::{Deserialize, Serialize};

/// What happens to a series when an overlay is rejected for discontinuity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OverlayCommit {
    /// Keep the engine's output even when the call fails. Every entry is still
    /// present, adjusted as far as possible, with the rejected interval appended.
    #[default]
    BestEffort,
    /// Check continuity up front and leave the series untouched on rejection.
    Atomic,
}

/// Post-write verification of the affected series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum VerifyMode {
    /// Do not verify.
    #[default]
    Off,
    /// Verify and report violations through logging only. Requires the
    /// `tracing` feature of `datelevel`; without it no check is run.
    Lenient,
    /// Verify and return the first violation as an error.
    Strict,
}

/// Configuration for a `Series` handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Commit behavior of `set` when the overlay breaks continuity.
    pub commit: OverlayCommit,
    /// Verification applied to the touched key after `set` and `update`.
    pub verify_after_write: VerifyMode,
    /// Normalize the touched key after a range update.
    pub rebuild_after_update: bool,
    /// Normalize every key once when the handle is built.
    pub normalize_on_build: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            commit: OverlayCommit::BestEffort,
            verify_after_write: VerifyMode::Off,
            rebuild_after_update: true,
            normalize_on_build: false,
        }
    }
}
