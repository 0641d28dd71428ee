//! Re-export of error and configuration types from `datelevel-types`.
// Consolidated re-exports so downstream crates can depend on `datelevel-core` only

pub use datelevel_types::{DateLevelError, ViolationKind};
pub use datelevel_types::{OverlayCommit, SeriesConfig, VerifyMode};
