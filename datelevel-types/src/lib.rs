//! Error and configuration primitives shared across the datelevel workspace.
#![warn(missing_docs)]

mod config;
mod error;

pub use config::{OverlayCommit, SeriesConfig, VerifyMode};
pub use error::{DateLevelError, ViolationKind};
