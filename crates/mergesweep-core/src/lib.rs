//! Core types and configuration for mergesweep.
//!
//! This crate provides the data structures shared by the scanner, the
//! resolver and the command line driver: the sweep configuration, the
//! conflict marker triple, and the error and outcome taxonomy.

mod config;
mod error;
mod markers;
mod outcome;

pub use config::{DEFAULT_EXCLUDE_DIRS, SweepConfig, SweepConfigBuilder};
pub use error::{ConfigError, ResolveError, ScanWarning, WarningKind};
pub use markers::ConflictMarkers;
pub use outcome::{FileStatus, ResolveOutcome, ResolveSummary};
