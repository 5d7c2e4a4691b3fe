//! Conflict marker scanning engine for mergesweep.
//!
//! This crate walks a directory tree with jwalk and reports which files
//! still contain a conflict start marker.
//!
//! # Overview
//!
//! - **Serial, sorted traversal** so results are stable between runs
//! - **Directory pruning** for `node_modules`, `.git`, `coverage`, `build`, `dist`
//! - **Best-effort** reads: an unreadable file becomes a warning, never an abort
//!
//! # Example
//!
//! ```rust,no_run
//! use mergesweep_scan::{ConflictScanner, SweepConfig};
//!
//! let config = SweepConfig::new("/path/to/repo");
//! let scan = ConflictScanner::new().scan(&config);
//!
//! for path in &scan.files {
//!     println!("conflicted: {}", path.display());
//! }
//! ```

mod scan;
mod scanner;

pub use scan::ConflictScan;
pub use scanner::{ConflictScanner, file_has_conflicts, find_conflict_files};

// Re-export core types for convenience
pub use mergesweep_core::{ConflictMarkers, ScanWarning, SweepConfig, WarningKind};
