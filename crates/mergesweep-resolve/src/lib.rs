//! Conflict resolution and sweep driver for mergesweep.
//!
//! Resolution keeps the incoming ("theirs") side of every conflict block and
//! drops the current ("ours") side along with all marker lines. A
//! [`Sweeper`] ties scanning and resolution together:
//!
//! 1. scan the tree for files containing a start marker
//! 2. rewrite each file in place
//! 3. scan again to verify nothing is left
//!
//! ```rust,no_run
//! use mergesweep_resolve::{SweepConfig, Sweeper};
//!
//! let report = Sweeper::new(SweepConfig::new(".")).run(|_| {});
//! println!("{}/{} files resolved", report.resolved, report.total());
//! ```

mod resolver;
mod sweep;

pub use resolver::{BandState, Resolution, resolve_content, resolve_file};
pub use sweep::{FileReport, SweepEvent, SweepReport, Sweeper};

// Re-export core types
pub use mergesweep_core::{
    ConflictMarkers, FileStatus, ResolveError, ResolveOutcome, ResolveSummary, SweepConfig,
};
pub use mergesweep_scan::ConflictScan;
