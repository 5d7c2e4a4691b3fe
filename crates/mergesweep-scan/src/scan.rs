//! Scan result type.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use mergesweep_core::ScanWarning;

/// Files found to contain conflict markers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConflictScan {
    /// Root the scan started from.
    pub root: PathBuf,
    /// Conflicted files in discovery order.
    pub files: Vec<PathBuf>,
    /// Number of files whose content was examined.
    pub files_examined: u64,
    /// Files and directories that could not be read.
    pub warnings: Vec<ScanWarning>,
    /// Time spent scanning.
    pub scan_duration: Duration,
}

impl ConflictScan {
    /// Create an empty scan for a root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Check if no conflicted files were found.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of conflicted files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if a path was reported as conflicted.
    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f == path)
    }

    /// Check if any warnings were recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
