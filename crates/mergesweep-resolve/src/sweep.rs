//! Scan, resolve and verify a whole tree.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use mergesweep_core::{FileStatus, ResolveError, ResolveOutcome, SweepConfig};
use mergesweep_scan::{ConflictScan, ConflictScanner};

use crate::resolver::resolve_file;

/// Progress notifications emitted while a sweep runs.
#[derive(Debug)]
pub enum SweepEvent<'a> {
    /// The initial scan is about to start.
    ScanStarted { root: &'a Path },
    /// The initial scan finished. A sweep with an empty scan stops here.
    Scanned { scan: &'a ConflictScan },
    /// A file was processed.
    FileFinished {
        path: &'a Path,
        result: &'a Result<ResolveOutcome, ResolveError>,
    },
    /// All files were processed.
    Tally { resolved: usize, total: usize },
    /// The verification scan finished.
    Verified { scan: &'a ConflictScan },
}

/// Per-file entry in a sweep report.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Everything a sweep did.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// Scan that selected the files to resolve.
    pub initial: ConflictScan,
    /// Result for each selected file, in scan order.
    pub files: Vec<FileReport>,
    /// Number of files rewritten successfully.
    pub resolved: usize,
    /// Scan after resolution; absent when there was nothing to resolve.
    pub verification: Option<ConflictScan>,
}

impl SweepReport {
    /// Number of files selected for resolution.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Files still containing markers after the pass.
    pub fn remaining(&self) -> &[PathBuf] {
        self.verification
            .as_ref()
            .map(|scan| scan.files.as_slice())
            .unwrap_or_default()
    }

    /// Check if no conflict markers are left in the tree.
    pub fn is_fully_resolved(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Files whose read or write failed.
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.status.is_failure())
    }
}

/// Runs the scan, resolve, verify sequence over a tree.
#[derive(Debug, Clone)]
pub struct Sweeper {
    config: SweepConfig,
    scanner: ConflictScanner,
}

impl Sweeper {
    /// Create a sweeper for a config.
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            scanner: ConflictScanner::new(),
        }
    }

    /// The config this sweeper runs with.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run a full sweep, reporting progress through `on_event`.
    ///
    /// Per-file failures are recorded in the report and never stop the run.
    pub fn run(&self, mut on_event: impl FnMut(SweepEvent<'_>)) -> SweepReport {
        on_event(SweepEvent::ScanStarted {
            root: &self.config.root,
        });
        let initial = self.scanner.scan(&self.config);
        on_event(SweepEvent::Scanned { scan: &initial });

        if initial.is_empty() {
            return SweepReport {
                initial,
                files: Vec::new(),
                resolved: 0,
                verification: None,
            };
        }

        let mut files = Vec::with_capacity(initial.len());
        let mut resolved = 0;
        for path in &initial.files {
            let result = resolve_file(path, &self.config.markers);
            on_event(SweepEvent::FileFinished {
                path,
                result: &result,
            });

            let status = FileStatus::from(&result);
            if status.is_resolved() {
                resolved += 1;
            }
            files.push(FileReport {
                path: path.clone(),
                status,
            });
        }

        let total = files.len();
        on_event(SweepEvent::Tally { resolved, total });
        debug!(resolved, total, "verifying");

        let verification = self.scanner.scan(&self.config);
        on_event(SweepEvent::Verified {
            scan: &verification,
        });

        SweepReport {
            initial,
            files,
            resolved,
            verification: Some(verification),
        }
    }
}
