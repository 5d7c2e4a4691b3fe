//! JWalk-based conflict scanner.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, warn};

use mergesweep_core::{ConflictMarkers, ScanWarning, SweepConfig, WarningKind};

use crate::scan::ConflictScan;

/// Scanner that finds files containing conflict start markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictScanner;

impl ConflictScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Scan the configured root.
    ///
    /// Never fails: a missing root yields an empty scan with a warning, and
    /// unreadable entries are recorded as warnings and skipped.
    pub fn scan(&self, config: &SweepConfig) -> ConflictScan {
        let start = Instant::now();
        let mut scan = ConflictScan::new(&config.root);

        if !config.root.is_dir() {
            warn!(root = %config.root.display(), "scan root is not a directory");
            scan.warnings.push(ScanWarning::missing_root(&config.root));
            return scan;
        }

        let prune = config.clone();
        let walker = WalkDir::new(&config.root)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(false)
            .follow_links(false)
            .process_read_dir(move |_depth, _path, _state, children| {
                // Pruned directories are dropped before jwalk reads them.
                children.retain(|entry| match entry {
                    Ok(entry) => {
                        !(entry.file_type().is_dir()
                            && entry
                                .file_name()
                                .to_str()
                                .is_some_and(|name| prune.is_excluded_dir(name)))
                    }
                    Err(_) => true,
                });
            });

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    warn!(path = %path.display(), error = %err, "skipping unreadable entry");
                    scan.warnings.push(ScanWarning::new(
                        path,
                        err.to_string(),
                        WarningKind::ReadError,
                    ));
                    continue;
                }
            };

            let path = entry.path();

            // jwalk keeps a failed read_dir on the directory entry itself.
            if let Some(err) = &entry.read_children_error {
                warn!(path = %path.display(), error = %err, "skipping unreadable directory");
                scan.warnings.push(match err.io_error() {
                    Some(io) => ScanWarning::io(&path, io),
                    None => ScanWarning::new(&path, err.to_string(), WarningKind::ReadError),
                });
                continue;
            }

            let file_type = entry.file_type();
            let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
            if !is_file {
                continue;
            }

            scan.files_examined += 1;
            match file_has_conflicts(&path, &config.markers) {
                Ok(true) => {
                    debug!(path = %path.display(), "conflict markers found");
                    scan.files.push(path);
                }
                Ok(false) => {}
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable file");
                    scan.warnings.push(ScanWarning::io(&path, &err));
                }
            }
        }

        scan.scan_duration = start.elapsed();
        scan
    }
}

/// Check whether a file's content contains the start marker.
///
/// Content is decoded lossily, so binary files and other encodings are
/// searched rather than rejected.
pub fn file_has_conflicts(path: &Path, markers: &ConflictMarkers) -> std::io::Result<bool> {
    let bytes = fs::read(path)?;
    Ok(markers.appears_in(&String::from_utf8_lossy(&bytes)))
}

/// Find conflicted files under `root` using the default exclusions.
pub fn find_conflict_files(root: impl Into<PathBuf>) -> Vec<PathBuf> {
    ConflictScanner::new().scan(&SweepConfig::new(root)).files
}
