//! Resolution outcome types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Details of a file that was rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveSummary {
    /// The rewritten file.
    pub path: PathBuf,
    /// Number of conflict blocks removed.
    pub conflicts: usize,
    /// The file ended inside a conflict block.
    pub unterminated: bool,
}

/// Successful result of resolving a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// No start marker was found; the file was not touched.
    Clean,
    /// Conflicts were removed and the file was rewritten.
    Resolved(ResolveSummary),
}

impl ResolveOutcome {
    /// Number of conflicts removed (0 for clean files).
    pub fn conflicts(&self) -> usize {
        match self {
            Self::Clean => 0,
            Self::Resolved(summary) => summary.conflicts,
        }
    }

    /// Check if the file was rewritten.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Serializable per-file status for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Clean,
    Resolved { conflicts: usize, unterminated: bool },
    ReadError { message: String },
    WriteError { message: String },
}

impl FileStatus {
    /// Check if this status counts towards the resolved tally.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// Check if this status is a read or write failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ReadError { .. } | Self::WriteError { .. })
    }
}

impl From<&Result<ResolveOutcome, ResolveError>> for FileStatus {
    fn from(result: &Result<ResolveOutcome, ResolveError>) -> Self {
        match result {
            Ok(ResolveOutcome::Clean) => Self::Clean,
            Ok(ResolveOutcome::Resolved(summary)) => Self::Resolved {
                conflicts: summary.conflicts,
                unterminated: summary.unterminated,
            },
            Err(err @ ResolveError::Read { .. }) => Self::ReadError {
                message: err.to_string(),
            },
            Err(err @ ResolveError::Write { .. }) => Self::WriteError {
                message: err.to_string(),
            },
        }
    }
}
