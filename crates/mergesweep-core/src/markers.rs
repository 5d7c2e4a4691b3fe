//! Conflict marker definitions.

use serde::{Deserialize, Serialize};

/// The three line prefixes that delimit a conflict block.
///
/// A well-formed block is `start`, zero or more "ours" lines, `separator`,
/// zero or more "theirs" lines, then `end`. All three are matched as line
/// prefixes, so trailing text such as a branch name is tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictMarkers {
    /// Opens a block and starts the "ours" band.
    pub start: String,
    /// Ends the "ours" band and starts the "theirs" band.
    pub separator: String,
    /// Closes a block.
    pub end: String,
}

impl ConflictMarkers {
    /// The markers git writes for a conflict against the checked out branch.
    pub fn git() -> Self {
        Self {
            start: "<<<<<<< HEAD".to_string(),
            separator: "=======".to_string(),
            end: ">>>>>>>".to_string(),
        }
    }

    /// Whether a raw line opens a conflict block.
    pub fn is_start(&self, line: &[u8]) -> bool {
        line.starts_with(self.start.as_bytes())
    }

    /// Whether a raw line is a band separator.
    pub fn is_separator(&self, line: &[u8]) -> bool {
        line.starts_with(self.separator.as_bytes())
    }

    /// Whether a raw line closes a conflict block.
    pub fn is_end(&self, line: &[u8]) -> bool {
        line.starts_with(self.end.as_bytes())
    }

    /// Whether decoded file content contains the start marker anywhere.
    pub fn appears_in(&self, content: &str) -> bool {
        content.contains(self.start.as_str())
    }
}

impl Default for ConflictMarkers {
    fn default() -> Self {
        Self::git()
    }
}
