//! Sweep configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::markers::ConflictMarkers;

/// Directory names that are never descended into.
pub const DEFAULT_EXCLUDE_DIRS: [&str; 5] = ["node_modules", ".git", "coverage", "build", "dist"];

/// Configuration for a sweep over a directory tree.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct SweepConfig {
    /// Root directory to scan.
    pub root: PathBuf,

    /// Directory base names pruned before descent.
    #[builder(default = "default_exclude_dirs()")]
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Marker prefixes that delimit conflict blocks.
    #[builder(default)]
    #[serde(default)]
    pub markers: ConflictMarkers,
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect()
}

impl SweepConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) => check_root(root).map_err(|e| e.to_string())?,
            None => return Err("Root path is required".to_string()),
        }
        if let Some(ref dirs) = self.exclude_dirs {
            check_exclude_dirs(dirs).map_err(|e| e.to_string())?;
        }
        if let Some(ref markers) = self.markers {
            check_markers(markers).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

impl SweepConfig {
    /// Create a new sweep config builder.
    pub fn builder() -> SweepConfigBuilder {
        SweepConfigBuilder::default()
    }

    /// Create a config for sweeping a path with the default exclusions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude_dirs: default_exclude_dirs(),
            markers: ConflictMarkers::default(),
        }
    }

    /// Check a config that was assembled without the builder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_root(&self.root)?;
        check_exclude_dirs(&self.exclude_dirs)?;
        check_markers(&self.markers)
    }

    /// Check if a directory with this base name is pruned.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

fn check_root(root: &Path) -> Result<(), ConfigError> {
    if root.as_os_str().is_empty() {
        return Err(ConfigError::invalid("Root path cannot be empty"));
    }
    Ok(())
}

fn check_exclude_dirs(dirs: &[String]) -> Result<(), ConfigError> {
    for dir in dirs {
        if dir.is_empty() || dir.contains(['/', '\\']) {
            return Err(ConfigError::invalid(format!(
                "Excluded directory must be a bare name: {dir:?}"
            )));
        }
    }
    Ok(())
}

fn check_markers(markers: &ConflictMarkers) -> Result<(), ConfigError> {
    let ConflictMarkers {
        start,
        separator,
        end,
    } = markers;
    if start.is_empty() || separator.is_empty() || end.is_empty() {
        return Err(ConfigError::invalid("Conflict markers cannot be empty"));
    }
    if start == separator || start == end || separator == end {
        return Err(ConfigError::invalid("Conflict markers must be distinct"));
    }
    Ok(())
}
