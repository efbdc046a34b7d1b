use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::util::expand_home;

/// A location to measure, as written in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    /// Path template; a leading `~` refers to the user's home directory
    pub path: String,
    pub label: String,
    /// Whether the location usually needs root to be read in full
    #[serde(default)]
    pub requires_elevated_access: bool,
}

impl CatalogEntry {
    pub fn new(path: &str, label: &str, requires_elevated_access: bool) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
            requires_elevated_access,
        }
    }

    pub fn resolve(&self, home: &Path) -> ResolvedEntry {
        ResolvedEntry {
            path: expand_home(&self.path, home),
            label: self.label.clone(),
            requires_elevated_access: self.requires_elevated_access,
        }
    }
}

/// A catalog entry with its home-relative path expanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub path: PathBuf,
    pub label: String,
    pub requires_elevated_access: bool,
}

impl ResolvedEntry {
    pub fn new(path: impl Into<PathBuf>, label: &str, requires_elevated_access: bool) -> Self {
        Self {
            path: path.into(),
            label: label.to_string(),
            requires_elevated_access,
        }
    }
}

/// A directory whose immediate children are checked for size
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubdirectoryRoot {
    pub path: String,
    pub label: String,
}

impl SubdirectoryRoot {
    pub fn new(path: &str, label: &str) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
        }
    }

    pub fn resolve(&self, home: &Path) -> ResolvedRoot {
        ResolvedRoot {
            path: expand_home(&self.path, home),
            label: self.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoot {
    pub path: PathBuf,
    pub label: String,
}

impl ResolvedRoot {
    pub fn new(path: impl Into<PathBuf>, label: &str) -> Self {
        Self {
            path: path.into(),
            label: label.to_string(),
        }
    }
}
