//! Scan catalog configuration
//!
//! The catalog ships with built-in macOS defaults. A JSON file at
//! `<config dir>/sysdata-finder/catalog.json` overrides any field it sets:
//!
//! ```json
//! {
//!   "locations": [
//!     { "path": "~/Library/Caches", "label": "User Library Caches" },
//!     { "path": "/private/var/db", "label": "System Databases", "requires_elevated_access": true }
//!   ],
//!   "subdirectory_roots": [{ "path": "~/Library", "label": "User Library subdirectories" }],
//!   "min_subdirectory_gb": 0.5,
//!   "top_subdirectories": 10
//! }
//! ```

mod defaults;

pub use defaults::{MIN_SUBDIRECTORY_GB, TOP_SUBDIRECTORIES};

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{CatalogEntry, ResolvedEntry, ResolvedRoot, SubdirectoryRoot};

pub const CONFIG_DIR_NAME: &str = "sysdata-finder";
pub const CONFIG_FILE_NAME: &str = "catalog.json";

/// Everything the scan needs to know about where to look
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanCatalog {
    pub locations: Vec<CatalogEntry>,
    pub subdirectory_roots: Vec<SubdirectoryRoot>,
    /// Smallest subdirectory worth listing, in GB
    pub min_subdirectory_gb: f64,
    /// How many subdirectories to list per root
    pub top_subdirectories: usize,
}

impl Default for ScanCatalog {
    fn default() -> Self {
        Self {
            locations: defaults::locations(),
            subdirectory_roots: defaults::subdirectory_roots(),
            min_subdirectory_gb: MIN_SUBDIRECTORY_GB,
            top_subdirectories: TOP_SUBDIRECTORIES,
        }
    }
}

impl ScanCatalog {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid catalog JSON")
    }

    /// Load the catalog from `path`, falling back to defaults when the file
    /// does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No catalog at {}, using built-in locations", path.display());
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Could not read catalog: {}", path.display()))?;
        let catalog = Self::from_json(&json)
            .with_context(|| format!("Could not load catalog: {}", path.display()))?;
        info!(
            "Loaded {} locations from {}",
            catalog.locations.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Load the catalog from the user's config directory
    pub fn load() -> Result<Self> {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn resolve_locations(&self, home: &Path) -> Vec<ResolvedEntry> {
        self.locations.iter().map(|entry| entry.resolve(home)).collect()
    }

    pub fn resolve_roots(&self, home: &Path) -> Vec<ResolvedRoot> {
        self.subdirectory_roots
            .iter()
            .map(|root| root.resolve(home))
            .collect()
    }
}

/// `<config dir>/sysdata-finder/catalog.json`, if the platform has a config dir
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
