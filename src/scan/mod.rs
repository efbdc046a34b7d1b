//! Catalog scanning
//!
//! Turns resolved catalog entries into records by probing each one in order.
//! Nothing here prints: per-location status goes through [`ProgressReporter`]
//! and rendering lives in `report`.

mod progress;

pub use progress::{IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter};

use log::debug;
use std::path::PathBuf;

use crate::model::{LargeDirectory, LocationRecord, LocationSize, ResolvedEntry, ResolvedRoot};
use crate::probe::{DiskTools, SizeProbe, SubdirectoryScanner};
use crate::util::format_gb;

/// Probe every entry and keep the ones that exist, in catalog order
pub async fn scan_catalog<T: DiskTools>(
    entries: &[ResolvedEntry],
    tools: &T,
    progress: &dyn ProgressReporter,
) -> Vec<LocationRecord> {
    let probe = SizeProbe::new(tools);
    let handle = progress.start("Scanning", entries.len() as u64);
    let mut records = Vec::new();

    for entry in entries {
        handle.set_message(&entry.label);
        let measurement = probe.measure(&entry.path).await;
        debug!("{} -> {:?}", entry.path.display(), measurement);

        if let Some(size) = measurement.location_size() {
            handle.println(&status_line(&entry.label, size));
            records.push(LocationRecord {
                path: entry.path.display().to_string(),
                label: entry.label.clone(),
                size,
                requires_elevated_access: entry.requires_elevated_access,
            });
        }
        handle.inc(1);
    }

    handle.finish();
    records
}

/// One-line summary printed as each location is found
pub fn status_line(label: &str, size: LocationSize) -> String {
    match size {
        LocationSize::Measured(bytes) => format!("Found: {} - {}", label, format_gb(bytes)),
        LocationSize::Inaccessible => {
            format!("Found: {} - [Permission Denied - may require sudo]", label)
        }
    }
}

/// Large subdirectories found under one root
#[derive(Debug, Clone, PartialEq)]
pub struct SubdirectoryReport {
    pub root: PathBuf,
    pub label: String,
    /// Largest first
    pub directories: Vec<LargeDirectory>,
}

/// Scan the children of every existing root for entries above `min_size_gb`
pub async fn scan_subdirectories<T: DiskTools>(
    roots: &[ResolvedRoot],
    min_size_gb: f64,
    tools: &T,
    progress: &dyn ProgressReporter,
) -> Vec<SubdirectoryReport> {
    let scanner = SubdirectoryScanner::new(tools);
    let handle = progress.start("Subdirectories", roots.len() as u64);
    let mut reports = Vec::new();

    for root in roots {
        if root.path.exists() {
            handle.set_message(&root.label);
            handle.println(&format!("Scanning {}...", root.label));
            let directories = scanner.find_large(&root.path, min_size_gb).await;
            reports.push(SubdirectoryReport {
                root: root.path.clone(),
                label: root.label.clone(),
                directories,
            });
        }
        handle.inc(1);
    }

    handle.finish();
    reports
}
