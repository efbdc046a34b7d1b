//! Disk usage probes
//!
//! Each probe is a thin layer over one external utility:
//!
//! - **tools**: `DiskTools` adapter trait and the process-spawning `SystemTools`
//! - **size**: `SizeProbe`, recursive size of one path (`du -sk`)
//! - **subdirs**: `SubdirectoryScanner`, sizes of depth-1 children (`find | du`)
//! - **snapshots**: `SnapshotChecker`, local Time Machine snapshots (`tmutil`)
//!
//! Probes never return errors. Failures degrade to `Measurement::Inaccessible`
//! or empty lists so one bad location cannot stop the report.

mod size;
mod snapshots;
mod subdirs;
mod tools;

pub use size::{SizeProbe, parse_du_kilobytes};
pub use snapshots::{SNAPSHOT_PREFIX, SnapshotChecker, filter_snapshots};
pub use subdirs::{SubdirectoryScanner, parse_child_usage};
pub use tools::{DiskTools, SIZE_TIMEOUT, SNAPSHOT_TIMEOUT, SystemTools, ToolOutput};
