use log::debug;

use super::tools::DiskTools;

/// Prefix of Time Machine local snapshot names
pub const SNAPSHOT_PREFIX: &str = "com.apple.TimeMachine";

/// Lists local Time Machine snapshots
pub struct SnapshotChecker<'a, T> {
    tools: &'a T,
}

impl<'a, T: DiskTools> SnapshotChecker<'a, T> {
    pub fn new(tools: &'a T) -> Self {
        Self { tools }
    }

    /// Snapshot identifiers, or an empty list if they cannot be listed
    pub async fn list_snapshots(&self) -> Vec<String> {
        match self.tools.list_local_snapshots().await {
            Ok(output) if output.success => filter_snapshots(&output.stdout),
            Ok(_) => {
                debug!("tmutil exited with failure");
                Vec::new()
            }
            Err(e) => {
                debug!("Snapshot listing unavailable: {:#}", e);
                Vec::new()
            }
        }
    }
}

/// Keep the lines that name a Time Machine snapshot
pub fn filter_snapshots(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(SNAPSHOT_PREFIX))
        .map(str::to_string)
        .collect()
}
