use log::{debug, warn};
use std::path::Path;

use crate::model::Measurement;
use crate::util::kilobytes_to_bytes;

use super::tools::DiskTools;

/// Measures the recursive size of single paths
pub struct SizeProbe<'a, T> {
    tools: &'a T,
}

impl<'a, T: DiskTools> SizeProbe<'a, T> {
    pub fn new(tools: &'a T) -> Self {
        Self { tools }
    }

    /// Measure `path`, never failing.
    ///
    /// Absent paths are reported without running the utility. Any failure
    /// to measure an existing path yields [`Measurement::Inaccessible`].
    pub async fn measure(&self, path: &Path) -> Measurement {
        if !path.exists() {
            return Measurement::Absent;
        }

        match self.tools.disk_usage(path).await {
            Ok(output) if output.success => match parse_du_kilobytes(&output.stdout) {
                Some(kilobytes) => return Measurement::Measured(kilobytes_to_bytes(kilobytes)),
                None => warn!(
                    "Unexpected du output for {}: {:?}",
                    path.display(),
                    output.stdout
                ),
            },
            Ok(_) => debug!("du failed for {}", path.display()),
            Err(e) => warn!("Could not measure {}: {:#}", path.display(), e),
        }

        // The path may have vanished while du was running
        if path.exists() {
            Measurement::Inaccessible
        } else {
            Measurement::Absent
        }
    }
}

/// Parse the leading kilobyte figure of `du -sk` output
pub fn parse_du_kilobytes(output: &str) -> Option<u64> {
    output.split_whitespace().next()?.parse().ok()
}
