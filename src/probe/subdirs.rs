use log::{debug, warn};
use std::path::Path;

use crate::model::LargeDirectory;
use crate::util::{bytes_to_gb, kilobytes_to_bytes};

use super::tools::DiskTools;

/// Finds the heavy immediate subdirectories of a root
pub struct SubdirectoryScanner<'a, T> {
    tools: &'a T,
}

impl<'a, T: DiskTools> SubdirectoryScanner<'a, T> {
    pub fn new(tools: &'a T) -> Self {
        Self { tools }
    }

    /// Subdirectories of `root` at or above `min_size_gb`, largest first.
    ///
    /// Best effort: a missing root or a utility that could not run yields
    /// an empty list. A non-zero exit still uses whatever was printed, since
    /// `find` reports failure when only some children were unreadable.
    pub async fn find_large(&self, root: &Path, min_size_gb: f64) -> Vec<LargeDirectory> {
        if !root.is_dir() {
            return Vec::new();
        }

        let output = match self.tools.child_disk_usage(root).await {
            Ok(output) => output,
            Err(e) => {
                warn!("Could not list subdirectories of {}: {:#}", root.display(), e);
                return Vec::new();
            }
        };
        if !output.success {
            debug!("Partial subdirectory sizes for {}", root.display());
        }

        let mut dirs = parse_child_usage(&output.stdout, root, min_size_gb);
        dirs.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
        dirs
    }
}

/// Parse `<kilobytes>\t<path>` lines, keeping non-empty entries at or above
/// the threshold. The root itself and malformed lines are skipped.
pub fn parse_child_usage(output: &str, root: &Path, min_size_gb: f64) -> Vec<LargeDirectory> {
    output
        .lines()
        .filter_map(|line| {
            let (kilobytes, path) = line.split_once('\t')?;
            let kilobytes: u64 = kilobytes.trim().parse().ok()?;
            if kilobytes == 0 || Path::new(path) == root {
                return None;
            }
            let size_bytes = kilobytes_to_bytes(kilobytes);
            (bytes_to_gb(size_bytes) >= min_size_gb).then(|| LargeDirectory {
                path: path.to_string(),
                size_bytes,
            })
        })
        .collect()
}
