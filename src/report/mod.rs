//! Plain-text rendering
//!
//! Pure functions from scan results to text. The caller decides where the
//! text goes.

mod table;

pub use table::{
    ColumnWidths, MAX_LABEL_WIDTH, MAX_PATH_WIDTH, MIN_LABEL_WIDTH, MIN_PATH_WIDTH, Report,
    SIZE_WIDTH, permission_text, ranked, render,
};

use crate::model::LargeDirectory;
use crate::util::format_gb;

/// Width of the banner and section rules
pub const RULE_WIDTH: usize = 100;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn render_banner() -> String {
    format!(
        "{rule}\n        SYSTEM DATA LOCATION FINDER FOR macOS\n{rule}\n\n",
        rule = rule()
    )
}

/// Heading printed between the scan progress and the results table
pub fn render_results_heading() -> String {
    format!("{}\nRESULTS:\n\n", rule())
}

/// Up to `limit` of the largest subdirectories under a root.
///
/// `dirs` is expected largest first. Nothing is rendered when it is empty.
pub fn render_large_directories(label: &str, dirs: &[LargeDirectory], limit: usize) -> String {
    if dirs.is_empty() {
        return String::new();
    }

    let mut text = format!("Large directories in {}:\n", label);
    for dir in dirs.iter().take(limit) {
        text.push_str(&format!("  {}: {}\n", dir.path, format_gb(dir.size_bytes)));
    }
    text.push('\n');
    text
}

/// Warning about local snapshots, empty when there are none
pub fn render_snapshot_notice(snapshots: &[String]) -> String {
    if snapshots.is_empty() {
        return String::new();
    }

    format!(
        "WARNING: Found {} Time Machine local snapshots!\n   \
         These can take up significant space. To delete them:\n   \
         sudo tmutil deletelocalsnapshots <snapshot-date>\n   \
         Or delete all: sudo tmutil deletelocalsnapshots /\n\n",
        snapshots.len()
    )
}

pub fn render_tips() -> String {
    format!(
        "{}\nTIP: Some locations may require sudo to access. Use 'sudo du -sh <path>' to check.\n\
         TIP: To check specific directory: du -sh <path>\n\n",
        rule()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::GIB;

    fn dir(path: &str, size_bytes: u64) -> LargeDirectory {
        LargeDirectory {
            path: path.to_string(),
            size_bytes,
        }
    }

    #[test]
    fn test_large_directories_limit() {
        let dirs: Vec<_> = (0..15)
            .rev()
            .map(|i| dir(&format!("/Library/d{}", i), (i + 1) * GIB))
            .collect();
        let text = render_large_directories("System Library subdirectories", &dirs, 10);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Large directories in System Library subdirectories:");
        assert_eq!(lines[1], "  /Library/d14: 15.00 GB");
        assert_eq!(lines[10], "  /Library/d5: 6.00 GB");
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[11], "");
    }

    #[test]
    fn test_large_directories_empty() {
        assert_eq!(render_large_directories("Anything", &[], 10), "");
    }

    #[test]
    fn test_snapshot_notice() {
        assert_eq!(render_snapshot_notice(&[]), "");

        let snapshots = vec![
            "com.apple.TimeMachine.2024-05-01-101500.local".to_string(),
            "com.apple.TimeMachine.2024-05-02-101500.local".to_string(),
        ];
        let text = render_snapshot_notice(&snapshots);
        assert!(text.starts_with("WARNING: Found 2 Time Machine local snapshots!\n"));
        assert!(text.contains("   sudo tmutil deletelocalsnapshots <snapshot-date>\n"));
    }

    #[test]
    fn test_banner_and_tips() {
        let banner = render_banner();
        assert!(banner.starts_with(&rule()));
        assert!(banner.contains("SYSTEM DATA LOCATION FINDER"));
        assert!(render_tips().contains("du -sh <path>"));
    }
}
