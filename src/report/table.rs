use crate::model::{LocationRecord, LocationSize};
use crate::util::{bytes_to_gb, format_gb, truncate_left};

pub const MIN_PATH_WIDTH: usize = 58;
pub const MAX_PATH_WIDTH: usize = 78;
pub const MIN_LABEL_WIDTH: usize = 33;
pub const MAX_LABEL_WIDTH: usize = 48;
/// Wide enough for `{:>10.2} GB`
pub const SIZE_WIDTH: usize = 13;
pub const PERMISSION_WIDTH: usize = 11;

/// Spaces between columns
const GAP: usize = 2;

/// Rendered results table
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub text: String,
    /// Sum of measured sizes; inaccessible locations count as zero
    pub total_bytes: u64,
}

impl Report {
    pub fn total_gb(&self) -> f64 {
        bytes_to_gb(self.total_bytes)
    }
}

/// Column widths for a set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub path: usize,
    pub label: usize,
}

impl ColumnWidths {
    pub fn for_records(records: &[LocationRecord]) -> Self {
        let longest_path = records.iter().map(|r| r.path.chars().count()).max().unwrap_or(0);
        let longest_label = records.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
        Self {
            path: longest_path.clamp(MIN_PATH_WIDTH, MAX_PATH_WIDTH),
            label: longest_label.clamp(MIN_LABEL_WIDTH, MAX_LABEL_WIDTH),
        }
    }

    /// Width of the full table, used for the header rule
    pub fn total(&self) -> usize {
        self.path + self.label + SIZE_WIDTH + PERMISSION_WIDTH + 3 * GAP
    }
}

/// Records ordered largest first; ties keep their catalog order
pub fn ranked(records: &[LocationRecord]) -> Vec<&LocationRecord> {
    let mut sorted: Vec<&LocationRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.size_bytes().cmp(&a.size_bytes()));
    sorted
}

/// Text shown in the permission column
pub fn permission_text(record: &LocationRecord) -> &'static str {
    if record.needs_elevated_access() {
        "sudo needed"
    } else {
        "user access"
    }
}

fn size_text(size: LocationSize) -> String {
    match size {
        LocationSize::Measured(bytes) => format!("{:>10.2} GB", bytes_to_gb(bytes)),
        LocationSize::Inaccessible => format!("{:>width$}", "n/a", width = SIZE_WIDTH),
    }
}

/// Render records as an aligned table followed by the scanned total
pub fn render(records: &[LocationRecord]) -> Report {
    if records.is_empty() {
        return Report {
            text: "No large directories found.\n".to_string(),
            total_bytes: 0,
        };
    }

    let widths = ColumnWidths::for_records(records);
    let mut text = String::new();

    text.push_str(&format!(
        "{:<pw$}  {:<lw$}  {:<sw$}  {}\n",
        "Path",
        "Description",
        "Size",
        "Permission",
        pw = widths.path,
        lw = widths.label,
        sw = SIZE_WIDTH,
    ));
    text.push_str(&"=".repeat(widths.total()));
    text.push('\n');

    let mut total_bytes: u64 = 0;
    for record in ranked(records) {
        total_bytes = total_bytes.saturating_add(record.size_bytes());
        text.push_str(&format!(
            "{:<pw$}  {:<lw$}  {}  {}\n",
            truncate_left(&record.path, widths.path),
            record.label,
            size_text(record.size),
            permission_text(record),
            pw = widths.path,
            lw = widths.label,
        ));
    }

    text.push('\n');
    text.push_str(&format!("Total Scanned: {}\n", format_gb(total_bytes)));

    Report { text, total_bytes }
}
