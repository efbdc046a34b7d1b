use std::borrow::Cow;

pub const GIB: u64 = 1024 * 1024 * 1024;

/// Convert a byte count to gibibytes
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / GIB as f64
}

/// Format a byte count as gibibytes with two decimals ("1.00 GB")
pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes_to_gb(bytes))
}

/// Convert a `du -k` kilobyte figure to bytes
pub fn kilobytes_to_bytes(kilobytes: u64) -> u64 {
    kilobytes.saturating_mul(1024)
}

/// Shorten `text` to exactly `width` characters by dropping its head.
///
/// The tail is kept because the last components of a path are the most
/// specific ones. Text that already fits is returned unchanged.
pub fn truncate_left(text: &str, width: usize) -> Cow<'_, str> {
    const ELLIPSIS: &str = "...";

    let len = text.chars().count();
    if len <= width {
        return Cow::Borrowed(text);
    }
    if width <= ELLIPSIS.len() {
        return Cow::Owned(ELLIPSIS[..width].to_string());
    }

    let keep = width - ELLIPSIS.len();
    let tail: String = text.chars().skip(len - keep).collect();
    Cow::Owned(format!("{}{}", ELLIPSIS, tail))
}
