mod format;
mod path;

pub use format::{GIB, bytes_to_gb, format_gb, kilobytes_to_bytes, truncate_left};
pub use path::expand_home;
