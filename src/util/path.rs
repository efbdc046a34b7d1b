use std::path::{Path, PathBuf};

/// Expands a leading `~` in a path template against `home`.
///
/// Only a bare `~` or a `~/` prefix is expanded; `~user` forms and
/// templates without a tilde are returned as-is.
pub fn expand_home(template: &str, home: &Path) -> PathBuf {
    if template == "~" {
        return home.to_path_buf();
    }
    match template.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(template),
    }
}
