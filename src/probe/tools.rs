//! External utility adapter
//!
//! Decouples probing logic from process spawning (tokio::process).

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

/// Upper bound for a single `du` run
pub const SIZE_TIMEOUT: Duration = Duration::from_secs(300);
/// Upper bound for listing local snapshots
pub const SNAPSHOT_TIMEOUT: Duration = Duration::from_secs(30);

/// Captured output of a utility that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Whether the utility exited with status 0
    pub success: bool,
    pub stdout: String,
}

impl ToolOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
        }
    }

    pub fn failure(stdout: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: stdout.into(),
        }
    }
}

/// The external utilities the probes depend on, one method per utility
///
/// An `Err` means the utility did not run to completion (missing binary,
/// timeout). A non-zero exit is an `Ok` with `success == false`.
#[allow(async_fn_in_trait)]
pub trait DiskTools {
    /// Total recursive size of `path`, as `du -sk` prints it
    async fn disk_usage(&self, path: &Path) -> Result<ToolOutput>;

    /// Recursive sizes of every immediate subdirectory of `root`,
    /// one `<kilobytes>\t<path>` line each
    async fn child_disk_usage(&self, root: &Path) -> Result<ToolOutput>;

    /// Names of local Time Machine snapshots, one per line
    async fn list_local_snapshots(&self) -> Result<ToolOutput>;
}

/// Runs the real `du`, `find` and `tmutil` binaries
#[derive(Debug, Clone)]
pub struct SystemTools {
    size_timeout: Duration,
    snapshot_timeout: Duration,
}

impl SystemTools {
    pub fn new() -> Self {
        Self::with_timeouts(SIZE_TIMEOUT, SNAPSHOT_TIMEOUT)
    }

    pub fn with_timeouts(size_timeout: Duration, snapshot_timeout: Duration) -> Self {
        Self {
            size_timeout,
            snapshot_timeout,
        }
    }
}

impl Default for SystemTools {
    fn default() -> Self {
        Self::new()
    }
}

impl DiskTools for SystemTools {
    async fn disk_usage(&self, path: &Path) -> Result<ToolOutput> {
        let mut command = Command::new("du");
        command.arg("-sk").arg(path);
        run(command, self.size_timeout).await
    }

    async fn child_disk_usage(&self, root: &Path) -> Result<ToolOutput> {
        let mut command = Command::new("find");
        command
            .arg(root)
            .args(["-mindepth", "1", "-maxdepth", "1", "-type", "d"])
            .args(["-exec", "du", "-sk", "{}", "+"]);
        run(command, self.size_timeout).await
    }

    async fn list_local_snapshots(&self) -> Result<ToolOutput> {
        let mut command = Command::new("tmutil");
        command.args(["listlocalsnapshots", "/"]);
        run(command, self.snapshot_timeout).await
    }
}

/// Run `command` to completion, killing it if it outlives `timeout`
async fn run(mut command: Command, timeout: Duration) -> Result<ToolOutput> {
    let description = format!("{:?}", command.as_std());
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let start = Instant::now();
    let child = command
        .spawn()
        .with_context(|| format!("Failed to start {}", description))?;

    // Dropping the future on timeout drops the child, which kills it
    let output = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .with_context(|| format!("{} timed out after {:?}", description, timeout))?
        .with_context(|| format!("Failed to wait for {}", description))?;

    debug!(
        "{} exited with {} in {:?}",
        description,
        output.status,
        start.elapsed()
    );
    if !output.stderr.is_empty() {
        debug!(
            "{} stderr: {}",
            description,
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }

    Ok(ToolOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}
