// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use sysdata_finder::probe::{DiskTools, ToolOutput};
use sysdata_finder::scan::{ProgressHandle, ProgressReporter};
use tempfile::TempDir;

pub const ONE_GB_KB: u64 = 1024 * 1024;

/// Scripted stand-in for du/find/tmutil
#[derive(Default)]
pub struct FakeTools {
    usage: HashMap<PathBuf, Scripted>,
    children: HashMap<PathBuf, Scripted>,
    snapshots: Option<Scripted>,
    calls: Mutex<Vec<PathBuf>>,
}

#[derive(Clone)]
enum Scripted {
    Output(ToolOutput),
    TimedOut,
}

impl Scripted {
    fn result(&self) -> Result<ToolOutput> {
        match self {
            Scripted::Output(output) => Ok(output.clone()),
            Scripted::TimedOut => Err(anyhow!("timed out")),
        }
    }
}

impl FakeTools {
    pub fn new() -> Self {
        Self::default()
    }

    /// `du -sk` prints `kilobytes` for `path`
    pub fn with_kilobytes(mut self, path: &Path, kilobytes: u64) -> Self {
        let stdout = format!("{}\t{}\n", kilobytes, path.display());
        self.usage
            .insert(path.to_path_buf(), Scripted::Output(ToolOutput::success(stdout)));
        self
    }

    /// `du -sk` exits non-zero for `path`
    pub fn with_failure(mut self, path: &Path) -> Self {
        self.usage
            .insert(path.to_path_buf(), Scripted::Output(ToolOutput::failure("")));
        self
    }

    /// `du -sk` succeeds but prints something unparsable
    pub fn with_garbage(mut self, path: &Path) -> Self {
        self.usage.insert(
            path.to_path_buf(),
            Scripted::Output(ToolOutput::success("du: weird output")),
        );
        self
    }

    /// `du -sk` never finishes for `path`
    pub fn with_timeout(mut self, path: &Path) -> Self {
        self.usage.insert(path.to_path_buf(), Scripted::TimedOut);
        self
    }

    /// Child listing for `root`, as `(child path, kilobytes)` pairs
    pub fn with_children(mut self, root: &Path, children: &[(&Path, u64)], success: bool) -> Self {
        let stdout: String = children
            .iter()
            .map(|(path, kb)| format!("{}\t{}\n", kb, path.display()))
            .collect();
        let output = if success {
            ToolOutput::success(stdout)
        } else {
            ToolOutput::failure(stdout)
        };
        self.children.insert(root.to_path_buf(), Scripted::Output(output));
        self
    }

    pub fn with_children_timeout(mut self, root: &Path) -> Self {
        self.children.insert(root.to_path_buf(), Scripted::TimedOut);
        self
    }

    pub fn with_snapshots(mut self, stdout: &str) -> Self {
        self.snapshots = Some(Scripted::Output(ToolOutput::success(stdout)));
        self
    }

    pub fn with_snapshots_timeout(mut self) -> Self {
        self.snapshots = Some(Scripted::TimedOut);
        self
    }

    /// Paths passed to `disk_usage`, in call order
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl DiskTools for FakeTools {
    async fn disk_usage(&self, path: &Path) -> Result<ToolOutput> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        match self.usage.get(path) {
            Some(scripted) => scripted.result(),
            None => Ok(ToolOutput::failure("")),
        }
    }

    async fn child_disk_usage(&self, root: &Path) -> Result<ToolOutput> {
        match self.children.get(root) {
            Some(scripted) => scripted.result(),
            None => Ok(ToolOutput::success("")),
        }
    }

    async fn list_local_snapshots(&self) -> Result<ToolOutput> {
        match &self.snapshots {
            Some(scripted) => scripted.result(),
            None => Err(anyhow!("tmutil: command not found")),
        }
    }
}

/// Progress reporter that keeps every status line
#[derive(Default, Clone)]
pub struct RecordingProgress {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingProgress {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgress {
    fn start(&self, _label: &str, _total: u64) -> Box<dyn ProgressHandle> {
        Box::new(RecordingHandle {
            lines: Arc::clone(&self.lines),
        })
    }
}

struct RecordingHandle {
    lines: Arc<Mutex<Vec<String>>>,
}

impl ProgressHandle for RecordingHandle {
    fn set_message(&self, _message: &str) {}
    fn inc(&self, _n: u64) {}

    fn println(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn finish(&self) {}
}

/// Create a temp directory with the given subdirectories
pub fn create_dirs(names: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().unwrap();
    let paths = names
        .iter()
        .map(|name| {
            let path = dir.path().join(name);
            std::fs::create_dir_all(&path).unwrap();
            path
        })
        .collect();
    (dir, paths)
}
