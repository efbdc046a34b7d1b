//! Progress reporting abstraction
//!
//! Decouples scanning logic from terminal concerns (indicatif).

use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};
use log::debug;
use std::io::{self, Write};

/// A handle to an active progress display
pub trait ProgressHandle: Send + Sync {
    /// Name the item currently being worked on
    fn set_message(&self, message: &str);
    fn inc(&self, n: u64);
    /// Print a status line without disturbing the progress display
    fn println(&self, line: &str);
    fn finish(&self);
}

/// Factory for creating progress handles
pub trait ProgressReporter: Send + Sync {
    fn start(&self, label: &str, total: u64) -> Box<dyn ProgressHandle>;
}

/// Indicatif-based progress reporter for CLI usage
pub struct IndicatifProgress;

impl ProgressReporter for IndicatifProgress {
    fn start(&self, label: &str, total: u64) -> Box<dyn ProgressHandle> {
        let pb = ProgressBar::new(total).with_finish(ProgressFinish::AndClear);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(&format!(
                    "{{spinner}} {}: [{{bar:40}}] {{pos}}/{{len}} {{msg}}",
                    label
                ))
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Box::new(IndicatifHandle(pb))
    }
}

struct IndicatifHandle(ProgressBar);

// An interrupted scan drops the handle without calling finish
impl Drop for IndicatifHandle {
    fn drop(&mut self) {
        if !self.0.is_finished() {
            self.0.finish_and_clear();
        }
    }
}

/// Write a status line to `out`, hiding the bar while it is printed.
///
/// `ProgressBar::println` drops the line when stderr is not a terminal,
/// so status lines go to stdout directly.
fn write_status(bar: &ProgressBar, line: &str, out: &mut impl Write) -> io::Result<()> {
    if bar.is_hidden() {
        writeln!(out, "{}", line)
    } else {
        bar.suspend(|| writeln!(out, "{}", line))
    }
}

impl ProgressHandle for IndicatifHandle {
    fn set_message(&self, message: &str) {
        self.0.set_message(message.to_string());
    }

    fn inc(&self, n: u64) {
        self.0.inc(n);
    }

    fn println(&self, line: &str) {
        if let Err(e) = write_status(&self.0, line, &mut io::stdout().lock()) {
            debug!("Could not write status line: {}", e);
        }
    }

    fn finish(&self) {
        self.0.finish_and_clear();
    }
}

/// No-op progress reporter for benchmarks and tests
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _label: &str, _total: u64) -> Box<dyn ProgressHandle> {
        Box::new(NoopHandle)
    }
}

struct NoopHandle;

impl ProgressHandle for NoopHandle {
    fn set_message(&self, _message: &str) {}
    fn inc(&self, _n: u64) {}
    fn println(&self, _line: &str) {}
    fn finish(&self) {}
}
