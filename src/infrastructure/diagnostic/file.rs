//! File-backed diagnostic log adapter

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::application::ports::DiagnosticLog;

/// Timestamp layout for each line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends timestamped lines to a file.
///
/// The file is opened, appended and closed on every write, so concurrent
/// invocations sharing a path interleave whole lines.
pub struct FileDiagnosticLog {
    path: PathBuf,
}

impl FileDiagnosticLog {
    /// Create a log at `path`, creating missing parent directories.
    ///
    /// Directory creation failures only emit a warning; later writes will
    /// fail the same way and are dropped.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "cannot create log directory");
            }
        }
        Self { path }
    }

    /// Format one log line (without trailing newline)
    pub fn format_line(timestamp: &str, message: &str) -> String {
        format!("{} - {}", timestamp, message)
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

impl DiagnosticLog for FileDiagnosticLog {
    fn log(&self, message: &str) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = Self::format_line(&timestamp, message);
        if let Err(e) = self.append(&line) {
            tracing::warn!(path = %self.path.display(), error = %e, "cannot write diagnostic log");
        }
    }
}
