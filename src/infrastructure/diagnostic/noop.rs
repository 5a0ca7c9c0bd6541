//! No-op diagnostic log adapter
//!
//! Used when no log path is configured.

use crate::application::ports::DiagnosticLog;

/// Diagnostic log that discards everything
pub struct NoOpDiagnosticLog;

impl NoOpDiagnosticLog {
    /// Create a new no-op log
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpDiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticLog for NoOpDiagnosticLog {
    fn log(&self, _message: &str) {}
}
