//! Diagnostic log port interface

use std::sync::Arc;

/// Port for the append-only diagnostic sink.
///
/// Writing never fails from the caller's point of view: implementations
/// swallow their own I/O errors. The pipeline's behavior must not depend
/// on whether a line was written.
pub trait DiagnosticLog: Send + Sync {
    /// Append one diagnostic line
    fn log(&self, message: &str);
}

/// Shared handle passed to every pipeline component
pub type SharedLog = Arc<dyn DiagnosticLog>;
