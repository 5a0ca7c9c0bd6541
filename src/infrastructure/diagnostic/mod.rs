//! Diagnostic log adapters
//!
//! Append-only side channel for tracing what a single invocation did.

mod file;
mod noop;

use std::sync::Arc;

pub use file::FileDiagnosticLog;
pub use noop::NoOpDiagnosticLog;

use crate::application::ports::SharedLog;

/// Create a diagnostic log based on whether a log path is configured
pub fn create_diagnostic_log(path: Option<&str>) -> SharedLog {
    match path.filter(|p| !p.is_empty()) {
        Some(path) => Arc::new(FileDiagnosticLog::new(path)),
        None => Arc::new(NoOpDiagnosticLog::new()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::Mutex;

    use super::*;

    /// Shared buffer that collects formatted tracing output
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn traced_output(log: &SharedLog) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || log.log("Trying notify-send notification"));

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn no_adapter_mirrors_lines_to_tracing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notify.log");
        let file_log = create_diagnostic_log(path.to_str());
        let noop_log = create_diagnostic_log(None);

        assert!(!traced_output(&file_log).contains("Trying notify-send"));
        assert!(!traced_output(&noop_log).contains("Trying notify-send"));
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("Trying notify-send notification"));
    }
}
