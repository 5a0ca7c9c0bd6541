//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting.
///
/// Progress lines go to stdout and are advisory only; errors go to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output plain text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}
