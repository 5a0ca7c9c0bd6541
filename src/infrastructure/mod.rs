//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the desktop notification service, standard input,
//! the filesystem and the config file.

pub mod config;
pub mod diagnostic;
pub mod input;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use diagnostic::{create_diagnostic_log, FileDiagnosticLog, NoOpDiagnosticLog};
pub use input::StdinInput;
pub use notification::{create_notifiers, NotifyRustNotifier, NotifySendNotifier};
