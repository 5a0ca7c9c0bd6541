//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod diagnostic_log;
pub mod input_source;
pub mod notifier;

// Re-export common types
pub use config::ConfigStore;
pub use diagnostic_log::{DiagnosticLog, SharedLog};
pub use input_source::{InputError, InputSource};
pub use notifier::{NotificationError, NotificationIcon, Notifier};
