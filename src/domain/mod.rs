//! Domain layer - Core notification model
//!
//! Contains the resolved notification record, the hook payload schema,
//! configuration value objects, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod hook;
pub mod notification;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use hook::HookPayload;
pub use notification::{EventKind, HookMetadata, ResolvedNotification, DEFAULT_MESSAGE, TOOL_NAME};
