//! Notification model

mod event_kind;
mod resolved;

pub use event_kind::EventKind;
pub use resolved::{HookMetadata, ResolvedNotification};

/// Fixed title identifying the tool that raised the hook event
pub const TOOL_NAME: &str = "Claude Code";

/// Message used when nothing better is known
pub const DEFAULT_MESSAGE: &str = "Notification";
