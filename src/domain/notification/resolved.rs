//! Resolved notification entity

use super::{EventKind, DEFAULT_MESSAGE, TOOL_NAME};

/// Hook fields copied through for diagnostics only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookMetadata {
    pub session_id: Option<String>,
    pub transcript_path: Option<String>,
    pub stop_hook_active: Option<bool>,
}

/// The single title/message pair a process invocation delivers.
///
/// `title` and `message` are never empty. The event kind is fixed at
/// construction; only the title and message can be replaced afterwards,
/// through [`ResolvedNotification::with_overrides`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNotification {
    title: String,
    message: String,
    event_kind: EventKind,
    metadata: HookMetadata,
}

impl ResolvedNotification {
    /// Create a notification, substituting defaults for empty fields
    pub fn new(title: impl Into<String>, message: impl Into<String>, event_kind: EventKind) -> Self {
        Self {
            title: non_empty_or(title.into(), TOOL_NAME),
            message: non_empty_or(message.into(), DEFAULT_MESSAGE),
            event_kind,
            metadata: HookMetadata::default(),
        }
    }

    /// The built-in default used when there is no usable payload
    pub fn builtin_default() -> Self {
        Self::new(TOOL_NAME, DEFAULT_MESSAGE, EventKind::Default)
    }

    /// Attach hook metadata
    pub fn with_metadata(mut self, metadata: HookMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Apply force overrides. Each non-empty override replaces its field
    /// regardless of where the field came from.
    pub fn with_overrides(mut self, title: Option<&str>, message: Option<&str>) -> Self {
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            self.title = title.to_string();
        }
        if let Some(message) = message.filter(|m| !m.is_empty()) {
            self.message = message.to_string();
        }
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn event_kind(&self) -> &EventKind {
        &self.event_kind
    }

    pub fn metadata(&self) -> &HookMetadata {
        &self.metadata
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
