//! Event kind value object

use std::fmt;

/// Classification of the payload a notification was resolved from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum EventKind {
    /// `hook_event_name` was `"Notification"`
    Notification,
    /// `hook_event_name` was `"Stop"`
    Stop,
    /// Any other `hook_event_name` value, kept verbatim
    Other(String),
    /// Payload without a `hook_event_name` field
    Manual,
    /// No payload, or a payload that could not be decoded
    #[default]
    Default,
}

impl EventKind {
    /// Classify a `hook_event_name` value
    pub fn from_hook_event_name(name: &str) -> Self {
        match name {
            "Notification" => Self::Notification,
            "Stop" => Self::Stop,
            other => Self::Other(other.to_string()),
        }
    }

    /// Get the string label for this kind
    pub fn as_str(&self) -> &str {
        match self {
            Self::Notification => "Notification",
            Self::Stop => "Stop",
            Self::Other(name) => name,
            Self::Manual => "Manual",
            Self::Default => "Default",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
