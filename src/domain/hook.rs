//! Hook payload schema
//!
//! The JSON document a hook runner hands over, either piped on stdin or
//! passed explicitly. Every field is optional; unknown fields are ignored.

use serde::Deserialize;

use super::error::PayloadError;

/// Decoded hook payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HookPayload {
    pub hook_event_name: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub session_id: Option<String>,
    pub transcript_path: Option<String>,
    pub stop_hook_active: Option<bool>,
}

impl HookPayload {
    /// Decode a payload from JSON text.
    ///
    /// Anything other than a JSON object whose known fields have the
    /// expected types is rejected.
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// `title` field, treating an empty string as absent
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|s| !s.is_empty())
    }

    /// `message` field, treating an empty string as absent
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|s| !s.is_empty())
    }
}
