//! Payload parser
//!
//! Turns a raw hook payload into a [`ResolvedNotification`]. Decoding
//! failures never escape: they are logged and replaced by the built-in
//! default record.

use crate::domain::{EventKind, HookMetadata, HookPayload, ResolvedNotification, TOOL_NAME};

use super::ports::SharedLog;

/// Message shown for a finished session
pub const STOP_MESSAGE: &str = "Session completed";

/// Message shown when a stop hook is already running
pub const STOP_ACTIVE_MESSAGE: &str = "Session continuing from previous stop";

/// Message shown for a payload without an event name or message
pub const MANUAL_MESSAGE: &str = "Manual notification";

/// Parses hook payloads into notifications
pub struct PayloadParser {
    log: SharedLog,
}

impl PayloadParser {
    /// Create a parser that reports to the given diagnostic log
    pub fn new(log: SharedLog) -> Self {
        Self { log }
    }

    /// Parse raw payload text.
    ///
    /// Returns the built-in default (`EventKind::Default`) when the text is
    /// not a valid payload.
    pub fn parse(&self, raw: &str) -> ResolvedNotification {
        let payload = match HookPayload::from_json(raw) {
            Ok(payload) => payload,
            Err(e) => {
                self.log.log(&format!("Error parsing payload: {}", e));
                return ResolvedNotification::builtin_default();
            }
        };

        let notification = interpret(payload);
        self.log
            .log(&format!("Event kind: {}", notification.event_kind()));

        let metadata = notification.metadata();
        if let Some(ref session_id) = metadata.session_id {
            self.log.log(&format!("Session ID: {}", session_id));
        }
        if let Some(ref transcript_path) = metadata.transcript_path {
            self.log.log(&format!("Transcript path: {}", transcript_path));
        }
        if let Some(active) = metadata.stop_hook_active {
            self.log.log(&format!("Stop hook active: {}", active));
        }

        notification
    }
}

/// Apply the per-event interpretation rules to a decoded payload
pub fn interpret(payload: HookPayload) -> ResolvedNotification {
    let notification = match payload.hook_event_name.as_deref() {
        None => ResolvedNotification::new(
            payload.title().unwrap_or(TOOL_NAME),
            payload.message().unwrap_or(MANUAL_MESSAGE),
            EventKind::Manual,
        ),
        Some(name) => match EventKind::from_hook_event_name(name) {
            EventKind::Notification => ResolvedNotification::new(
                TOOL_NAME,
                payload.message().unwrap_or("Notification"),
                EventKind::Notification,
            ),
            EventKind::Stop => {
                let message = if payload.stop_hook_active == Some(true) {
                    STOP_ACTIVE_MESSAGE
                } else {
                    STOP_MESSAGE
                };
                ResolvedNotification::new(TOOL_NAME, message, EventKind::Stop)
            }
            kind => {
                let message = payload
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Event: {}", kind));
                ResolvedNotification::new(TOOL_NAME, message, kind)
            }
        },
    };

    notification.with_metadata(HookMetadata {
        session_id: payload.session_id,
        transcript_path: payload.transcript_path,
        stop_hook_active: payload.stop_hook_active,
    })
}
