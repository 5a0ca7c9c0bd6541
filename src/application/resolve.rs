//! Input resolver use case
//!
//! Picks the payload source for this invocation, runs it through the
//! parser and applies force overrides.

use crate::domain::ResolvedNotification;

use super::parse::PayloadParser;
use super::ports::{InputSource, SharedLog};

/// Where the payload for this invocation came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Payload passed explicitly as an argument
    ExplicitPayload(String),
    /// Payload read from piped standard input
    PipedBytes(String),
    /// Nothing usable was supplied
    Absent,
}

/// Input parameters for the resolver
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Explicit payload argument
    pub payload: Option<String>,
    /// Force override for the title
    pub title: Option<String>,
    /// Force override for the message
    pub message: Option<String>,
}

/// Resolves the notification for one invocation
pub struct InputResolver<I>
where
    I: InputSource,
{
    input: I,
    parser: PayloadParser,
    log: SharedLog,
}

impl<I> InputResolver<I>
where
    I: InputSource,
{
    /// Create a new resolver
    pub fn new(input: I, log: SharedLog) -> Self {
        Self {
            input,
            parser: PayloadParser::new(log.clone()),
            log,
        }
    }

    /// Choose the payload source.
    ///
    /// Priority: non-empty explicit payload, then non-blank piped input,
    /// then nothing. Piped input is not read at all when an explicit
    /// payload is given, even one that is only whitespace. Read failures
    /// count as no input.
    pub async fn select_input(&self, explicit: Option<&str>) -> RawInput {
        if let Some(payload) = explicit.filter(|p| !p.is_empty()) {
            return RawInput::ExplicitPayload(payload.to_string());
        }

        if !self.input.is_attached() {
            return RawInput::Absent;
        }

        match self.input.read_to_end().await {
            Ok(text) if !text.trim().is_empty() => RawInput::PipedBytes(text),
            Ok(_) => RawInput::Absent,
            Err(e) => {
                self.log.log(&format!("{}, continuing without it", e));
                RawInput::Absent
            }
        }
    }

    /// Resolve the final notification
    pub async fn resolve(&self, options: &ResolveOptions) -> ResolvedNotification {
        let raw = self.select_input(options.payload.as_deref()).await;

        let notification = match raw {
            RawInput::ExplicitPayload(ref text) => {
                self.log.log(&format!("Using explicit payload: {}", text.trim()));
                self.parser.parse(text)
            }
            RawInput::PipedBytes(ref text) => {
                self.log.log(&format!("Using piped input: {}", text.trim()));
                self.parser.parse(text)
            }
            RawInput::Absent => {
                self.log.log("No input received, using defaults");
                ResolvedNotification::builtin_default()
            }
        };

        let title = options.title.as_deref().filter(|t| !t.is_empty());
        let message = options.message.as_deref().filter(|m| !m.is_empty());
        if let Some(title) = title {
            self.log.log(&format!("Title override: {}", title));
        }
        if let Some(message) = message {
            self.log.log(&format!("Message override: {}", message));
        }

        let notification = notification.with_overrides(title, message);
        self.log.log(&format!(
            "Final notification - Title: {}, Message: {}",
            notification.title(),
            notification.message()
        ));

        notification
    }
}
