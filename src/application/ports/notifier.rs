//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::EventKind;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Notification icon types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIcon {
    Info,
    Success,
}

impl NotificationIcon {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Info => "dialog-information",
            Self::Success => "dialog-ok",
        }
    }

    /// Pick the icon for an event kind
    pub fn for_event(kind: &EventKind) -> Self {
        match kind {
            EventKind::Stop => Self::Success,
            _ => Self::Info,
        }
    }
}

/// Port for a single notification delivery backend.
///
/// Implementations must report every failure through the returned
/// `Result`, including missing platform support, so the dispatcher can
/// move on to the next backend.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Backend name used in progress and log lines
    fn name(&self) -> &str;

    /// Show a desktop notification.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `message` - The notification body
    /// * `icon` - The icon to display
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(title, message, icon).await
    }
}
