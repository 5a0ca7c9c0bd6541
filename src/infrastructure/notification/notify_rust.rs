//! Rich notification adapter using notify-rust
//!
//! Persistent desktop notification through the platform notification
//! service. Works on Windows, macOS, and Linux.

use async_trait::async_trait;
use notify_rust::Timeout;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};
use crate::domain::config::DEFAULT_APP_NAME;

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application identity shown with the notification
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_APP_NAME)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    fn name(&self) -> &str {
        "notify-rust"
    }

    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let title = title.to_owned();
        let message = message.to_owned();
        let app_name = self.app_name.clone();
        let icon_name = icon.icon_name().to_string();

        // notify-rust operations can block, so run in spawn_blocking.
        // A panic inside the backend surfaces as a join error.
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&message)
                .icon(&icon_name)
                .timeout(Timeout::Never)
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}
