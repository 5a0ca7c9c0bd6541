//! Legacy notification adapter using the notify-send executable

use std::ffi::OsString;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};
use crate::domain::config::DEFAULT_APP_NAME;

/// How long the transient notification stays visible
pub const EXPIRE_TIME_MS: u32 = 5000;

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Application name for notifications
    app_name: String,
    /// Executable to run
    program: OsString,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_APP_NAME)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            program: OsString::from("notify-send"),
        }
    }

    fn args(&self, title: &str, message: &str, icon: NotificationIcon) -> Vec<String> {
        vec![
            "--app-name".to_string(),
            self.app_name.clone(),
            "--icon".to_string(),
            icon.icon_name().to_string(),
            "--expire-time".to_string(),
            EXPIRE_TIME_MS.to_string(),
            "--hint".to_string(),
            "int:transient:1".to_string(),
            // Titles starting with '-' must not be read as options
            "--".to_string(),
            title.to_string(),
            message.to_string(),
        ]
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    fn name(&self) -> &str {
        "notify-send"
    }

    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let status = Command::new(&self.program)
            .args(self.args(title, message, icon))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NotifySendNotFound
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_carry_fixed_expiry_and_transient_hint() {
        let notifier = NotifySendNotifier::with_app_name("TestApp");
        let args = notifier.args("Title", "Body", NotificationIcon::Info);

        assert_eq!(
            args,
            vec![
                "--app-name",
                "TestApp",
                "--icon",
                "dialog-information",
                "--expire-time",
                "5000",
                "--hint",
                "int:transient:1",
                "--",
                "Title",
                "Body",
            ]
        );
    }

    #[test]
    fn dash_title_stays_positional() {
        let notifier = NotifySendNotifier::new();
        let args = notifier.args("-v", "--help", NotificationIcon::Success);
        let sep = args.iter().position(|a| a == "--").unwrap();
        assert_eq!(args[sep + 1..].to_vec(), vec!["-v", "--help"]);
    }

    #[tokio::test]
    async fn missing_binary_is_reported() {
        let notifier = NotifySendNotifier {
            app_name: "TestApp".to_string(),
            program: OsString::from("hook-notify-test-no-such-binary"),
        };

        let err = notifier
            .notify("t", "m", NotificationIcon::Info)
            .await
            .unwrap_err();
        assert!(matches!(err, NotificationError::NotifySendNotFound));
    }
}
