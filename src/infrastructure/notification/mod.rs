//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (rich)
//! and the notify-send executable (legacy fallback).

mod notify_rust;
mod notify_send;

pub use self::notify_rust::NotifyRustNotifier;
pub use self::notify_send::{NotifySendNotifier, EXPIRE_TIME_MS};

use crate::application::ports::Notifier;
use crate::domain::config::BackendKind;

/// Create one notifier per backend, in the given fallback order
pub fn create_notifiers(order: &[BackendKind], app_name: &str) -> Vec<Box<dyn Notifier>> {
    order
        .iter()
        .map(|kind| match kind {
            BackendKind::NotifyRust => {
                Box::new(NotifyRustNotifier::with_app_name(app_name)) as Box<dyn Notifier>
            }
            BackendKind::NotifySend => Box::new(NotifySendNotifier::with_app_name(app_name)),
        })
        .collect()
}
