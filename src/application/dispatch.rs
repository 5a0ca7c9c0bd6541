//! Notification dispatcher
//!
//! Walks the ordered backend list and stops at the first backend that
//! delivers. No backend is tried twice.

use crate::domain::ResolvedNotification;

use super::ports::{NotificationError, NotificationIcon, Notifier, SharedLog};

/// Callbacks for per-backend progress reporting
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct DispatchCallbacks {
    /// Called with the backend name when a backend delivers
    pub on_delivered: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called with the backend name and error when a backend fails
    pub on_failed: Option<Box<dyn Fn(&str, &NotificationError) + Send + Sync>>,
}

/// Fallback chain over delivery backends
pub struct NotificationDispatcher {
    backends: Vec<Box<dyn Notifier>>,
    log: SharedLog,
}

impl NotificationDispatcher {
    /// Create a dispatcher over backends in fallback order
    pub fn new(backends: Vec<Box<dyn Notifier>>, log: SharedLog) -> Self {
        Self { backends, log }
    }

    /// Names of the backends, in the order they are tried
    fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Try each backend in order until one succeeds.
    ///
    /// Returns true if some backend delivered the notification.
    pub async fn dispatch(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
        callbacks: &DispatchCallbacks,
    ) -> bool {
        tracing::debug!(order = ?self.backend_names(), "dispatching notification");

        for backend in &self.backends {
            let name = backend.name();
            self.log.log(&format!("Trying {} notification", name));

            match backend.notify(title, message, icon).await {
                Ok(()) => {
                    self.log.log(&format!("{} notification sent successfully", name));
                    if let Some(ref cb) = callbacks.on_delivered {
                        cb(name);
                    }
                    return true;
                }
                Err(e) => {
                    tracing::debug!(backend = name, error = %e, "backend failed");
                    self.log.log(&format!("{} notification failed: {}", name, e));
                    if let Some(ref cb) = callbacks.on_failed {
                        cb(name, &e);
                    }
                }
            }
        }

        self.log.log("All notification methods failed");
        false
    }

    /// Deliver a resolved notification, choosing the icon from its event kind
    pub async fn deliver(
        &self,
        notification: &ResolvedNotification,
        callbacks: &DispatchCallbacks,
    ) -> bool {
        let icon = NotificationIcon::for_event(notification.event_kind());
        self.dispatch(notification.title(), notification.message(), icon, callbacks)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::DiagnosticLog;
    use crate::domain::EventKind;

    struct NullLog;

    impl DiagnosticLog for NullLog {
        fn log(&self, _message: &str) {}
    }

    /// Backend mock that counts calls and returns a fixed outcome
    struct MockNotifier {
        name: &'static str,
        succeed: bool,
        calls: Arc<AtomicUsize>,
        last_icon: Arc<Mutex<Option<NotificationIcon>>>,
    }

    impl MockNotifier {
        fn new(name: &'static str, succeed: bool) -> Self {
            Self {
                name,
                succeed,
                calls: Arc::new(AtomicUsize::new(0)),
                last_icon: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        fn name(&self) -> &str {
            self.name
        }

        async fn notify(
            &self,
            _title: &str,
            _message: &str,
            icon: NotificationIcon,
        ) -> Result<(), NotificationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_icon.lock().unwrap() = Some(icon);
            if self.succeed {
                Ok(())
            } else {
                Err(NotificationError::SendFailed(format!("{} unavailable", self.name)))
            }
        }
    }

    fn dispatcher(backends: Vec<MockNotifier>) -> NotificationDispatcher {
        let backends = backends
            .into_iter()
            .map(|b| Box::new(b) as Box<dyn Notifier>)
            .collect();
        NotificationDispatcher::new(backends, Arc::new(NullLog))
    }

    #[tokio::test]
    async fn first_success_stops_the_chain() {
        let rich = MockNotifier::new("rich", true);
        let legacy = MockNotifier::new("legacy", true);
        let (rich_calls, legacy_calls) = (rich.calls.clone(), legacy.calls.clone());

        let delivered = dispatcher(vec![rich, legacy])
            .dispatch("t", "m", NotificationIcon::Info, &DispatchCallbacks::default())
            .await;

        assert!(delivered);
        assert_eq!(rich_calls.load(Ordering::SeqCst), 1);
        assert_eq!(legacy_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn falls_back_when_first_backend_fails() {
        let rich = MockNotifier::new("rich", false);
        let legacy = MockNotifier::new("legacy", true);
        let extra = MockNotifier::new("extra", true);
        let (rich_calls, legacy_calls, extra_calls) =
            (rich.calls.clone(), legacy.calls.clone(), extra.calls.clone());

        let failed = Arc::new(Mutex::new(Vec::new()));
        let delivered_by = Arc::new(Mutex::new(None));
        let callbacks = DispatchCallbacks {
            on_delivered: Some(Box::new({
                let delivered_by = delivered_by.clone();
                move |name: &str| *delivered_by.lock().unwrap() = Some(name.to_string())
            })),
            on_failed: Some(Box::new({
                let failed = failed.clone();
                move |name: &str, _e: &NotificationError| {
                    failed.lock().unwrap().push(name.to_string())
                }
            })),
        };

        let delivered = dispatcher(vec![rich, legacy, extra])
            .dispatch("t", "m", NotificationIcon::Info, &callbacks)
            .await;

        assert!(delivered);
        assert_eq!(rich_calls.load(Ordering::SeqCst), 1);
        assert_eq!(legacy_calls.load(Ordering::SeqCst), 1);
        assert_eq!(extra_calls.load(Ordering::SeqCst), 0);
        assert_eq!(*failed.lock().unwrap(), vec!["rich".to_string()]);
        assert_eq!(delivered_by.lock().unwrap().as_deref(), Some("legacy"));
    }

    #[tokio::test]
    async fn all_backends_failing_reports_failure() {
        let rich = MockNotifier::new("rich", false);
        let legacy = MockNotifier::new("legacy", false);
        let (rich_calls, legacy_calls) = (rich.calls.clone(), legacy.calls.clone());

        let delivered = dispatcher(vec![rich, legacy])
            .dispatch("t", "m", NotificationIcon::Info, &DispatchCallbacks::default())
            .await;

        assert!(!delivered);
        assert_eq!(rich_calls.load(Ordering::SeqCst), 1);
        assert_eq!(legacy_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_chain_fails() {
        let delivered = dispatcher(vec![])
            .dispatch("t", "m", NotificationIcon::Info, &DispatchCallbacks::default())
            .await;
        assert!(!delivered);
    }

    #[tokio::test]
    async fn deliver_picks_icon_from_event_kind() {
        let rich = MockNotifier::new("rich", true);
        let last_icon = rich.last_icon.clone();

        let notification = ResolvedNotification::new("Claude Code", "Session completed", EventKind::Stop);
        assert!(
            dispatcher(vec![rich])
                .deliver(&notification, &DispatchCallbacks::default())
                .await
        );
        assert_eq!(*last_icon.lock().unwrap(), Some(NotificationIcon::Success));
    }

    #[test]
    fn backend_names_in_order() {
        let d = dispatcher(vec![
            MockNotifier::new("rich", true),
            MockNotifier::new("legacy", true),
        ]);
        assert_eq!(d.backend_names(), vec!["rich", "legacy"]);
    }
}
