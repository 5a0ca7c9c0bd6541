//! Main app runner: resolve, dispatch, exit

use std::process::ExitCode;

use crate::application::ports::{ConfigStore, NotificationError};
use crate::application::{DispatchCallbacks, InputResolver, NotificationDispatcher, ResolveOptions};
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_diagnostic_log, create_notifiers, StdinInput};

use super::args::RunOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run one notification: resolve the input, then walk the backend chain
pub async fn run_notify(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();
    let log = create_diagnostic_log(options.log_path.as_deref());
    log.log("Notification started");

    let resolver = InputResolver::new(StdinInput::new(), log.clone());
    let notification = resolver
        .resolve(&ResolveOptions {
            payload: options.payload,
            title: options.title,
            message: options.message,
        })
        .await;

    let dispatcher = NotificationDispatcher::new(
        create_notifiers(&options.backends, &options.app_name),
        log.clone(),
    );

    let callbacks = DispatchCallbacks {
        on_delivered: Some(Box::new(move |name: &str| {
            presenter.success(&format!("Notification sent via {}", name));
        })),
        on_failed: Some(Box::new(move |name: &str, e: &NotificationError| {
            presenter.warn(&format!("{} failed: {}. Trying next method...", name, e));
        })),
    };

    if dispatcher.deliver(&notification, &callbacks).await {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        presenter.error("All notification methods failed");
        ExitCode::from(EXIT_ERROR)
    }
}

/// Load and merge configuration from file and CLI (env is folded into CLI by clap)
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load().await.unwrap_or_else(|e| {
        tracing::warn!(path = %store.path().display(), error = %e, "ignoring config file");
        AppConfig::empty()
    });

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{BackendKind, ALL_BACKENDS, DEFAULT_APP_NAME};
    use crate::infrastructure::XdgConfigStore;

    #[tokio::test]
    async fn cli_config_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "log_path = \"/from/file.log\"\napp_name = \"FileApp\"\nbackends = [\"notify-send\"]\n",
        )
        .unwrap();
        let store = XdgConfigStore::with_path(&path);

        let cli_config = AppConfig {
            log_path: Some("/from/cli.log".to_string()),
            ..Default::default()
        };
        let config = load_merged_config(&store, cli_config).await;

        assert_eq!(config.log_path_or_none(), Some("/from/cli.log"));
        assert_eq!(config.app_name_or_default(), "FileApp");
        assert_eq!(config.backends_or_default(), vec![BackendKind::NotifySend]);
    }

    #[tokio::test]
    async fn broken_config_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();
        let store = XdgConfigStore::with_path(&path);

        let config = load_merged_config(&store, AppConfig::empty()).await;
        assert_eq!(config, AppConfig::defaults());
    }

    #[tokio::test]
    async fn empty_backend_list_in_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "app_name = \"FileApp\"\nbackends = []\n").unwrap();
        let store = XdgConfigStore::with_path(&path);

        let config = load_merged_config(&store, AppConfig::empty()).await;
        assert_eq!(config.backends_or_default(), ALL_BACKENDS.to_vec());
        assert_eq!(config.app_name_or_default(), DEFAULT_APP_NAME);
    }
}
