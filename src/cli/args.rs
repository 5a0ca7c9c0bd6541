//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::BackendKind;

/// HookNotify - desktop notifications for coding-assistant hook events
#[derive(Parser, Debug)]
#[command(name = "hook-notify")]
#[command(version)]
#[command(about = "Show a desktop notification for a hook event read from stdin or --payload")]
#[command(long_about = None)]
pub struct Cli {
    /// Hook payload JSON; takes priority over piped stdin
    #[arg(short = 'p', long, value_name = "JSON")]
    pub payload: Option<String>,

    /// Force the notification title
    #[arg(short = 't', long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Force the notification message
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Append diagnostic lines to this file
    #[arg(short = 'l', long, value_name = "PATH", env = "HOOK_NOTIFY_LOG_PATH")]
    pub log_path: Option<String>,

    /// Delivery backend to try; repeat to set the fallback order
    #[arg(short = 'b', long = "backend", value_name = "BACKEND")]
    pub backends: Vec<BackendArg>,

    /// Application identity shown with the notification
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    NotifyRust,
    NotifySend,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::NotifyRust => BackendKind::NotifyRust,
            BackendArg::NotifySend => BackendKind::NotifySend,
        }
    }
}

/// Resolved run options, built once at process entry
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub payload: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub log_path: Option<String>,
    pub app_name: String,
    pub backends: Vec<BackendKind>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["log_path", "app_name", "backends"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["hook-notify"]).unwrap();
        assert!(cli.payload.is_none());
        assert!(cli.title.is_none());
        assert!(cli.message.is_none());
        assert!(cli.backends.is_empty());
        assert!(cli.app_name.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_payload_and_overrides() {
        let cli = Cli::parse_from([
            "hook-notify",
            "-p",
            r#"{"hook_event_name":"Stop"}"#,
            "-t",
            "Build",
            "--message",
            "Done",
        ]);
        assert_eq!(cli.payload.as_deref(), Some(r#"{"hook_event_name":"Stop"}"#));
        assert_eq!(cli.title.as_deref(), Some("Build"));
        assert_eq!(cli.message.as_deref(), Some("Done"));
    }

    #[test]
    fn cli_parses_log_path() {
        let cli = Cli::parse_from(["hook-notify", "--log-path", "/tmp/n.log"]);
        assert_eq!(cli.log_path.as_deref(), Some("/tmp/n.log"));
    }

    #[test]
    fn cli_parses_backend_order() {
        let cli = Cli::parse_from(["hook-notify", "-b", "notify-send", "--backend", "notify-rust"]);
        assert_eq!(cli.backends, vec![BackendArg::NotifySend, BackendArg::NotifyRust]);
    }

    #[test]
    fn cli_rejects_unknown_backend() {
        assert!(Cli::try_parse_from(["hook-notify", "--backend", "growl"]).is_err());
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["hook-notify", "config", "set", "app_name", "Tool"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "app_name");
            assert_eq!(value, "Tool");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn backend_arg_converts_to_backend_kind() {
        assert_eq!(BackendKind::from(BackendArg::NotifyRust), BackendKind::NotifyRust);
        assert_eq!(BackendKind::from(BackendArg::NotifySend), BackendKind::NotifySend);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("log_path"));
        assert!(is_valid_config_key("backends"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
