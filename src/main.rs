//! HookNotify CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use hook_notify::cli::{
    app::{load_merged_config, run_notify, EXIT_ERROR},
    args::{Cli, Commands, RunOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use hook_notify::domain::config::{AppConfig, BackendKind};
use hook_notify::infrastructure::XdgConfigStore;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("HOOK_NOTIFY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        log_path: cli.log_path.clone(),
        app_name: cli.app_name.clone(),
        backends: if cli.backends.is_empty() {
            None
        } else {
            Some(cli.backends.iter().copied().map(BackendKind::from).collect())
        },
    };

    let config = load_merged_config(&store, cli_config).await;

    let options = RunOptions {
        payload: cli.payload,
        title: cli.title,
        message: cli.message,
        log_path: config.log_path_or_none().map(str::to_string),
        app_name: config.app_name_or_default().to_string(),
        backends: config.backends_or_default(),
    };

    run_notify(options).await
}
