//! Terminal client entry point.
mod app;
mod config;
mod input;
mod presentation;
mod save;
mod screens;
mod session;

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;

use app::App;
use config::ClientConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _log_guard = init_tracing(config.log_dir.as_deref());

    App::new(config)?.run()
}

/// Logs go to stderr by default; a log directory redirects them to a file
/// so they do not fight the TUI for the terminal.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = || {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::INFO.into())
    };

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, "ringside.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}
