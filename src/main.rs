use clap::Parser;
use file_manager::cli::Args;
use file_manager::config::ShellConfig;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Missing --name is fatal before the session starts
    let args = Args::parse();

    // Diagnostics go to stderr; stdout belongs to the session
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "file_manager=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ShellConfig::from_args(args);
    tracing::debug!(start_dir = %config.start_dir.display(), "starting session");

    match file_manager::run_shell(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
