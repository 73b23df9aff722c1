pub mod cli;
pub mod codec;
pub mod commands;
pub mod completion;
pub mod config;
pub mod errors;
pub mod hash;
pub mod listing;
pub mod paths;
pub mod pipeline;
pub mod repl;
pub mod session;
pub mod system_info;

use config::ShellConfig;
use errors::{ShellError, ShellResult};
use repl::{run_loop, LineReader};
use session::Session;
use tracing::info;

/// Main entry point for the file manager session
pub async fn run_shell(config: ShellConfig) -> ShellResult<()> {
    let mut session = Session::new(&config.start_dir, Box::new(tokio::io::stdout()))?;
    let mut reader = LineReader::spawn();

    session.write_line(&config.welcome()).await?;
    session.report_location().await?;

    let outcome = tokio::select! {
        result = run_loop(&mut session, &mut reader) => result,
        _ = tokio::signal::ctrl_c() => Err(ShellError::Interrupted),
    };

    let outcome = match outcome {
        Err(ShellError::Interrupted) => {
            info!("interrupted");
            Ok(())
        }
        other => other,
    };

    session.write_line(&config.farewell()).await?;
    session.flush().await?;
    outcome
}
