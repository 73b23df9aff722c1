pub mod builtins;
pub mod registry;

use crate::errors::{ShellError, ShellResult};
use crate::session::Session;
use tracing::{debug, warn};

pub use registry::{BuiltinCommand, BUILTINS};

/// One input line split into a command name and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Split on whitespace; there is no quoting
    pub fn parse(input: &str) -> Self {
        let mut words = input.split_whitespace().map(str::to_string);
        let name = words.next().unwrap_or_default();
        Self {
            name,
            args: words.collect(),
        }
    }
}

/// What the shell does after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Run one input line to completion against `session`.
///
/// Command failures are reported to the session output and never returned;
/// the only error out of here is a failure to write that output.
pub async fn dispatch(session: &mut Session, input: &str) -> ShellResult<Flow> {
    let line = CommandLine::parse(input);
    debug!(command = %line.name, args = ?line.args, "dispatching");

    let result = match BUILTINS.find(&line.name) {
        Some(cmd) if cmd.exits() => return Ok(Flow::Exit),
        Some(cmd) if line.args.len() < cmd.arity() => Err(ShellError::InvalidInput),
        Some(cmd) => cmd.execute(session, &line.args[..cmd.arity()]).await,
        None => Err(ShellError::InvalidInput),
    };

    if let Err(err) = result {
        match err.cause() {
            Some(cause) => warn!(command = %line.name, error = %cause, "operation failed"),
            None => debug!(command = %line.name, "rejected: {}", err),
        }
        session.write_line(&err.to_string()).await?;
    }

    session.report_location().await?;
    Ok(Flow::Continue)
}
