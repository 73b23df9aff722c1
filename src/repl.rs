use crate::commands::{dispatch, Flow};
use crate::completion::ShellCompleter;
use crate::errors::{ShellError, ShellResult};
use crate::session::Session;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{ColorMode, Config, Editor};
use std::sync::mpsc as std_mpsc;
use std::thread;
use tokio::sync::mpsc;
use tracing::debug;

pub const PROMPT: &str = "$ ";

/// One unit of input from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// End of input (Ctrl-D or a closed stdin)
    Eof,
    /// Ctrl-C at the prompt
    Interrupted,
}

/// Reads lines with rustyline on a dedicated thread.
///
/// The thread only prompts when asked, so the prompt for the next line never
/// lands in the middle of the previous command's output.
pub struct LineReader {
    wake: std_mpsc::Sender<()>,
    lines: mpsc::Receiver<ShellResult<Input>>,
}

impl LineReader {
    pub fn spawn() -> Self {
        let (wake_tx, wake_rx) = std_mpsc::channel::<()>();
        let (line_tx, line_rx) = mpsc::channel(1);

        thread::spawn(move || {
            let mut editor = match build_editor() {
                Ok(editor) => editor,
                Err(e) => {
                    let _ = line_tx.blocking_send(Err(e));
                    return;
                }
            };

            while wake_rx.recv().is_ok() {
                let input = read_input(&mut editor);
                let finished = !matches!(input, Ok(Input::Line(_)));
                if line_tx.blocking_send(input).is_err() || finished {
                    break;
                }
            }
        });

        Self {
            wake: wake_tx,
            lines: line_rx,
        }
    }

    /// Prompt for and wait on the next line
    pub async fn next_input(&mut self) -> ShellResult<Input> {
        // The reader thread may already be gone after a build error it reported
        let _ = self.wake.send(());
        self.lines.recv().await.unwrap_or(Ok(Input::Eof))
    }
}

fn build_editor() -> ShellResult<Editor<ShellCompleter, DefaultHistory>> {
    let config = Config::builder()
        .color_mode(ColorMode::Enabled)
        .auto_add_history(true)
        .build();

    let mut rl = Editor::with_config(config).map_err(|e| {
        ShellError::InputError(format!("Failed to create readline editor: {}", e))
    })?;

    rl.set_helper(Some(ShellCompleter));
    rl.set_completion_type(rustyline::CompletionType::List);
    Ok(rl)
}

/// Read the next non-blank line
fn read_input(rl: &mut Editor<ShellCompleter, DefaultHistory>) -> ShellResult<Input> {
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    return Ok(Input::Line(trimmed.to_string()));
                }
            }
            Err(ReadlineError::Interrupted) => return Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => return Ok(Input::Eof),
            Err(e) => {
                return Err(ShellError::InputError(format!("Readline error: {}", e)));
            }
        }
    }
}

/// Feed lines from `reader` to the dispatcher until the user leaves.
///
/// Each command runs to completion before the next line is requested.
pub async fn run_loop(session: &mut Session, reader: &mut LineReader) -> ShellResult<()> {
    loop {
        match reader.next_input().await? {
            Input::Line(line) => {
                if dispatch(session, &line).await? == Flow::Exit {
                    return Ok(());
                }
            }
            Input::Eof => {
                debug!("end of input");
                return Ok(());
            }
            Input::Interrupted => return Err(ShellError::Interrupted),
        }
    }
}
