use crate::errors::{ShellError, ShellResult};
use crate::paths;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Output stream shared by every command in a session
pub type ShellOutput = Box<dyn AsyncWrite + Unpin + Send>;

/// Per-session state handed to every command
///
/// `cwd` is always absolute. It is only changed through [`Session::change_dir`]
/// and [`Session::go_up`].
pub struct Session {
    cwd: PathBuf,
    out: ShellOutput,
}

impl Session {
    pub fn new(start_dir: impl AsRef<Path>, out: ShellOutput) -> ShellResult<Self> {
        let cwd = std::path::absolute(start_dir.as_ref())?;
        Ok(Self {
            cwd: paths::resolve(&cwd, "."),
            out,
        })
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a command argument against the current directory
    pub fn resolve(&self, input: &str) -> ShellResult<PathBuf> {
        if input.is_empty() {
            return Err(ShellError::InvalidInput);
        }
        Ok(paths::resolve(&self.cwd, input))
    }

    pub fn change_dir(&mut self, input: &str) -> ShellResult<()> {
        self.cwd = self.resolve(input)?;
        Ok(())
    }

    /// Move to the parent directory; a no-op at a filesystem root
    pub fn go_up(&mut self) {
        self.cwd = paths::parent_or_root(&self.cwd);
    }

    pub fn output(&mut self) -> &mut ShellOutput {
        &mut self.out
    }

    pub async fn write_line(&mut self, line: &str) -> ShellResult<()> {
        self.out.write_all(line.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        Ok(())
    }

    pub async fn flush(&mut self) -> ShellResult<()> {
        self.out.flush().await?;
        Ok(())
    }

    /// Print the status line reported after every command
    pub async fn report_location(&mut self) -> ShellResult<()> {
        let line = format!("You are currently in {}", self.cwd.display());
        self.write_line(&line).await?;
        self.flush().await
    }
}
