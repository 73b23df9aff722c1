use std::io;
use thiserror::Error;

/// Error type for shell operations
///
/// Only `InvalidInput` and `OperationFailed` ever reach the user; both are
/// reported as a single line and the session carries on.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Malformed command, missing arguments or an unknown selector
    #[error("Invalid input")]
    InvalidInput,

    /// Any filesystem or stream-stage failure
    #[error("Operation failed")]
    OperationFailed(#[from] io::Error),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Interrupted")]
    Interrupted,
}

impl ShellError {
    /// Underlying cause, if the error carries one
    pub fn cause(&self) -> Option<&io::Error> {
        match self {
            ShellError::OperationFailed(e) => Some(e),
            _ => None,
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
