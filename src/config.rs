use crate::cli::Args;
use std::path::PathBuf;

/// Startup settings for one session
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub username: String,
    pub start_dir: PathBuf,
}

impl ShellConfig {
    /// Sessions start in the user's home directory, or the process working
    /// directory when no home can be determined.
    pub fn from_args(args: Args) -> Self {
        let start_dir = dirs::home_dir()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR_STR));
        Self {
            username: args.name,
            start_dir,
        }
    }

    pub fn welcome(&self) -> String {
        format!("Welcome to the File Manager, {}!", self.username)
    }

    pub fn farewell(&self) -> String {
        format!("Thank you for using File Manager, {}, goodbye!", self.username)
    }
}
