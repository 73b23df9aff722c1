use crate::errors::ShellResult;
use crate::session::Session;
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// Trait that all builtin commands must implement
#[async_trait]
pub trait BuiltinCommand: Send + Sync {
    /// The command name (e.g., "ls", "cp", "hash")
    fn name(&self) -> &'static str;

    /// Number of required arguments
    fn arity(&self) -> usize {
        0
    }

    /// Execute the command; `args` holds exactly `arity()` arguments
    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()>;

    /// Whether this command ends the session
    fn exits(&self) -> bool {
        false
    }
}

/// Central registry for all builtin commands
pub struct BuiltinRegistry {
    commands: Vec<Box<dyn BuiltinCommand>>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn register<C: BuiltinCommand + 'static>(&mut self, cmd: C) {
        self.commands.push(Box::new(cmd));
    }

    pub fn find(&self, name: &str) -> Option<&dyn BuiltinCommand> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Get all builtin command names (for completion)
    pub fn builtin_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global registry instance
pub static BUILTINS: Lazy<BuiltinRegistry> = Lazy::new(|| {
    let mut registry = BuiltinRegistry::new();

    // Register all builtins here - SINGLE POINT OF REGISTRATION
    registry.register(super::builtins::UpCommand);
    registry.register(super::builtins::CdCommand);
    registry.register(super::builtins::LsCommand);
    registry.register(super::builtins::CatCommand);
    registry.register(super::builtins::AddCommand);
    registry.register(super::builtins::RnCommand);
    registry.register(super::builtins::CpCommand);
    registry.register(super::builtins::MvCommand);
    registry.register(super::builtins::RmCommand);
    registry.register(super::builtins::OsCommand);
    registry.register(super::builtins::HashCommand);
    registry.register(super::builtins::CompressCommand);
    registry.register(super::builtins::DecompressCommand);
    registry.register(super::builtins::ExitCommand);

    registry
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_is_registered_once() {
        let mut names = BUILTINS.builtin_names();
        assert_eq!(names.len(), 14);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn arities_match_the_command_table() {
        let expected = [
            ("up", 0),
            ("cd", 1),
            ("ls", 0),
            ("cat", 1),
            ("add", 1),
            ("rn", 2),
            ("cp", 2),
            ("mv", 2),
            ("rm", 1),
            ("os", 1),
            ("hash", 1),
            ("compress", 2),
            ("decompress", 2),
            (".exit", 0),
        ];
        for (name, arity) in expected {
            let cmd = BUILTINS.find(name).unwrap_or_else(|| panic!("{name} missing"));
            assert_eq!(cmd.arity(), arity, "{name}");
        }
        assert!(BUILTINS.find(".exit").unwrap().exits());
        assert!(BUILTINS.find("pwd").is_none());
    }
}
