use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::session::Session;
use async_trait::async_trait;

pub struct CdCommand;

#[async_trait]
impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn arity(&self) -> usize {
        1
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        // Existence is only checked by whichever command uses the directory next
        session.change_dir(&args[0])
    }
}
