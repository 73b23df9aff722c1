use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::session::Session;
use async_trait::async_trait;

pub struct ExitCommand;

#[async_trait]
impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        ".exit"
    }

    async fn execute(&self, _session: &mut Session, _args: &[String]) -> ShellResult<()> {
        Ok(())
    }

    fn exits(&self) -> bool {
        true
    }
}
