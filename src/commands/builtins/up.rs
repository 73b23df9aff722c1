use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::session::Session;
use async_trait::async_trait;

pub struct UpCommand;

#[async_trait]
impl BuiltinCommand for UpCommand {
    fn name(&self) -> &'static str {
        "up"
    }

    async fn execute(&self, session: &mut Session, _args: &[String]) -> ShellResult<()> {
        session.go_up();
        Ok(())
    }
}
