use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::session::Session;
use async_trait::async_trait;

pub struct RmCommand;

#[async_trait]
impl BuiltinCommand for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn arity(&self) -> usize {
        1
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        let path = session.resolve(&args[0])?;
        tokio::fs::remove_file(&path).await?;
        Ok(())
    }
}
