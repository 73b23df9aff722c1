use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::session::Session;
use async_trait::async_trait;

pub struct RnCommand;

#[async_trait]
impl BuiltinCommand for RnCommand {
    fn name(&self) -> &'static str {
        "rn"
    }

    fn arity(&self) -> usize {
        2
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        let from = session.resolve(&args[0])?;
        let to = session.resolve(&args[1])?;
        tokio::fs::rename(&from, &to).await?;
        Ok(())
    }
}
