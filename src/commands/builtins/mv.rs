use crate::codec;
use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::session::Session;
use async_trait::async_trait;

pub struct MvCommand;

#[async_trait]
impl BuiltinCommand for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn arity(&self) -> usize {
        2
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        let src = session.resolve(&args[0])?;
        let dst = session.resolve(&args[1])?;
        codec::move_file(&src, &dst).await?;
        Ok(())
    }
}
