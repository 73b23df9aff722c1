use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::session::Session;
use async_trait::async_trait;
use tokio::fs::OpenOptions;

pub struct AddCommand;

#[async_trait]
impl BuiltinCommand for AddCommand {
    fn name(&self) -> &'static str {
        "add"
    }

    fn arity(&self) -> usize {
        1
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        let path = session.resolve(&args[0])?;
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        Ok(())
    }
}
