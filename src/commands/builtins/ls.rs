use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::listing;
use crate::session::Session;
use async_trait::async_trait;

pub struct LsCommand;

#[async_trait]
impl BuiltinCommand for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, session: &mut Session, _args: &[String]) -> ShellResult<()> {
        let entries = listing::list(session.cwd()).await?;
        for line in listing::render_table(&entries) {
            session.write_line(&line).await?;
        }
        Ok(())
    }
}
