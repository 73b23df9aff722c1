use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::session::Session;
use crate::system_info::{self, OsQuery};
use async_trait::async_trait;

pub struct OsCommand;

#[async_trait]
impl BuiltinCommand for OsCommand {
    fn name(&self) -> &'static str {
        "os"
    }

    fn arity(&self) -> usize {
        1
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        let query: OsQuery = args[0].parse()?;
        for line in system_info::report(query) {
            session.write_line(&line).await?;
        }
        Ok(())
    }
}
