use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::hash;
use crate::session::Session;
use async_trait::async_trait;

pub struct HashCommand;

#[async_trait]
impl BuiltinCommand for HashCommand {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn arity(&self) -> usize {
        1
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        let path = session.resolve(&args[0])?;
        let digest = hash::sha256_hex(&path).await?;
        session.write_line(&digest).await
    }
}
