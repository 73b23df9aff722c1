use crate::codec;
use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::session::Session;
use async_trait::async_trait;

pub struct CompressCommand;

#[async_trait]
impl BuiltinCommand for CompressCommand {
    fn name(&self) -> &'static str {
        "compress"
    }

    fn arity(&self) -> usize {
        2
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        let src = session.resolve(&args[0])?;
        let dst = session.resolve(&args[1])?;
        codec::compress(&src, &dst).await?;
        Ok(())
    }
}

pub struct DecompressCommand;

#[async_trait]
impl BuiltinCommand for DecompressCommand {
    fn name(&self) -> &'static str {
        "decompress"
    }

    fn arity(&self) -> usize {
        2
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        let src = session.resolve(&args[0])?;
        let dst = session.resolve(&args[1])?;
        codec::decompress(&src, &dst).await?;
        Ok(())
    }
}
