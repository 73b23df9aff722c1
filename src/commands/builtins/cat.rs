use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::pipeline::StreamPipeline;
use crate::session::Session;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

pub struct CatCommand;

#[async_trait]
impl BuiltinCommand for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn arity(&self) -> usize {
        1
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        let path = session.resolve(&args[0])?;
        let pipeline = StreamPipeline::from_file(&path).await?;
        pipeline.run(session.output()).await?;
        // Blank line between the file and whatever is printed next
        session.output().write_all(b"\n\n").await?;
        Ok(())
    }
}
