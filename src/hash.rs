use crate::errors::ShellResult;
use crate::pipeline::StreamPipeline;
use sha2::Sha256;
use std::path::Path;

/// Lowercase hex SHA-256 digest of the file at `path`, streamed in chunks
pub async fn sha256_hex(path: &Path) -> ShellResult<String> {
    let digest = StreamPipeline::from_file(path)
        .await?
        .digest::<Sha256>()
        .await?;
    Ok(hex::encode(digest))
}
