//! Streaming byte pipelines: one source, zero or more transform stages, one sink.
//!
//! Stages are chained as `AsyncRead` adaptors, so bytes are pulled through the
//! whole chain a buffer at a time and memory stays bounded regardless of file
//! size. The first error from any stage ends the run and is returned to the
//! caller; nothing written to the sink before that point is rolled back.

use crate::errors::ShellResult;
use async_compression::tokio::bufread::{BrotliDecoder, BrotliEncoder};
use sha2::Digest;
use std::io;
use std::path::Path;
use std::pin::Pin;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Read buffer size for each stage
pub const CHUNK_SIZE: usize = 64 * 1024;

pub type ByteStream = Pin<Box<dyn AsyncRead + Send>>;

/// A stage that rewrites the byte stream on its way to the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Encode into a Brotli stream
    Compress,
    /// Decode a Brotli stream
    Decompress,
}

impl Transform {
    fn attach(self, input: ByteStream) -> ByteStream {
        let buffered = BufReader::with_capacity(CHUNK_SIZE, input);
        match self {
            Transform::Compress => Box::pin(BrotliEncoder::new(buffered)),
            Transform::Decompress => Box::pin(BrotliDecoder::new(buffered)),
        }
    }
}

pub struct StreamPipeline {
    source: ByteStream,
    stages: Vec<Transform>,
}

impl StreamPipeline {
    pub fn new(source: impl AsyncRead + Send + 'static) -> Self {
        Self {
            source: Box::pin(source),
            stages: Vec::new(),
        }
    }

    /// Open a file as the pipeline source
    ///
    /// Directories are rejected here, before any sink exists; some platforms
    /// open them successfully and only fail on the first read.
    pub async fn from_file(path: &Path) -> ShellResult<Self> {
        let file = File::open(path).await?;
        if file.metadata().await?.is_dir() {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "source is a directory").into(),
            );
        }
        Ok(Self::new(file))
    }

    /// Append a transform stage
    pub fn through(mut self, stage: Transform) -> Self {
        self.stages.push(stage);
        self
    }

    fn into_stream(self) -> ByteStream {
        self.stages
            .into_iter()
            .fold(self.source, |stream, stage| stage.attach(stream))
    }

    /// Drive the chain into `sink` and flush it. Returns the bytes written.
    pub async fn run<W>(self, sink: &mut W) -> ShellResult<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut stream = self.into_stream();
        let written = tokio::io::copy(&mut stream, sink).await?;
        sink.flush().await?;
        Ok(written)
    }

    /// Drive the chain into a file created (or truncated) at `path`
    pub async fn run_to_file(self, path: &Path) -> ShellResult<u64> {
        let mut file = File::create(path).await?;
        let written = self.run(&mut file).await?;
        file.sync_all().await?;
        Ok(written)
    }

    /// Drive the chain into a digest accumulator instead of a sink
    pub async fn digest<D: Digest>(self) -> ShellResult<Vec<u8>> {
        let mut stream = self.into_stream();
        let mut hasher = D::new();
        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            let n = stream.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(hasher.finalize().to_vec())
    }
}
