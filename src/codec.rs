//! File-to-file copy and Brotli compression built on [`StreamPipeline`].

use crate::errors::ShellResult;
use crate::pipeline::{StreamPipeline, Transform};
use std::io;
use std::path::Path;

/// Stream `src` into `dst` through `stages`.
///
/// The source is opened before the destination is created, so a missing
/// source leaves no destination behind. A destination that is the same file
/// as the source, through any path, link or alias, is refused.
pub async fn transfer(src: &Path, dst: &Path, stages: &[Transform]) -> ShellResult<u64> {
    let source = StreamPipeline::from_file(src).await?;

    if tokio::fs::try_exists(dst).await? && same_file::is_same_file(src, dst)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        )
        .into());
    }

    let pipeline = stages.iter().fold(source, |p, stage| p.through(*stage));
    pipeline.run_to_file(dst).await
}

pub async fn copy(src: &Path, dst: &Path) -> ShellResult<u64> {
    transfer(src, dst, &[]).await
}

/// Copy, then remove the source once the destination is fully written
pub async fn move_file(src: &Path, dst: &Path) -> ShellResult<u64> {
    let written = copy(src, dst).await?;
    tokio::fs::remove_file(src).await?;
    Ok(written)
}

pub async fn compress(src: &Path, dst: &Path) -> ShellResult<u64> {
    transfer(src, dst, &[Transform::Compress]).await
}

pub async fn decompress(src: &Path, dst: &Path) -> ShellResult<u64> {
    transfer(src, dst, &[Transform::Decompress]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Read;

    #[tokio::test]
    async fn copy_duplicates_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let (a, b) = (tmp.path().join("a.txt"), tmp.path().join("b.txt"));
        std::fs::write(&a, b"payload").unwrap();

        copy(&a, &b).await.unwrap();

        assert_eq!(std::fs::read(&a).unwrap(), b"payload");
        assert_eq!(std::fs::read(&b).unwrap(), b"payload");
    }

    #[tokio::test]
    async fn move_removes_source() {
        let tmp = tempfile::tempdir().unwrap();
        let (a, b) = (tmp.path().join("a.txt"), tmp.path().join("b.txt"));
        std::fs::write(&a, b"payload").unwrap();

        move_file(&a, &b).await.unwrap();

        assert!(!a.exists());
        assert_eq!(std::fs::read(&b).unwrap(), b"payload");
    }

    #[tokio::test]
    async fn move_of_missing_source_creates_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let (a, b) = (tmp.path().join("a.txt"), tmp.path().join("b.txt"));

        assert!(move_file(&a, &b).await.is_err());
        assert!(!b.exists());
    }

    #[tokio::test]
    async fn move_keeps_source_when_destination_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.txt");
        std::fs::write(&a, b"payload").unwrap();

        let dst = tmp.path().join("no-such-dir").join("b.txt");
        assert!(move_file(&a, &dst).await.is_err());
        assert_eq!(std::fs::read(&a).unwrap(), b"payload");
    }

    #[tokio::test]
    async fn same_path_is_refused() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.txt");
        std::fs::write(&a, b"payload").unwrap();

        assert!(copy(&a, &a).await.is_err());
        assert!(move_file(&a, &a).await.is_err());
        assert_eq!(std::fs::read(&a).unwrap(), b"payload");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlink_to_source_is_refused() {
        let tmp = tempfile::tempdir().unwrap();
        let (a, link) = (tmp.path().join("a.txt"), tmp.path().join("link.txt"));
        std::fs::write(&a, b"precious").unwrap();
        std::os::unix::fs::symlink(&a, &link).unwrap();

        assert!(copy(&link, &a).await.is_err());
        assert!(copy(&a, &link).await.is_err());
        assert!(move_file(&link, &a).await.is_err());
        assert_eq!(std::fs::read(&a).unwrap(), b"precious");
    }

    #[tokio::test]
    async fn hard_link_to_source_is_refused() {
        let tmp = tempfile::tempdir().unwrap();
        let (a, hard) = (tmp.path().join("a.txt"), tmp.path().join("hard.txt"));
        std::fs::write(&a, b"precious").unwrap();
        std::fs::hard_link(&a, &hard).unwrap();

        assert!(move_file(&hard, &a).await.is_err());
        assert!(compress(&a, &hard).await.is_err());
        assert_eq!(std::fs::read(&a).unwrap(), b"precious");
        assert_eq!(std::fs::read(&hard).unwrap(), b"precious");
    }

    #[tokio::test]
    async fn directory_source_creates_no_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let (dir, out) = (tmp.path().join("d"), tmp.path().join("out"));
        std::fs::create_dir(&dir).unwrap();

        assert!(copy(&dir, &out).await.is_err());
        assert!(move_file(&dir, &out).await.is_err());
        assert!(!out.exists());
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn compressed_output_is_standard_brotli() {
        let tmp = tempfile::tempdir().unwrap();
        let (plain, packed) = (tmp.path().join("plain"), tmp.path().join("plain.br"));
        let text = "lorem ipsum dolor sit amet ".repeat(1000);
        std::fs::write(&plain, &text).unwrap();

        compress(&plain, &packed).await.unwrap();

        let packed_bytes = std::fs::read(&packed).unwrap();
        assert!(packed_bytes.len() < text.len());
        let mut decoded = String::new();
        brotli::Decompressor::new(&packed_bytes[..], 4096)
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, text);
    }

    #[tokio::test]
    async fn decompress_rejects_garbage() {
        let tmp = tempfile::tempdir().unwrap();
        let (src, dst) = (tmp.path().join("junk.br"), tmp.path().join("out"));
        std::fs::write(&src, b"\xff\xff\xff\xff not brotli at all").unwrap();

        assert!(decompress(&src, &dst).await.is_err());
    }

    fn round_trip(bytes: &[u8]) -> Vec<u8> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let tmp = tempfile::tempdir().unwrap();
            let (plain, packed, restored) = (
                tmp.path().join("plain"),
                tmp.path().join("plain.br"),
                tmp.path().join("restored"),
            );
            std::fs::write(&plain, bytes).unwrap();
            compress(&plain, &packed).await.unwrap();
            decompress(&packed, &restored).await.unwrap();
            std::fs::read(&restored).unwrap()
        })
    }

    #[test]
    fn empty_file_round_trips() {
        assert!(round_trip(b"").is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn any_payload_round_trips(bytes in proptest::collection::vec(any::<u8>(), 0..4096)) {
            prop_assert_eq!(round_trip(&bytes), bytes);
        }
    }
}
