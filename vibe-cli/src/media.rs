use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use vibe_core::ImageBlob;

/// Читает файл асинхронно и кодирует его в data URL.
pub(crate) async fn load_image(path: &Path, limit: usize) -> Result<ImageBlob> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let image = ImageBlob::from_bytes_limited(&bytes, limit)
        .with_context(|| format!("{} is not a usable image", path.display()))?;

    debug!(path = %path.display(), mime = image.mime_type(), "image loaded");
    Ok(image)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::load_image;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock must be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("vibe-media-{nanos}-{name}"));
        std::fs::write(&path, bytes).expect("temp file must be written");
        path
    }

    #[tokio::test]
    async fn load_image_encodes_png() {
        let path = temp_file("pic.png", PNG);
        let image = load_image(&path, 1024).await.expect("png must load");
        assert_eq!(image.mime_type(), "image/png");
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn load_image_rejects_text_and_oversized_files() {
        let text = temp_file("notes.txt", b"plain text");
        assert!(load_image(&text, 1024).await.is_err());
        let _ = std::fs::remove_file(text);

        let big = temp_file("big.png", PNG);
        assert!(load_image(&big, 4).await.is_err());
        let _ = std::fs::remove_file(big);
    }

    #[tokio::test]
    async fn load_image_reports_missing_file() {
        let err = load_image(std::path::Path::new("/definitely/not/here.png"), 1024)
            .await
            .expect_err("missing file");
        assert!(err.to_string().contains("failed to read"));
    }
}
