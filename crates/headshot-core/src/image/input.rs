//! Image input adapter: turns a user-selected file into an [`EncodedImage`].
//!
//! Nothing is rejected here. Format and size are the model's problem; the
//! configured limits only produce warnings so the view layer can hint.

use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::ImageError;
use crate::types::{mime_type_for_extension, EncodedImage};

/// Mime type used when neither content nor extension identify the file.
const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Reads and encodes uploaded photos.
pub struct ImageLoader {
    limits: LimitsConfig,
}

impl ImageLoader {
    /// Create a new loader with the given upload hints.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Read a file and encode it.
    pub async fn load(&self, path: &Path) -> Result<EncodedImage, ImageError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| ImageError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mime_type = detect_mime_type(&bytes, path);
        let image = EncodedImage::from_bytes(&bytes, mime_type);
        self.warn_on_size_hint(path, bytes.len() as u64);
        if !image.is_image() {
            tracing::warn!(
                "{} does not look like an image ({mime_type}); PNG, JPEG or WebP work best",
                path.display()
            );
        }

        tracing::debug!(
            path = %path.display(),
            bytes = bytes.len(),
            mime_type,
            "Encoded upload"
        );
        Ok(image)
    }

    fn warn_on_size_hint(&self, path: &Path, size: u64) {
        let hint_bytes = self.limits.upload_hint_mb.saturating_mul(1024 * 1024);
        if size > hint_bytes {
            tracing::warn!(
                "{} is {:.1} MB; uploads over {} MB may be rejected by the model",
                path.display(),
                size as f64 / (1024.0 * 1024.0),
                self.limits.upload_hint_mb
            );
        }
    }
}

/// Sniff the content first, then fall back to the file extension.
pub fn detect_mime_type(bytes: &[u8], path: &Path) -> &'static str {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type();
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_type_for_extension)
        .unwrap_or(UNKNOWN_MIME_TYPE)
}
