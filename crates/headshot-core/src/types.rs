//! Core data types shared by the input adapter, the transformation client,
//! and the studio state.

use crate::error::ImageError;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Mime type assumed when a data URL does not declare one.
pub const DEFAULT_MIME_TYPE: &str = "image/png";

/// A self-describing image: mime type plus base64 payload.
///
/// Renders as a `data:<mime>;base64,<payload>` URL and is never mutated once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub mime_type: String,
    /// Base64-encoded image bytes (standard alphabet, padded)
    pub data: String,
}

impl EncodedImage {
    /// Wrap an already-encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URL.
    ///
    /// A missing mime type falls back to [`DEFAULT_MIME_TYPE`]. The payload is
    /// not decoded here; call [`EncodedImage::decode`] for that.
    pub fn parse_data_url(url: &str) -> Result<Self, ImageError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| ImageError::InvalidDataUrl("missing `data:` scheme".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ImageError::InvalidDataUrl("missing `,` separator".to_string()))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| ImageError::InvalidDataUrl("payload is not base64".to_string()))?;
        let mime = if mime.is_empty() {
            DEFAULT_MIME_TYPE
        } else {
            mime
        };
        Ok(Self::new(mime, payload))
    }

    /// Return a data URL suitable for embedding.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the payload back into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, ImageError> {
        Ok(base64::engine::general_purpose::STANDARD.decode(self.data.as_bytes())?)
    }

    /// Decoded size in bytes, computed from the payload length.
    pub fn byte_len(&self) -> usize {
        let padding = self.data.bytes().rev().take_while(|b| *b == b'=').count();
        ((self.data.len() / 4) * 3).saturating_sub(padding.min(2))
    }

    /// Whether the mime type names an image.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Map a file extension to a mime type, if it is a known image format.
pub fn mime_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpeg" | "jpg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}
