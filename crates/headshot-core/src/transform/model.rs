//! Image model trait and request/response types.
//!
//! Defines the one call the studio makes to a generative image service, so
//! the Gemini backend can be swapped for a stub in tests.

use crate::error::TransformError;
use crate::types::EncodedImage;
use async_trait::async_trait;

/// A single transformation request.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    /// Source photo
    pub image: EncodedImage,
    /// Full instruction prompt
    pub prompt: String,
    /// API key, already checked to be non-empty
    pub api_key: String,
}

/// One content part of a model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    Text(String),
    Image(EncodedImage),
}

/// The parts of the first candidate, in the order the model returned them.
#[derive(Debug, Clone, Default)]
pub struct ModelResponse {
    pub parts: Vec<ResponsePart>,
}

impl ModelResponse {
    /// First image part, if any.
    pub fn first_image(self) -> Option<EncodedImage> {
        self.parts.into_iter().find_map(|part| match part {
            ResponsePart::Image(image) => Some(image),
            ResponsePart::Text(_) => None,
        })
    }

    /// Concatenated text parts, used for diagnostics when no image came back.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                ResponsePart::Text(text) => Some(text.as_str()),
                ResponsePart::Image(_) => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Trait that all image model backends implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn ImageModel>` for dynamic dispatch).
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Backend name for logging (e.g., "gemini").
    fn name(&self) -> &str;

    /// Model identifier sent to the service.
    fn model(&self) -> &str;

    /// Send one request and return the parsed response.
    ///
    /// Implementations report every failure as [`TransformError::Service`];
    /// classification into the other kinds happens in the client.
    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, TransformError>;
}
