//! Transformation client: one photo, one style, one request.
//!
//! Checks the credential, composes the prompt, sends a single request and
//! extracts the first returned image. There are no retries and no timeout
//! beyond the transport's defaults.

use super::classify::classify;
use super::model::{ImageModel, ModelRequest};
use crate::error::TransformError;
use crate::style::StylePreset;
use crate::types::EncodedImage;
use std::time::Instant;

/// Client that turns a casual photo into a studio headshot.
pub struct Transformer {
    model: Box<dyn ImageModel>,
    api_key: Option<String>,
}

impl Transformer {
    pub fn new(model: Box<dyn ImageModel>, api_key: Option<String>) -> Self {
        Self { model, api_key }
    }

    /// Replace the credential, e.g. after the service reported it expired.
    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.api_key = api_key;
    }

    /// Whether a non-blank credential is available.
    pub fn has_api_key(&self) -> bool {
        self.credential().is_some()
    }

    /// Name and model of the backend, for display.
    pub fn backend(&self) -> (&str, &str) {
        (self.model.name(), self.model.model())
    }

    fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Transform `image` into a headshot in the given style.
    ///
    /// Fails with `MissingCredential` before any network call when no key is
    /// set, with `NoImageReturned` when the response carries no image part,
    /// and with `CredentialExpired` when the service rejects the key.
    pub async fn transform(
        &self,
        image: &EncodedImage,
        style: StylePreset,
    ) -> Result<EncodedImage, TransformError> {
        let api_key = self
            .credential()
            .ok_or(TransformError::MissingCredential)?
            .to_string();

        let request = ModelRequest {
            image: image.clone(),
            prompt: style.prompt(),
            api_key,
        };

        tracing::info!(
            backend = self.model.name(),
            model = self.model.model(),
            style = style.label(),
            "Requesting headshot transformation"
        );
        let start = Instant::now();

        let response = self.model.generate(&request).await.map_err(|e| {
            let classified = classify(e);
            tracing::error!("{} transformation failed: {classified}", self.model.name());
            classified
        })?;

        let text = response.text();
        match response.first_image() {
            Some(result) => {
                tracing::info!(
                    mime_type = %result.mime_type,
                    bytes = result.byte_len(),
                    latency_ms = start.elapsed().as_millis() as u64,
                    "Headshot received"
                );
                Ok(result)
            }
            None => {
                if !text.is_empty() {
                    tracing::warn!("Model replied without an image: {text}");
                }
                Err(TransformError::NoImageReturned)
            }
        }
    }
}
