//! Gemini image model using the `generateContent` REST API.
//!
//! Sends the photo as an inline data part followed by the prompt text, and
//! reads inline image parts back out of the first candidate.

use super::model::{ImageModel, ModelRequest, ModelResponse, ResponsePart};
use crate::config::GeminiConfig;
use crate::error::TransformError;
use crate::types::EncodedImage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Gemini backend. Holds no credential; the key travels with each request.
pub struct GeminiModel {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiModel {
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self {
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
            model: model.trim().to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(&config.endpoint, &config.model)
    }

    fn url(&self) -> String {
        let model_path = if self.model.starts_with("models/") {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        };
        format!("{}/{}:generateContent", self.endpoint, model_path)
    }
}

// --- Request types ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart {
    Image {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

// --- Response types ---

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<WirePart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[async_trait]
impl ImageModel for GeminiModel {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, TransformError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    RequestPart::Image {
                        inline_data: InlineData {
                            mime_type: request.image.mime_type.clone(),
                            data: request.image.data.clone(),
                        },
                    },
                    RequestPart::Text {
                        text: request.prompt.clone(),
                    },
                ],
            }],
        };

        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &request.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TransformError::Service {
                message: format!("Gemini request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            // Keep the service's own message when the body is the usual
            // `{"error": {...}}` envelope.
            let message = match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => envelope.error.message,
                Err(_) => format!("Gemini HTTP {status}: {text}"),
            };
            return Err(TransformError::Service {
                message,
                status_code: Some(status.as_u16()),
            });
        }

        let parsed: GenerateContentResponse =
            resp.json().await.map_err(|e| TransformError::Service {
                message: format!("Failed to parse Gemini response: {e}"),
                status_code: None,
            })?;

        let parts = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| match (part.inline_data, part.text) {
                (Some(inline), _) => Some(ResponsePart::Image(EncodedImage::new(
                    inline.mime_type,
                    inline.data,
                ))),
                (None, Some(text)) => Some(ResponsePart::Text(text)),
                (None, None) => None,
            })
            .collect();

        Ok(ModelResponse { parts })
    }
}
