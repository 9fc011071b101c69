//! Headshot transformation via an external generative image model.
//!
//! Provides the model abstraction, the Gemini backend, and the client that
//! checks credentials, builds the prompt and classifies failures.

pub(crate) mod classify;
pub(crate) mod client;
pub(crate) mod gemini;
pub(crate) mod model;

pub use classify::is_credential_expired;
pub use client::Transformer;
pub use gemini::GeminiModel;
pub use model::{ImageModel, ModelRequest, ModelResponse, ResponsePart};
