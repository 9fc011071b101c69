//! Error types for the headshot studio.
//!
//! Errors are grouped by component so the presentation layer can tell a
//! credential problem from a bad input file or a misused state transition.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for headshot operations.
#[derive(Error, Debug)]
pub enum HeadshotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading, encoding, or saving images
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// Transformation request failed
    #[error("Transformation error: {0}")]
    Transform(#[from] TransformError),

    /// State controller misuse
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors from the image input adapter and the download writer.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The selected file could not be read
    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// The result could not be written
    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// A string was not a `data:<mime>;base64,<payload>` URL
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    /// The payload was not valid base64
    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Coarse classification of a failed transformation.
///
/// Stored alongside the message in the studio state so the view layer can
/// offer re-authentication instead of a plain retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingCredential,
    NoImageReturned,
    CredentialExpired,
    Service,
}

/// Errors from the transformation client. None of them are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// No API key was supplied; no request was sent.
    #[error("API key is missing. Set GEMINI_API_KEY or enter a key.")]
    MissingCredential,

    /// The model answered but without any image part.
    #[error("No image was returned from the AI. Please try again.")]
    NoImageReturned,

    /// The service rejected the key or could not find the requested entity.
    #[error("API key expired or not found. Please enter a valid API key.")]
    CredentialExpired,

    /// Anything else the service or transport reported, message untouched.
    #[error("{message}")]
    Service {
        message: String,
        status_code: Option<u16>,
    },
}

impl TransformError {
    /// Classification used by the state controller.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingCredential => FailureKind::MissingCredential,
            Self::NoImageReturned => FailureKind::NoImageReturned,
            Self::CredentialExpired => FailureKind::CredentialExpired,
            Self::Service { .. } => FailureKind::Service,
        }
    }
}

/// Rejected state transitions. The controller is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Upload a photo before generating a headshot")]
    NoOriginal,

    #[error("A transformation is already in progress")]
    TransformInFlight,

    #[error("No transformation is in progress")]
    NotLoading,
}

/// Convenience type alias for headshot results.
pub type Result<T> = std::result::Result<T, HeadshotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_error_kinds() {
        assert_eq!(
            TransformError::MissingCredential.kind(),
            FailureKind::MissingCredential
        );
        assert_eq!(
            TransformError::NoImageReturned.kind(),
            FailureKind::NoImageReturned
        );
        assert_eq!(
            TransformError::CredentialExpired.kind(),
            FailureKind::CredentialExpired
        );
        let err = TransformError::Service {
            message: "quota exceeded".to_string(),
            status_code: Some(429),
        };
        assert_eq!(err.kind(), FailureKind::Service);
    }

    #[test]
    fn test_service_error_keeps_original_message() {
        let err = TransformError::Service {
            message: "Gemini HTTP 500: backend unavailable".to_string(),
            status_code: Some(500),
        };
        assert_eq!(err.to_string(), "Gemini HTTP 500: backend unavailable");
    }

    #[test]
    fn test_state_error_wraps_into_top_level() {
        let err: HeadshotError = StateError::NoOriginal.into();
        assert!(err.to_string().contains("Upload a photo"));
    }
}
