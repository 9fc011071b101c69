//! Classification of service failures.
//!
//! The service has no dedicated "bad credential" signal that survives every
//! path (SDKs, proxies, key pickers), so expiry is inferred from the message
//! text. Treat this as a heuristic: an unmatched message stays a plain
//! service error.

use crate::error::TransformError;

/// Message fragments that mean the key or the resource it points at is gone.
const CREDENTIAL_MARKERS: &[&str] = &["Requested entity was not found", "API key not valid"];

/// Whether a service message reports an invalid or unknown credential.
pub fn is_credential_expired(message: &str) -> bool {
    CREDENTIAL_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

/// Re-label credential failures; everything else passes through unchanged.
pub fn classify(error: TransformError) -> TransformError {
    match error {
        TransformError::Service { ref message, .. } if is_credential_expired(message) => {
            TransformError::CredentialExpired
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(message: &str, status_code: Option<u16>) -> TransformError {
        TransformError::Service {
            message: message.to_string(),
            status_code,
        }
    }

    #[test]
    fn test_entity_not_found_is_credential_expired() {
        let err = classify(service("Requested entity was not found.", Some(404)));
        assert_eq!(err, TransformError::CredentialExpired);
    }

    #[test]
    fn test_invalid_key_is_credential_expired() {
        let err = classify(service(
            "API key not valid. Please pass a valid API key.",
            Some(400),
        ));
        assert_eq!(err, TransformError::CredentialExpired);
    }

    #[test]
    fn test_other_service_errors_pass_through() {
        let original = service("Resource has been exhausted (e.g. check quota).", Some(429));
        assert_eq!(classify(original.clone()), original);
    }

    #[test]
    fn test_plain_404_without_marker_is_not_expired() {
        // Status alone does not decide; only the message does.
        let original = service("Gemini HTTP 404 Not Found: ", Some(404));
        assert_eq!(classify(original.clone()), original);
    }

    #[test]
    fn test_non_service_errors_unchanged() {
        assert_eq!(
            classify(TransformError::NoImageReturned),
            TransformError::NoImageReturned
        );
    }
}
