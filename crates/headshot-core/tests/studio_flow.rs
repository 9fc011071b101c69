//! Full studio sessions against a stub image model.

use async_trait::async_trait;
use headshot_core::transform::{ModelRequest, ModelResponse, ResponsePart};
use headshot_core::{
    Config, EncodedImage, FailureKind, ImageModel, Phase, Studio, StylePreset, TransformError,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

struct StubModel {
    response: Result<ModelResponse, TransformError>,
    calls: Arc<AtomicU32>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubModel {
    fn new(response: Result<ModelResponse, TransformError>) -> Self {
        Self {
            response,
            calls: Arc::new(AtomicU32::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ImageModel for StubModel {
    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-image-v1"
    }

    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, TransformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt.clone());
        self.response.clone()
    }
}

fn write_photo(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("photo.jpg");
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
    bytes.extend_from_slice(b"casual snapshot");
    std::fs::write(&path, bytes).unwrap();
    path
}

fn config_in(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.general.download_dir = dir.join("downloads");
    config
}

#[tokio::test]
async fn test_business_casual_session_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let photo = write_photo(dir.path());

    let stub = StubModel::new(Ok(ModelResponse {
        parts: vec![ResponsePart::Image(EncodedImage::new("image/png", "AAAA"))],
    }));
    let prompts = stub.prompts.clone();
    let mut studio = Studio::with_model(
        config_in(dir.path()),
        Box::new(stub),
        Some("test-key".to_string()),
    );

    studio.upload(&photo).await.unwrap();
    assert_eq!(studio.controller().phase(), Phase::Ready);
    let original = studio.controller().state().original.clone().unwrap();
    assert!(original.data_url().starts_with("data:image/jpeg;base64,"));

    studio
        .controller_mut()
        .select_style(StylePreset::BusinessCasual);
    let phase = studio.transform().await.unwrap();

    assert_eq!(phase, Phase::Done);
    let state = studio.controller().state();
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(
        state.transformed.as_ref().unwrap().data_url(),
        "data:image/png;base64,AAAA"
    );
    assert!(prompts.lock().unwrap()[0].ends_with(StylePreset::BusinessCasual.detail()));

    let saved = studio.download().await.unwrap().unwrap();
    assert!(saved.starts_with(dir.path().join("downloads")));
    // "AAAA" decodes to three zero bytes
    assert_eq!(std::fs::read(saved).unwrap(), vec![0, 0, 0]);
}

#[tokio::test]
async fn test_missing_key_fails_without_calling_model() {
    let dir = tempfile::tempdir().unwrap();
    let photo = write_photo(dir.path());

    let stub = StubModel::new(Ok(ModelResponse::default()));
    let calls = stub.calls.clone();
    let mut studio = Studio::with_model(config_in(dir.path()), Box::new(stub), None);

    studio.upload(&photo).await.unwrap();
    let phase = studio.transform().await.unwrap();

    assert_eq!(phase, Phase::Failed);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let failure = studio.controller().state().error.clone().unwrap();
    assert_eq!(failure.kind, FailureKind::MissingCredential);

    // A key entered mid-session is used for the retry
    studio.set_api_key(Some("entered-key".to_string()));
    studio.transform().await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_expired_key_is_reported_distinctly() {
    let dir = tempfile::tempdir().unwrap();
    let photo = write_photo(dir.path());

    let stub = StubModel::new(Err(TransformError::Service {
        message: "Requested entity was not found.".to_string(),
        status_code: Some(404),
    }));
    let mut studio = Studio::with_model(
        config_in(dir.path()),
        Box::new(stub),
        Some("stale-key".to_string()),
    );

    studio.upload(&photo).await.unwrap();
    studio.transform().await.unwrap();

    let failure = studio.controller().state().error.clone().unwrap();
    assert_eq!(failure.kind, FailureKind::CredentialExpired);
    assert!(failure.needs_credential());

    // Session stays usable: a new upload clears the error
    studio.upload(&photo).await.unwrap();
    assert_eq!(studio.controller().phase(), Phase::Ready);
}
