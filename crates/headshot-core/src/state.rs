//! Studio state and the controller that owns it.
//!
//! The controller is the only writer of [`PhotoState`]. Every user event
//! (upload, generate, completion, reset) goes through one of its methods, and
//! a transition that does not apply in the current phase is rejected with a
//! [`StateError`] without touching the state.

use crate::error::{FailureKind, StateError, TransformError};
use crate::style::StylePreset;
use crate::transform::Transformer;
use crate::types::EncodedImage;
use std::fmt;

/// Message shown when a failure carries no text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to transform image. Please try again.";

/// Where the studio is in its upload → generate → result cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No photo yet
    Idle,
    /// Photo uploaded, nothing generated
    Ready,
    /// Transformation in flight
    Loading,
    /// Headshot available
    Done,
    /// Last attempt failed
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::Loading => "loading",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// A failed attempt, kept for display until the next upload or attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    fn from_error(error: &TransformError) -> Self {
        let message = error.to_string();
        Self {
            kind: error.kind(),
            message: if message.trim().is_empty() {
                GENERIC_FAILURE_MESSAGE.to_string()
            } else {
                message
            },
        }
    }

    /// Whether the user should be asked for a new API key.
    pub fn needs_credential(&self) -> bool {
        matches!(
            self.kind,
            FailureKind::MissingCredential | FailureKind::CredentialExpired
        )
    }
}

/// Everything the view layer renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoState {
    pub original: Option<EncodedImage>,
    pub transformed: Option<EncodedImage>,
    pub is_loading: bool,
    pub error: Option<Failure>,
}

impl PhotoState {
    /// Derive the current phase from the fields.
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.transformed.is_some() {
            Phase::Done
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.original.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }
}

/// Work handed out by [`StudioController::begin_transform`].
#[derive(Debug, Clone)]
pub struct TransformJob {
    pub image: EncodedImage,
    pub style: StylePreset,
}

/// Owns the studio state and applies transitions.
#[derive(Debug, Default)]
pub struct StudioController {
    state: PhotoState,
    style: StylePreset,
}

impl StudioController {
    /// Fresh session: no photo, default style.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PhotoState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn style(&self) -> StylePreset {
        self.style
    }

    /// Choose the style for the next transformation.
    pub fn select_style(&mut self, style: StylePreset) {
        self.style = style;
    }

    /// Store a newly uploaded photo, dropping any previous result and error.
    pub fn upload(&mut self, image: EncodedImage) -> Result<(), StateError> {
        if self.state.is_loading {
            return Err(StateError::TransformInFlight);
        }
        self.state.original = Some(image);
        self.state.transformed = None;
        self.state.error = None;
        tracing::debug!("Photo uploaded, phase: {}", self.phase());
        Ok(())
    }

    /// Whether the generate action is enabled.
    pub fn can_transform(&self) -> bool {
        self.state.original.is_some() && !self.state.is_loading
    }

    /// Enter `Loading` and hand out the photo and style to transform.
    ///
    /// The previous result and error are cleared so the outcome of this
    /// attempt alone decides the next phase.
    pub fn begin_transform(&mut self) -> Result<TransformJob, StateError> {
        if self.state.is_loading {
            return Err(StateError::TransformInFlight);
        }
        let image = self.state.original.clone().ok_or(StateError::NoOriginal)?;

        self.state.is_loading = true;
        self.state.transformed = None;
        self.state.error = None;
        tracing::debug!("Transformation started with style {}", self.style);

        Ok(TransformJob {
            image,
            style: self.style,
        })
    }

    /// Leave `Loading` with the outcome of the in-flight request.
    pub fn finish_transform(
        &mut self,
        result: Result<EncodedImage, TransformError>,
    ) -> Result<Phase, StateError> {
        if !self.state.is_loading {
            return Err(StateError::NotLoading);
        }
        self.state.is_loading = false;
        match result {
            Ok(image) => self.state.transformed = Some(image),
            Err(e) => self.state.error = Some(Failure::from_error(&e)),
        }
        let phase = self.phase();
        tracing::debug!("Transformation finished, phase: {phase}");
        Ok(phase)
    }

    /// "Try again": drop the result (and any error) but keep the photo.
    pub fn reset(&mut self) -> Result<(), StateError> {
        if self.state.is_loading {
            return Err(StateError::TransformInFlight);
        }
        self.state.transformed = None;
        self.state.error = None;
        Ok(())
    }

    /// Run one full transformation: begin, await the client, finish.
    pub async fn transform(&mut self, transformer: &Transformer) -> Result<Phase, StateError> {
        let job = self.begin_transform()?;
        let result = transformer.transform(&job.image, job.style).await;
        self.finish_transform(result)
    }
}
