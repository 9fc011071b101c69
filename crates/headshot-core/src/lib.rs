//! Headshot Core - turn casual photos into studio headshots.
//!
//! A photo is encoded, sent together with a style prompt to a generative
//! image model, and the returned image is kept in a single studio state that
//! the view layer renders.
//!
//! # Architecture
//!
//! ```text
//! File → Encode (data URL) → Studio state → Gemini generateContent → Studio state → Download
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use headshot_core::{Config, Studio, StylePreset};
//!
//! #[tokio::main]
//! async fn main() -> headshot_core::Result<()> {
//!     let mut studio = Studio::new(Config::load()?);
//!
//!     studio.upload("./photo.jpg".as_ref()).await?;
//!     studio.controller_mut().select_style(StylePreset::BusinessCasual);
//!     studio.transform().await?;
//!
//!     if let Some(path) = studio.download().await? {
//!         println!("Saved {}", path.display());
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod image;
pub mod state;
pub mod style;
pub mod transform;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{
    ConfigError, FailureKind, HeadshotError, ImageError, Result, StateError, TransformError,
};
pub use image::ImageLoader;
pub use state::{Failure, Phase, PhotoState, StudioController};
pub use style::StylePreset;
pub use transform::{GeminiModel, ImageModel, Transformer};
pub use types::EncodedImage;

use std::path::{Path, PathBuf};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Headshot studio - the main entry point.
///
/// Wires the input adapter, the transformation client and the state
/// controller together for one session.
pub struct Studio {
    config: Config,
    loader: ImageLoader,
    transformer: Transformer,
    controller: StudioController,
}

impl Studio {
    /// Create a studio backed by Gemini, with the key from config/environment.
    pub fn new(config: Config) -> Self {
        let model = GeminiModel::from_config(&config.gemini);
        let api_key = config.api_key();
        Self::with_model(config, Box::new(model), api_key)
    }

    /// Create a studio with a specific image model backend.
    pub fn with_model(
        config: Config,
        model: Box<dyn ImageModel>,
        api_key: Option<String>,
    ) -> Self {
        tracing::debug!("Initializing headshot studio v{}", VERSION);
        Self {
            loader: ImageLoader::new(config.limits.clone()),
            transformer: Transformer::new(model, api_key),
            controller: StudioController::new(),
            config,
        }
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn controller(&self) -> &StudioController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut StudioController {
        &mut self.controller
    }

    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    /// Use a different API key for the rest of the session.
    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.transformer.set_api_key(api_key);
    }

    /// Read and encode a photo, then make it the current original.
    pub async fn upload(&mut self, path: &Path) -> Result<()> {
        if self.controller.state().is_loading {
            return Err(StateError::TransformInFlight.into());
        }
        let image = self.loader.load(path).await?;
        self.controller.upload(image)?;
        Ok(())
    }

    /// Transform the current photo with the selected style.
    ///
    /// Service failures are recorded in the state (phase `Failed`), not
    /// returned; only misuse such as a missing photo is an `Err`.
    pub async fn transform(&mut self) -> Result<Phase> {
        Ok(self.controller.transform(&self.transformer).await?)
    }

    /// Save the current headshot to the download directory.
    ///
    /// Returns `None` when there is nothing to download.
    pub async fn download(&self) -> Result<Option<PathBuf>> {
        match &self.controller.state().transformed {
            Some(headshot) => {
                let path = image::save_download(headshot, &self.config.download_dir()).await?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }
}
