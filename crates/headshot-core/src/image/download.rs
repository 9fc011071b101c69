//! Saves a transformed headshot to disk.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ImageError;
use crate::types::EncodedImage;

/// File name for a download taken at `millis` since the Unix epoch.
pub fn download_file_name(millis: u128) -> String {
    format!("resume-photo-{millis}.png")
}

/// Decode `image` and write it into `dir` as `resume-photo-<millis>.png`.
///
/// The millisecond timestamp keeps repeated downloads from overwriting each
/// other. The directory is created if needed.
pub async fn save_download(image: &EncodedImage, dir: &Path) -> Result<PathBuf, ImageError> {
    let bytes = image.decode()?;
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let path = dir.join(download_file_name(millis));

    let write_err = |e: std::io::Error| ImageError::Write {
        path: path.clone(),
        message: e.to_string(),
    };
    tokio::fs::create_dir_all(dir).await.map_err(write_err)?;
    tokio::fs::write(&path, &bytes).await.map_err(write_err)?;

    tracing::info!("Saved headshot to {}", path.display());
    Ok(path)
}
