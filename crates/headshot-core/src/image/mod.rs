//! Image input and output.
//!
//! - **input**: read an uploaded file and encode it as an [`EncodedImage`]
//! - **download**: write a transformed headshot back to disk
//!
//! [`EncodedImage`]: crate::types::EncodedImage

pub mod download;
pub mod input;

pub use download::{download_file_name, save_download};
pub use input::{detect_mime_type, ImageLoader};
