//! Renders the studio state to stderr.

use super::theme::Palette;
use headshot_core::state::GENERIC_FAILURE_MESSAGE;
use headshot_core::{EncodedImage, Phase, Studio};

/// Print the panel for the current phase, including the comparison view and
/// the error panel when they apply.
pub fn render(studio: &Studio, palette: &Palette) {
    let controller = studio.controller();
    let state = controller.state();

    eprintln!();
    match controller.phase() {
        Phase::Idle => {
            eprintln!(
                "  {}",
                palette.hint.apply_to("Upload a photo to see the transformation")
            );
            let limit = studio.config().limits.upload_hint_mb;
            eprintln!("  {}", palette.hint.apply_to(upload_hint(limit)));
        }
        Phase::Loading => {
            eprintln!(
                "  {}",
                palette.accent.apply_to("Enhancing your professional look...")
            );
        }
        _ => {}
    }

    if let Some(original) = &state.original {
        eprintln!(
            "    {:<16} {}",
            palette.label.apply_to("Original:"),
            describe_image(original)
        );
    }
    eprintln!(
        "    {:<16} {}",
        palette.label.apply_to("Style:"),
        controller.style()
    );
    if let Some(transformed) = &state.transformed {
        eprintln!(
            "    {:<16} {} {}",
            palette.label.apply_to("AI Professional:"),
            describe_image(transformed),
            palette.ready.apply_to("READY")
        );
    }

    if let Some(failure) = &state.error {
        eprintln!();
        eprintln!("  {}", palette.error.apply_to("✗ Transformation failed"));
        eprintln!(
            "    {}",
            palette.error.apply_to(failure_text(&failure.message))
        );
    }
    eprintln!();
}

/// Accepted formats and the size above which uploads log a warning.
pub fn upload_hint(upload_hint_mb: u64) -> String {
    format!("PNG, JPG or WebP (Max {upload_hint_mb}MB)")
}

/// One-line summary of an encoded image: mime type and decoded size.
pub fn describe_image(image: &EncodedImage) -> String {
    let bytes = image.byte_len();
    let size = if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1} KB", bytes as f64 / 1_000.0)
    } else {
        format!("{bytes} B")
    };
    format!("{} ({size})", image.mime_type)
}

fn failure_text(message: &str) -> &str {
    if message.trim().is_empty() {
        GENERIC_FAILURE_MESSAGE
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_image_sizes() {
        let small = EncodedImage::from_bytes(&[0u8; 12], "image/png");
        assert_eq!(describe_image(&small), "image/png (12 B)");

        let medium = EncodedImage::from_bytes(&vec![0u8; 2_500], "image/jpeg");
        assert_eq!(describe_image(&medium), "image/jpeg (2.5 KB)");

        let large = EncodedImage::from_bytes(&vec![0u8; 3_200_000], "image/webp");
        assert_eq!(describe_image(&large), "image/webp (3.2 MB)");
    }

    #[test]
    fn test_upload_hint_follows_configured_limit() {
        assert_eq!(upload_hint(10), "PNG, JPG or WebP (Max 10MB)");
        assert_eq!(upload_hint(25), "PNG, JPG or WebP (Max 25MB)");
    }

    #[test]
    fn test_failure_text_falls_back_to_generic() {
        assert_eq!(failure_text("  "), GENERIC_FAILURE_MESSAGE);
        assert_eq!(failure_text("quota exceeded"), "quota exceeded");
    }
}
