//! Studio colours: one palette shared by the prompts, the state panel and
//! the status lines, plus the session header.

use console::{Style, StyledObject};
use dialoguer::theme::ColorfulTheme;

/// Named styles for every coloured element the studio prints.
pub struct Palette {
    /// Prompt markers, the active menu item and in-flight messages
    pub accent: Style,
    /// Field names in the state panel
    pub label: Style,
    /// Upload hints and secondary notes
    pub hint: Style,
    /// Confirmations such as a saved download
    pub success: Style,
    /// Recoverable problems: unreadable file, missing key
    pub warning: Style,
    /// The failure panel
    pub error: Style,
    /// The READY marker next to a finished headshot
    pub ready: Style,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            accent: Style::new().for_stderr().blue(),
            label: Style::new().for_stderr().bold(),
            hint: Style::new().for_stderr().dim(),
            success: Style::new().for_stderr().green(),
            warning: Style::new().for_stderr().yellow(),
            error: Style::new().for_stderr().red(),
            ready: Style::new().for_stderr().green().bold(),
        }
    }

    /// Dialoguer theme using the palette's accent and status colours.
    pub fn dialog_theme(&self) -> ColorfulTheme {
        ColorfulTheme {
            prompt_prefix: mark("?", &self.accent),
            active_item_prefix: mark("▸", &self.accent),
            active_item_style: self.accent.clone(),
            success_prefix: mark("✓", &self.success),
            error_prefix: mark("✗", &self.error),
            error_style: self.error.clone(),
            ..ColorfulTheme::default()
        }
    }
}

fn mark(symbol: &str, style: &Style) -> StyledObject<String> {
    style.apply_to(symbol.to_string())
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Header lines: product and version, tagline, then the active backend.
pub fn header_lines(backend: &str, model: &str) -> Vec<String> {
    vec![
        format!("┌ Headshot v{}", headshot_core::VERSION),
        "│ Professional photos in seconds".to_string(),
        format!("└ {backend} · {model}"),
    ]
}

/// Print the session header to stderr.
pub fn print_header(palette: &Palette, backend: &str, model: &str) {
    eprintln!();
    for line in header_lines(backend, model) {
        eprintln!("  {}", palette.accent.apply_to(line));
    }
    eprintln!();
}
