//! Interactive studio: the guided experience for a bare `headshot` run.
//!
//! A menu loop over one [`Studio`]: choose a photo, pick a style, generate,
//! then download or try again. Only the actions valid in the current phase
//! are offered.

pub mod actions;
pub mod render;
pub mod theme;

use actions::Action;
use dialoguer::{Input, Password, Select};
use headshot_core::{Config, HeadshotError, Phase, Studio, StylePreset};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use theme::Palette;

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Entry point for the studio session.
///
/// `initial_style` preselects a preset; it can still be changed from the menu.
pub async fn run(config: Config, initial_style: Option<StylePreset>) -> anyhow::Result<()> {
    let palette = Palette::new();
    let theme = palette.dialog_theme();
    let mut studio = Studio::new(config);
    if let Some(style) = initial_style {
        studio.controller_mut().select_style(style);
    }

    let (backend, model) = studio.transformer().backend();
    tracing::debug!("Using {backend} model {model}");
    theme::print_header(&palette, backend, model);
    if !studio.transformer().has_api_key() {
        eprintln!(
            "  {}",
            palette
                .warning
                .apply_to("GEMINI_API_KEY not set. Enter a key from the menu before generating.")
        );
    }

    loop {
        render::render(&studio, &palette);

        let actions = Action::available(studio.controller(), studio.transformer().has_api_key());
        let labels: Vec<String> = actions
            .iter()
            .map(|action| action.label(studio.controller()))
            .collect();

        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let Some(index) = selection else {
            break; // Esc / Ctrl+C
        };

        match actions[index] {
            Action::ChoosePhoto => choose_photo(&mut studio, &theme, &palette).await?,
            Action::PickStyle => pick_style(&mut studio, &theme)?,
            Action::Generate => generate(&mut studio, &palette).await?,
            Action::Download => download(&studio, &palette).await?,
            Action::TryAgain => studio.controller_mut().reset()?,
            Action::EnterApiKey => enter_api_key(&mut studio, &theme, &palette)?,
            Action::Exit => break,
        }
    }

    Ok(())
}

/// Prompt for a photo path and upload it. Re-prompts on unreadable files.
async fn choose_photo(
    studio: &mut Studio,
    theme: &dialoguer::theme::ColorfulTheme,
    palette: &Palette,
) -> anyhow::Result<()> {
    loop {
        let Some(raw_path) = handle_interrupt(
            Input::<String>::with_theme(theme)
                .with_prompt("Path to photo")
                .interact_text(),
        )?
        else {
            return Ok(());
        };

        let path = PathBuf::from(shellexpand::tilde(raw_path.trim()).into_owned());

        match studio.upload(&path).await {
            Ok(()) => return Ok(()),
            Err(HeadshotError::Image(e)) => {
                eprintln!("  {}", palette.warning.apply_to(e.to_string()));
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn pick_style(studio: &mut Studio, theme: &dialoguer::theme::ColorfulTheme) -> anyhow::Result<()> {
    let labels: Vec<&str> = StylePreset::ALL.iter().map(|s| s.label()).collect();
    let current = StylePreset::ALL
        .iter()
        .position(|s| *s == studio.controller().style())
        .unwrap_or(0);

    let choice = Select::with_theme(theme)
        .with_prompt("Select style")
        .items(&labels)
        .default(current)
        .interact_opt()?;

    if let Some(index) = choice {
        studio.controller_mut().select_style(StylePreset::ALL[index]);
    }
    Ok(())
}

/// Run the transformation behind a spinner.
async fn generate(studio: &mut Studio, palette: &Palette) -> anyhow::Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.blue} {msg} [{elapsed}]")?,
    );
    spinner.set_message("Generating studio quality...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let phase = studio.transform().await;
    spinner.finish_and_clear();

    if phase? == Phase::Done {
        eprintln!(
            "  {}",
            palette.success.apply_to("✓ Your resume photo is ready")
        );
    }
    Ok(())
}

/// Save the headshot. A failed write is reported and the session continues.
async fn download(studio: &Studio, palette: &Palette) -> anyhow::Result<()> {
    match studio.download().await {
        Ok(Some(path)) => {
            eprintln!("  {} {}", palette.success.apply_to("✓ Saved"), path.display());
        }
        Ok(None) => {}
        Err(HeadshotError::Image(e)) => {
            eprintln!("  {} {e}", palette.error.apply_to("✗"));
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Ask for an API key for this session only; it is never written to disk.
fn enter_api_key(
    studio: &mut Studio,
    theme: &dialoguer::theme::ColorfulTheme,
    palette: &Palette,
) -> anyhow::Result<()> {
    let key = match Password::with_theme(theme)
        .with_prompt("Gemini API key (empty to cancel)")
        .allow_empty_password(true)
        .interact()
    {
        Ok(k) if !k.trim().is_empty() => k,
        _ => return Ok(()),
    };

    studio.set_api_key(Some(key.trim().to_string()));
    eprintln!(
        "  {}",
        palette.hint.apply_to("Using the new key for this session")
    );
    Ok(())
}
