//! Headshot - turn a casual photo into a professional studio headshot.
//!
//! Pick a photo, choose a style, and let Gemini produce a resume-ready
//! portrait. Running `headshot` with no arguments opens the interactive
//! studio.
//!
//! # Usage
//!
//! ```bash
//! # Start the studio
//! GEMINI_API_KEY=... headshot
//!
//! # Start with a style already selected
//! headshot --style business-casual
//!
//! # View configuration
//! headshot config show
//! ```

use clap::{Parser, Subcommand};
use headshot_core::StylePreset;

mod cli;
mod logging;

/// Headshot - AI-generated resume photos from casual snapshots.
#[derive(Parser, Debug)]
#[command(name = "headshot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Preselect a style, by name or id (e.g. business-casual)
    #[arg(long)]
    style: Option<StylePreset>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// View configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match headshot_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `headshot config path`."
            );
            headshot_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Headshot v{}", headshot_core::VERSION);

    match cli.command {
        Some(Commands::Config(args)) => cli::config::execute(args).await,
        None => cli::studio::run(config, cli.style).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_flag_accepts_id_and_label() {
        let cli = Cli::try_parse_from(["headshot", "--style", "passport-style"]).unwrap();
        assert_eq!(cli.style, Some(StylePreset::PassportStyle));

        let cli = Cli::try_parse_from(["headshot", "--style", "Business Casual"]).unwrap();
        assert_eq!(cli.style, Some(StylePreset::BusinessCasual));
    }

    #[test]
    fn test_style_flag_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["headshot", "--style", "tuxedo"]).is_err());
    }
}
