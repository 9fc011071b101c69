//! The `headshot config` command for inspecting configuration.

use clap::{Args, Subcommand};
use headshot_core::Config;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration inspection.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,

    /// Show config file path
    Path,
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            let toml = redact_api_key(config.clone()).to_toml()?;
            println!("{}", toml);
            let key_status = if config.api_key().is_some() {
                "set"
            } else {
                "not set"
            };
            eprintln!("# API key: {key_status}");
        }

        ConfigCommand::Path => {
            let path = Config::default_path();
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Hide a literal key; `${VAR}` references are safe to print.
fn redact_api_key(mut config: Config) -> Config {
    let key = &config.gemini.api_key;
    if !key.is_empty() && !key.starts_with("${") {
        config.gemini.api_key = "********".to_string();
    }
    config
}
