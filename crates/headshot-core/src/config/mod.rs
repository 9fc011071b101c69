//! Configuration management for the headshot studio.
//!
//! Configuration is read from the platform config directory when a file is
//! present; otherwise defaults apply. The application never writes it.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable consulted when the configured key resolves to nothing.
pub const FALLBACK_API_KEY_VAR: &str = "API_KEY";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Gemini model settings
    pub gemini: GeminiConfig,

    /// Upload hints
    pub limits: LimitsConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.headshot.headshot/config.toml
    /// - Linux: ~/.config/headshot/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\headshot\config\config.toml
    ///
    /// Falls back to ~/.headshot/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "headshot", "headshot")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".headshot").join("config.toml")
            })
    }

    /// Get the resolved download directory (with ~ expansion).
    pub fn download_dir(&self) -> PathBuf {
        let path_str = self.general.download_dir.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.into_owned())
    }

    /// Resolve the Gemini API key from config and environment.
    ///
    /// `${VAR}` references are looked up in the environment. When the
    /// configured value resolves to nothing, `API_KEY` is tried. Blank keys
    /// count as absent.
    pub fn api_key(&self) -> Option<String> {
        let non_blank = |key: String| {
            let key = key.trim().to_string();
            (!key.is_empty()).then_some(key)
        };
        resolve_env_var(&self.gemini.api_key)
            .and_then(non_blank)
            .or_else(|| std::env::var(FALLBACK_API_KEY_VAR).ok().and_then(non_blank))
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.gemini.model, "gemini-2.5-flash-image");
        assert_eq!(config.limits.upload_hint_mb, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[general]"));
        assert!(toml.contains("[gemini]"));
    }

    #[test]
    fn test_load_from_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gemini]\nmodel = \"gemini-custom-image\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.gemini.model, "gemini-custom-image");
        assert_eq!(
            config.gemini.endpoint,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.limits.upload_hint_mb, 10);
    }

    #[test]
    fn test_load_from_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gemini]\nmodel = \"\"").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("gemini.model"));
    }

    #[test]
    fn test_literal_api_key_is_used() {
        let mut config = Config::default();
        config.gemini.api_key = "  literal-key  ".to_string();
        assert_eq!(config.api_key(), Some("literal-key".to_string()));
    }

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }

    #[test]
    fn test_download_dir_expands_tilde() {
        let mut config = Config::default();
        config.general.download_dir = PathBuf::from("~/headshots");
        let expected = PathBuf::from(shellexpand::tilde("~/headshots").into_owned());
        assert_eq!(config.download_dir(), expected);
    }
}
