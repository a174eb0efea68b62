//! Configuration management for Mailcraft.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// This is loaded from `~/.config/mailcraft/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General application settings
    pub general: GeneralConfig,
    /// Custom template persistence settings
    pub storage: StorageConfig,
    /// Visual editor acquisition settings
    pub editor: EditorConfig,
    /// Export artifact settings
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `config_path`, falling back to defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> ConfigResult<Self> {
        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `MAILCRAFT_DEFAULT_TEMPLATE`: Override the template selected at session start
    /// - `MAILCRAFT_EDITOR_TIMEOUT_MS`: Override the per-source editor load timeout
    /// - `MAILCRAFT_DATA_DIR`: Override where custom templates are persisted
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `MAILCRAFT_*` environment overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MAILCRAFT_DEFAULT_TEMPLATE") {
            if !val.trim().is_empty() {
                tracing::debug!("Override general.default_template from env: {}", val);
                self.general.default_template = val;
            }
        }

        if let Ok(val) = std::env::var("MAILCRAFT_EDITOR_TIMEOUT_MS") {
            if let Ok(timeout) = val.parse() {
                self.editor.attempt_timeout_ms = timeout;
                tracing::debug!("Override editor.attempt_timeout_ms from env: {}", timeout);
            }
        }

        if let Ok(val) = std::env::var("MAILCRAFT_DATA_DIR") {
            if !val.trim().is_empty() {
                tracing::debug!("Override storage.data_dir from env: {}", val);
                self.storage.data_dir = Some(PathBuf::from(val));
            }
        }
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `config_path`, creating its directory if needed.
    pub fn save_to(&self, config_path: &Path) -> ConfigResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/mailcraft/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "mailcraft", "mailcraft").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the data directory path.
    ///
    /// Honours `storage.data_dir` when set, otherwise uses
    /// XDG base directories: `~/.local/share/mailcraft`
    pub fn data_dir(&self) -> ConfigResult<PathBuf> {
        if let Some(dir) = &self.storage.data_dir {
            return Ok(dir.clone());
        }
        let dirs =
            ProjectDirs::from("com", "mailcraft", "mailcraft").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Template id selected when a session starts
    pub default_template: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_template: "modern".to_string(),
        }
    }
}

/// Custom template persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Fixed key the custom template collection is stored under
    pub storage_key: String,
    /// Directory holding persisted records (defaults to the XDG data dir)
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_key: "custom-email-templates".to_string(),
            data_dir: None,
        }
    }
}

/// Visual editor acquisition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Upper bound for a single library source attempt, in milliseconds
    pub attempt_timeout_ms: u64,
    /// Grace period after a successful load before the instance is built
    pub settle_delay_ms: u64,
    /// Editor canvas height
    pub height: String,
    /// Editor canvas width
    pub width: String,
    /// Library sources, tried in order
    pub sources: Vec<EditorSourceConfig>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            attempt_timeout_ms: 10_000,
            settle_delay_ms: 500,
            height: "600px".to_string(),
            width: "100%".to_string(),
            sources: vec![
                EditorSourceConfig {
                    name: "unpkg".to_string(),
                    script_url: "https://unpkg.com/grapesjs@0.21.7/dist/grapes.min.js".to_string(),
                    stylesheet_url: "https://unpkg.com/grapesjs@0.21.7/dist/css/grapes.min.css"
                        .to_string(),
                },
                EditorSourceConfig {
                    name: "jsdelivr".to_string(),
                    script_url: "https://cdn.jsdelivr.net/npm/grapesjs@0.21.7/dist/grapes.min.js"
                        .to_string(),
                    stylesheet_url:
                        "https://cdn.jsdelivr.net/npm/grapesjs@0.21.7/dist/css/grapes.min.css"
                            .to_string(),
                },
            ],
        }
    }
}

/// One place the visual editor library can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSourceConfig {
    /// Short label used in logs and failure reasons
    pub name: String,
    /// Script location
    pub script_url: String,
    /// Stylesheet location
    pub stylesheet_url: String,
}

/// Export artifact settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported documents are written to (defaults to the working directory)
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.general.default_template, "modern");
        assert_eq!(config.storage.storage_key, "custom-email-templates");
        assert_eq!(config.editor.attempt_timeout_ms, 10_000);
        assert_eq!(config.editor.sources.len(), 2);
        assert!(config.export.output_dir.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[storage]"));
        assert!(toml_str.contains("[editor]"));

        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed.general.default_template, config.general.default_template);
        assert_eq!(parsed.editor.sources, config.editor.sources);
    }

    #[test]
    fn test_config_save_load() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.general.default_template = "classic".to_string();
        config.editor.attempt_timeout_ms = 2_500;

        config.save_to(&config_path).expect("save config");
        let loaded = AppConfig::load_from(&config_path).expect("load config");

        assert_eq!(loaded.general.default_template, "classic");
        assert_eq!(loaded.editor.attempt_timeout_ms, 2_500);
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("MAILCRAFT_DEFAULT_TEMPLATE", "welcome");
        std::env::set_var("MAILCRAFT_EDITOR_TIMEOUT_MS", "1500");
        std::env::set_var("MAILCRAFT_DATA_DIR", "/tmp/mailcraft-test");

        let mut config = AppConfig::default();
        config.apply_env_overrides();
        assert_eq!(config.general.default_template, "welcome");
        assert_eq!(config.editor.attempt_timeout_ms, 1500);
        assert_eq!(
            config.data_dir().expect("data dir"),
            PathBuf::from("/tmp/mailcraft-test")
        );

        std::env::remove_var("MAILCRAFT_DEFAULT_TEMPLATE");
        std::env::remove_var("MAILCRAFT_EDITOR_TIMEOUT_MS");
        std::env::remove_var("MAILCRAFT_DATA_DIR");
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[general]
default_template = "minimal"

[editor]
attempt_timeout_ms = 3000
"#;

        let config: AppConfig = toml::from_str(toml_str).expect("parse partial config");
        assert_eq!(config.general.default_template, "minimal");
        assert_eq!(config.editor.attempt_timeout_ms, 3000);
        // These should be defaults
        assert_eq!(config.editor.settle_delay_ms, 500);
        assert_eq!(config.storage.storage_key, "custom-email-templates");
    }
}
