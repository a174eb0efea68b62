use crate::error::CommandError;
use crate::state::AppState;
use std::path::Path;
use tracing::info;

/// Active configuration rendered as TOML.
pub fn show_config(state: &AppState) -> Result<String, CommandError> {
    toml::to_string_pretty(&state.config).map_err(|e| {
        CommandError::new("CONFIG_ERROR", format!("Failed to serialize configuration: {e}"))
    })
}

/// Write the active configuration to `path`.
///
/// An existing file is only replaced when `force` is set.
pub fn write_config(state: &AppState, path: &Path, force: bool) -> Result<(), CommandError> {
    if path.exists() && !force {
        return Err(CommandError::with_details(
            "CONFIG_EXISTS",
            "Configuration file already exists",
            serde_json::json!({ "path": path.display().to_string() }),
        ));
    }

    state.config.save_to(path)?;
    info!(path = %path.display(), "configuration written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_core::AppConfig;
    use mailcraft_store::MemoryStorage;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn state_with_template(template: &str) -> AppState {
        let mut config = AppConfig::default();
        config.general.default_template = template.to_string();
        AppState::with_storage(config, Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_show_config() {
        let shown = show_config(&state_with_template("welcome")).expect("show config");
        assert!(shown.contains("default_template = \"welcome\""));
        assert!(shown.contains("[editor]"));
    }

    #[test]
    fn test_write_config_round_trips() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("mailcraft").join("config.toml");

        write_config(&state_with_template("classic"), &path, false).expect("write config");

        let loaded = AppConfig::load_from(&path).expect("load config");
        assert_eq!(loaded.general.default_template, "classic");
    }

    #[test]
    fn test_write_config_keeps_existing_file() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").expect("seed config");

        let err = write_config(&state_with_template("classic"), &path, false)
            .expect_err("existing file");
        assert_eq!(err.code, "CONFIG_EXISTS");
        assert_eq!(std::fs::read_to_string(&path).expect("read config"), "# mine\n");

        write_config(&state_with_template("classic"), &path, true).expect("forced write");
        let loaded = AppConfig::load_from(&path).expect("load config");
        assert_eq!(loaded.general.default_template, "classic");
    }
}
