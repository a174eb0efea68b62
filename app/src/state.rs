//! Application state management.

use crate::error::CommandError;
use mailcraft_core::AppConfig;
use mailcraft_editor::{configured_sources, EditorAdapter};
use mailcraft_render::TemplateId;
use mailcraft_store::{CustomTemplateStore, FileStorage, TemplateDataStore, TemplateStorage};
use std::sync::{Arc, RwLock};
use tracing::info;

/// Session state shared by all command handlers.
pub struct AppState {
    /// Loaded configuration
    pub config: AppConfig,

    /// Branding and content every render reads from
    pub template_data: TemplateDataStore,

    /// User-authored templates, persisted under `config.storage.storage_key`
    pub custom_templates: CustomTemplateStore,

    /// Id the user selected, kept verbatim
    pub current_template: RwLock<String>,

    /// Editor used for save and export.
    ///
    /// Sources come from `config.editor.sources`. The CLI has no script
    /// host, so every source fails and export runs on the fallback editor.
    pub editor: tokio::sync::Mutex<EditorAdapter>,
}

impl AppState {
    /// Build state persisting custom templates under the configured data directory.
    pub fn new(config: AppConfig) -> Result<Self, CommandError> {
        let data_dir = config.data_dir()?;
        info!("Data directory: {}", data_dir.display());
        Ok(Self::with_storage(config, Arc::new(FileStorage::new(data_dir))))
    }

    /// Build state over an explicit storage backend.
    pub fn with_storage(config: AppConfig, storage: Arc<dyn TemplateStorage>) -> Self {
        let custom_templates = CustomTemplateStore::open(storage, config.storage.storage_key.clone());
        let current_template = config.general.default_template.clone();
        let editor = EditorAdapter::new(
            config.editor.clone(),
            configured_sources(&config.editor, None),
        );

        Self {
            config,
            template_data: TemplateDataStore::new(),
            custom_templates,
            current_template: RwLock::new(current_template),
            editor: tokio::sync::Mutex::new(editor),
        }
    }

    /// Currently selected template, resolved to what will be rendered.
    pub fn current_template(&self) -> TemplateId {
        TemplateId::parse(&self.selected_template_id())
    }

    /// Currently selected id exactly as it was chosen.
    pub fn selected_template_id(&self) -> String {
        self.current_template
            .read()
            .expect("RwLock poisoned: another thread panicked while holding the lock")
            .clone()
    }

    /// Change the selected template.
    pub fn set_current_template(&self, template_id: impl Into<String>) {
        *self
            .current_template
            .write()
            .expect("RwLock poisoned: another thread panicked while holding the lock") =
            template_id.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_store::MemoryStorage;
    use tempfile::TempDir;

    #[test]
    fn test_default_template_from_config() {
        let mut config = AppConfig::default();
        config.general.default_template = "welcome".to_string();
        let state = AppState::with_storage(config, Arc::new(MemoryStorage::new()));
        assert_eq!(state.current_template(), TemplateId::parse("welcome"));
    }

    #[test]
    fn test_new_uses_configured_data_dir() {
        let dir = TempDir::new().expect("create temp dir");
        let mut config = AppConfig::default();
        config.storage.data_dir = Some(dir.path().to_path_buf());

        let state = AppState::new(config).expect("create state");
        state.custom_templates.add(mailcraft_core::NewCustomTemplate {
            name: "Persisted".to_string(),
            ..mailcraft_core::NewCustomTemplate::default()
        });

        assert!(dir.path().join("custom-email-templates.json").exists());
    }

    #[test]
    fn test_set_current_template() {
        let state = AppState::with_storage(AppConfig::default(), Arc::new(MemoryStorage::new()));
        state.set_current_template("minimal");
        assert_eq!(state.current_template().as_str(), "minimal");
    }

    #[test]
    fn test_unknown_selection_kept_verbatim() {
        let state = AppState::with_storage(AppConfig::default(), Arc::new(MemoryStorage::new()));
        state.set_current_template("foo");
        assert_eq!(state.selected_template_id(), "foo");
        assert_eq!(state.current_template(), TemplateId::default());
    }

    #[tokio::test]
    async fn test_editor_built_from_configured_sources() {
        let state = AppState::with_storage(AppConfig::default(), Arc::new(MemoryStorage::new()));
        let mut editor = state.editor.lock().await;

        let err = editor
            .mount(TemplateId::default(), &state.template_data.snapshot(), &[])
            .await
            .expect_err("no script host");
        assert!(matches!(
            err,
            mailcraft_editor::EditorError::AllSourcesFailed { attempted: 2 }
        ));
    }
}
