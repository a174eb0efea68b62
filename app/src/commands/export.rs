use crate::error::CommandError;
use crate::state::AppState;
use mailcraft_render::TemplateId;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Save the selected template through the editor and write it to disk.
///
/// The document lands in `out_dir`, else the configured export directory,
/// else the working directory.
pub async fn export_template(
    state: &AppState,
    out_dir: Option<&Path>,
) -> Result<PathBuf, CommandError> {
    let selected = state.selected_template_id();
    let template_id: TemplateId = state.current_template();
    let data = state.template_data.snapshot();
    let customs = state.custom_templates.list();

    let mut editor = state.editor.lock().await;
    editor.unmount();
    if let Err(e) = editor.mount(template_id.clone(), &data, &customs).await {
        debug!(error = %e, "visual editor unavailable, using fallback editor");
        editor.use_fallback(&data, &customs)?;
    }

    editor.save(&data)?;
    let artifact = editor.export_named(&selected)?;

    let dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| state.config.export.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let path = artifact.write_to_dir(&dir)?;

    info!(template_id = %template_id, path = %path.display(), "template exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_core::AppConfig;
    use mailcraft_store::MemoryStorage;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_export_writes_document() {
        let dir = TempDir::new().expect("create temp dir");
        let state = AppState::with_storage(AppConfig::default(), Arc::new(MemoryStorage::new()));
        state.set_current_template("minimal");

        let path = export_template(&state, Some(dir.path()))
            .await
            .expect("export");

        let name = path.file_name().and_then(|n| n.to_str()).expect("file name");
        assert!(name.starts_with("minimal-email-template-"));
        assert!(name.ends_with(".html"));

        let contents = std::fs::read_to_string(&path).expect("read export");
        assert!(contents.starts_with("<!DOCTYPE html>"));
        assert!(contents.contains("John Smith"));
    }

    #[tokio::test]
    async fn test_export_uses_configured_dir() {
        let dir = TempDir::new().expect("create temp dir");
        let mut config = AppConfig::default();
        config.export.output_dir = Some(dir.path().join("out"));
        let state = AppState::with_storage(config, Arc::new(MemoryStorage::new()));

        let path = export_template(&state, None).await.expect("export");
        assert_eq!(path.parent(), Some(dir.path().join("out").as_path()));
    }

    #[tokio::test]
    async fn test_unknown_id_names_file_after_selection() {
        let dir = TempDir::new().expect("create temp dir");
        let state = AppState::with_storage(AppConfig::default(), Arc::new(MemoryStorage::new()));
        state.set_current_template("foo");

        let path = export_template(&state, Some(dir.path()))
            .await
            .expect("export");

        let name = path.file_name().and_then(|n| n.to_str()).expect("file name");
        assert!(name.starts_with("foo-email-template-"));
        let contents = std::fs::read_to_string(&path).expect("read export");
        assert!(contents.contains("linear-gradient(135deg"));
    }

    #[tokio::test]
    async fn test_repeated_exports() {
        let dir = TempDir::new().expect("create temp dir");
        let state = AppState::with_storage(AppConfig::default(), Arc::new(MemoryStorage::new()));

        export_template(&state, Some(dir.path())).await.expect("first export");
        export_template(&state, Some(dir.path())).await.expect("second export");
    }
}
