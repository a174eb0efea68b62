use crate::error::CommandError;
use crate::state::AppState;
use mailcraft_core::{TemplateData, TemplateDataPatch};
use std::path::Path;

pub fn get_template_data(state: &AppState) -> TemplateData {
    state.template_data.snapshot()
}

pub fn update_template_data(state: &AppState, patch: TemplateDataPatch) -> TemplateData {
    state.template_data.update(patch)
}

/// Read a JSON patch (camelCase keys, any subset of fields) from disk.
pub fn read_data_patch(path: &Path) -> Result<TemplateDataPatch, CommandError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_core::AppConfig;
    use mailcraft_store::MemoryStorage;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_get_reflects_updates() {
        let state = AppState::with_storage(AppConfig::default(), Arc::new(MemoryStorage::new()));
        assert_eq!(get_template_data(&state), TemplateData::default());

        update_template_data(
            &state,
            TemplateDataPatch {
                company_name: Some("Acme".to_string()),
                ..TemplateDataPatch::default()
            },
        );

        let current = get_template_data(&state);
        assert_eq!(current.company_name, "Acme");
        assert_eq!(current.heading, TemplateData::default().heading);
    }

    #[test]
    fn test_read_partial_patch() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"heading": "Sale", "companyLogoUrl": "https://x/logo.png"}"#)
            .expect("write patch");

        let patch = read_data_patch(&path).expect("read patch");
        assert_eq!(patch.heading.as_deref(), Some("Sale"));
        assert_eq!(patch.company_logo_url.as_deref(), Some("https://x/logo.png"));
        assert!(patch.subheading.is_none());
    }

    #[test]
    fn test_read_invalid_patch() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("data.json");
        std::fs::write(&path, "[1, 2").expect("write patch");

        let err = read_data_patch(&path).expect_err("invalid json");
        assert_eq!(err.code, "INVALID_DATA");
    }
}
