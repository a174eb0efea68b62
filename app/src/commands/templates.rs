use crate::state::AppState;
use mailcraft_render::{
    catalog, render_preview, Placeholder, PreviewFrame, TemplateId, TemplateSummary, Viewport,
};
use serde::Serialize;
use tracing::debug;

/// One entry of the variables guide.
#[derive(Debug, Clone, Serialize)]
pub struct VariableInfo {
    pub token: String,
    pub description: &'static str,
    pub example: &'static str,
}

pub fn list_templates(state: &AppState) -> Vec<TemplateSummary> {
    catalog(&state.custom_templates.list())
}

pub fn select_template(state: &AppState, template_id: &str) -> TemplateId {
    let id = TemplateId::parse(template_id);
    debug!(template_id = %id, "selected template");
    state.set_current_template(template_id);
    id
}

/// Render the selected template for on-screen preview.
pub fn render_template(state: &AppState, viewport: Viewport) -> PreviewFrame {
    let data = state.template_data.snapshot();
    render_preview(
        &state.current_template(),
        &data,
        &state.custom_templates.list(),
        viewport,
    )
}

pub fn list_variables() -> Vec<VariableInfo> {
    Placeholder::ALL
        .iter()
        .map(|p| VariableInfo {
            token: p.token(),
            description: p.description(),
            example: p.example(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_core::AppConfig;
    use mailcraft_store::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_render_follows_selection() {
        let state = AppState::with_storage(AppConfig::default(), Arc::new(MemoryStorage::new()));
        select_template(&state, "classic");
        let frame = render_template(&state, Viewport::Tablet);
        assert!(frame.fragment.contains("Dear Valued Customer,"));
        assert_eq!(frame.viewport, Viewport::Tablet);
    }

    #[test]
    fn test_variables_guide() {
        let vars = list_variables();
        assert_eq!(vars.len(), 14);
        assert_eq!(vars[0].token, "{{companyName}}");
    }
}
