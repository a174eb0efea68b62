use crate::error::CommandError;
use crate::state::AppState;
use mailcraft_core::{CustomTemplate, CustomTemplateUpdate, NewCustomTemplate};

pub fn list_custom_templates(state: &AppState) -> Vec<CustomTemplate> {
    state.custom_templates.list()
}

pub fn add_custom_template(state: &AppState, template: NewCustomTemplate) -> CustomTemplate {
    state.custom_templates.add(template)
}

pub fn update_custom_template(
    state: &AppState,
    template_id: &str,
    update: CustomTemplateUpdate,
) -> Result<CustomTemplate, CommandError> {
    Ok(state.custom_templates.update(template_id, update)?)
}

/// Delete a custom template. Deselects it if it was the current template.
pub fn delete_custom_template(
    state: &AppState,
    template_id: &str,
) -> Result<CustomTemplate, CommandError> {
    let removed = state.custom_templates.delete(template_id)?;
    if state.selected_template_id() == template_id {
        state.set_current_template(mailcraft_render::TemplateId::default());
    }
    Ok(removed)
}

pub fn duplicate_custom_template(
    state: &AppState,
    template_id: &str,
    new_name: &str,
) -> Result<CustomTemplate, CommandError> {
    Ok(state.custom_templates.duplicate(template_id, new_name)?)
}
