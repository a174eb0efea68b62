//! Template resolution: one id in, one HTML fragment out.

use crate::layouts::render_builtin;
use crate::substitution::substitute;
use crate::template_id::TemplateId;
use mailcraft_core::{CustomTemplate, TemplateData};
use tracing::warn;

/// Render the fragment for `template_id`.
///
/// Built-in layouts inline their own styles. Custom templates are
/// substituted against `data` and returned as `<style>{css}</style>{html}`.
/// A custom id missing from `custom_templates` yields an empty fragment.
///
/// Total: never fails and never panics.
#[must_use]
pub fn resolve(
    template_id: &TemplateId,
    data: &TemplateData,
    custom_templates: &[CustomTemplate],
) -> String {
    match template_id {
        TemplateId::Builtin(layout) => render_builtin(*layout, data),
        TemplateId::Custom(id) => match custom_templates.iter().find(|t| &t.id == id) {
            Some(template) => {
                let (html, css) = substitute(&template.html, &template.css, data);
                format!("<style>{css}</style>{html}")
            }
            None => {
                warn!(template_id = %id, "custom template not found, rendering empty output");
                String::new()
            }
        },
    }
}

/// Parse `template_id` and [`resolve`] it.
#[must_use]
pub fn resolve_str(
    template_id: &str,
    data: &TemplateData,
    custom_templates: &[CustomTemplate],
) -> String {
    resolve(&TemplateId::parse(template_id), data, custom_templates)
}
