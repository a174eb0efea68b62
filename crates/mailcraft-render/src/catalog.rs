//! Display metadata for the template picker.

use crate::layouts::BuiltinLayout;
use mailcraft_core::CustomTemplate;
use serde::{Deserialize, Serialize};

/// Where a listed template comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Code-defined layout
    Builtin,
    /// User-authored template
    Custom,
}

/// One entry in the template picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    /// Template id as accepted by the resolver
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Grouping label
    pub category: String,
    /// Built-in or custom
    pub kind: TemplateKind,
}

impl From<BuiltinLayout> for TemplateSummary {
    fn from(layout: BuiltinLayout) -> Self {
        Self {
            id: layout.id().to_string(),
            name: layout.display_name().to_string(),
            description: layout.description().to_string(),
            category: layout.category().to_string(),
            kind: TemplateKind::Builtin,
        }
    }
}

impl From<&CustomTemplate> for TemplateSummary {
    fn from(template: &CustomTemplate) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            category: template.category.clone(),
            kind: TemplateKind::Custom,
        }
    }
}

/// List every selectable template: built-ins first, then customs in the
/// order given.
#[must_use]
pub fn catalog(custom_templates: &[CustomTemplate]) -> Vec<TemplateSummary> {
    BuiltinLayout::ALL
        .into_iter()
        .map(TemplateSummary::from)
        .chain(custom_templates.iter().map(TemplateSummary::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_core::Timestamp;

    #[test]
    fn test_builtins_only() {
        let entries = catalog(&[]);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["modern", "classic", "minimal", "promotional", "welcome"]);
        assert_eq!(entries[0].name, "Modern Newsletter");
        assert!(entries.iter().all(|e| e.kind == TemplateKind::Builtin));
    }

    #[test]
    fn test_customs_follow_builtins() {
        let now = Timestamp::now();
        let custom = CustomTemplate {
            id: "custom-1-abc".to_string(),
            name: "Launch".to_string(),
            description: "Product launch".to_string(),
            category: "Custom".to_string(),
            html: String::new(),
            css: String::new(),
            created_at: now,
            updated_at: now,
        };
        let entries = catalog(std::slice::from_ref(&custom));
        assert_eq!(entries.len(), BuiltinLayout::ALL.len() + 1);
        let last = entries.last().expect("custom entry");
        assert_eq!(last.id, "custom-1-abc");
        assert_eq!(last.kind, TemplateKind::Custom);
    }
}
