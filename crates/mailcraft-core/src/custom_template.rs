//! User-authored templates.

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Id prefix reserved for user-authored templates.
///
/// Any template id starting with this prefix is resolved against the custom
/// template collection rather than the built-in layouts.
pub const CUSTOM_TEMPLATE_PREFIX: &str = "custom-";

/// An HTML/CSS pair written by the user, consuming `{{placeholder}}` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTemplate {
    /// Unique id, always prefixed with [`CUSTOM_TEMPLATE_PREFIX`]
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Display category
    pub category: String,
    /// Raw markup, may contain placeholder tokens
    pub html: String,
    /// Raw stylesheet, may contain placeholder tokens
    pub css: String,
    /// When the template was created
    pub created_at: Timestamp,
    /// When the template was last changed
    pub updated_at: Timestamp,
}

impl CustomTemplate {
    /// Whether `id` names a custom template.
    #[must_use]
    pub fn is_custom_id(id: &str) -> bool {
        id.starts_with(CUSTOM_TEMPLATE_PREFIX)
    }
}

/// Fields supplied when creating a custom template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct NewCustomTemplate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub html: String,
    pub css: String,
}

/// Partial update to a [`CustomTemplate`]. Ids and timestamps are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct CustomTemplateUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
}

impl CustomTemplateUpdate {
    /// Apply the present fields to `template`. Timestamps are left to the caller.
    pub fn apply_to(self, template: &mut CustomTemplate) {
        if let Some(name) = self.name {
            template.name = name;
        }
        if let Some(description) = self.description {
            template.description = description;
        }
        if let Some(category) = self.category {
            template.category = category;
        }
        if let Some(html) = self.html {
            template.html = html;
        }
        if let Some(css) = self.css {
            template.css = css;
        }
    }
}
