//! Template identifiers.

use crate::layouts::BuiltinLayout;
use mailcraft_core::CustomTemplate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// What a template id refers to.
///
/// Parsing a string is total: custom-prefixed ids become [`TemplateId::Custom`],
/// known layout names become [`TemplateId::Builtin`], and anything else falls
/// back to the modern layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TemplateId {
    /// A code-defined layout
    Builtin(BuiltinLayout),
    /// A user-authored template, by full id (prefix included)
    Custom(String),
}

impl TemplateId {
    /// Parse an id as selected in the template picker.
    #[must_use]
    pub fn parse(id: &str) -> Self {
        if CustomTemplate::is_custom_id(id) {
            return Self::Custom(id.to_string());
        }
        match id.parse::<BuiltinLayout>() {
            Ok(layout) => Self::Builtin(layout),
            Err(_) => {
                debug!(template_id = %id, "unknown template id, falling back to modern");
                Self::Builtin(BuiltinLayout::Modern)
            }
        }
    }

    /// Id string as used in filenames and the picker.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Builtin(layout) => layout.id(),
            Self::Custom(id) => id,
        }
    }

    /// Whether this refers to a user-authored template.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::Builtin(BuiltinLayout::default())
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<BuiltinLayout> for TemplateId {
    fn from(layout: BuiltinLayout) -> Self {
        Self::Builtin(layout)
    }
}

impl From<String> for TemplateId {
    fn from(id: String) -> Self {
        Self::parse(&id)
    }
}

impl From<TemplateId> for String {
    fn from(id: TemplateId) -> Self {
        id.as_str().to_string()
    }
}
