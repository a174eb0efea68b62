//! Notifications emitted by the editor.

use mailcraft_core::TemplateData;
use mailcraft_render::TemplateId;
use serde::Serialize;

/// Capacity of the saved-template channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Emitted whenever a template is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSaved {
    /// The assembled document
    pub html: String,
    /// Template that was being edited
    pub template_id: TemplateId,
    /// Data the document was rendered with
    pub data: TemplateData,
}
