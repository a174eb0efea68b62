//! Error type returned by command handlers.

use mailcraft_core::ConfigError;
use mailcraft_editor::EditorError;
use mailcraft_render::RenderError;
use mailcraft_store::StoreError;
use serde::Serialize;

/// Serializable error for command handlers.
#[derive(Debug, Serialize)]
pub struct CommandError {
    /// Error code for programmatic handling (e.g., "TEMPLATE_NOT_FOUND")
    pub code: String,
    /// User-friendly error message
    pub message: String,
    /// Optional debugging context
    pub details: Option<serde_json::Value>,
}

impl CommandError {
    /// Create a new command error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a command error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl std::error::Error for CommandError {}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { template_id } => Self::with_details(
                "TEMPLATE_NOT_FOUND",
                "Custom template does not exist",
                serde_json::json!({ "templateId": template_id }),
            ),
            StoreError::Io { path, source } => Self::with_details(
                "STORAGE_ERROR",
                format!("Storage error: {source}"),
                serde_json::json!({ "path": path }),
            ),
            StoreError::Serialization(e) => {
                Self::new("SERIALIZATION_ERROR", format!("Serialization error: {e}"))
            }
        }
    }
}

impl From<EditorError> for CommandError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::NothingSaved => {
                Self::new("NOTHING_SAVED", "Save the template before exporting")
            }
            EditorError::InvalidState { action, state } => Self::with_details(
                "EDITOR_NOT_READY",
                format!("Cannot {action} right now"),
                serde_json::json!({ "state": state }),
            ),
            other => Self::new("EDITOR_ERROR", format!("Editor error: {other}")),
        }
    }
}

impl From<RenderError> for CommandError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::UnknownLayout(id) => {
                Self::new("UNKNOWN_LAYOUT", format!("Unknown layout: {id}"))
            }
            RenderError::UnknownViewport(name) => {
                Self::new("UNKNOWN_VIEWPORT", format!("Unknown viewport: {name}"))
            }
            RenderError::Write { path, source } => Self::with_details(
                "EXPORT_FAILED",
                format!("Export failed: {source}"),
                serde_json::json!({ "path": path }),
            ),
        }
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        Self::new("CONFIG_ERROR", format!("Configuration error: {err}"))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::new("INVALID_DATA", format!("Invalid JSON: {err}"))
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        Self::new("FILESYSTEM_ERROR", format!("Filesystem error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_new() {
        let err = CommandError::new("TEST_CODE", "Test message");
        assert_eq!(err.code, "TEST_CODE");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_store_not_found_conversion() {
        let err: CommandError = StoreError::NotFound {
            template_id: "custom-1-abc".to_string(),
        }
        .into();
        assert_eq!(err.code, "TEMPLATE_NOT_FOUND");
        assert_eq!(
            err.details,
            Some(serde_json::json!({ "templateId": "custom-1-abc" }))
        );
    }

    #[test]
    fn test_nothing_saved_conversion() {
        let err: CommandError = EditorError::NothingSaved.into();
        assert_eq!(err.code, "NOTHING_SAVED");
    }

    #[test]
    fn test_unknown_viewport_conversion() {
        let err: CommandError = RenderError::UnknownViewport("watch".to_string()).into();
        assert_eq!(err.code, "UNKNOWN_VIEWPORT");
        assert!(err.message.contains("watch"));
    }

    #[test]
    fn test_error_serialization() {
        let err = CommandError::new("TEST_CODE", "Test message");
        let json = serde_json::to_string(&err).expect("serialize error");
        assert!(json.contains("TEST_CODE"));
        assert!(json.contains("Test message"));
    }
}
