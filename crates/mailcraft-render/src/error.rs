//! Error types for the render subsystem.

use thiserror::Error;

/// Errors that can occur while rendering or exporting templates.
///
/// Rendering itself is total; these only surface from parsing and from
/// writing export artifacts.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Layout name is not one of the built-in layouts
    #[error("unknown built-in layout: {0}")]
    UnknownLayout(String),

    /// Unknown preview viewport name
    #[error("unknown viewport: {0}")]
    UnknownViewport(String),

    /// Failed to write an export artifact
    #[error("failed to write export artifact to {path}: {source}")]
    Write {
        /// Destination path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

impl From<RenderError> for mailcraft_core::MailcraftError {
    fn from(err: RenderError) -> Self {
        Self::Render(err.to_string())
    }
}
