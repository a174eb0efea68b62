//! Error types for the editor subsystem.

use thiserror::Error;

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors that can occur while acquiring or driving the editor.
#[derive(Debug, Error)]
pub enum EditorError {
    /// One library source could not be loaded
    #[error("editor source {source_name} failed: {reason}")]
    SourceFailed {
        /// Source that failed
        source_name: String,
        /// What went wrong
        reason: String,
    },

    /// One library source did not answer in time
    #[error("editor source {source_name} timed out after {timeout_ms}ms")]
    Timeout {
        /// Source that timed out
        source_name: String,
        /// Per-attempt bound that was exceeded
        timeout_ms: u64,
    },

    /// The adapter was built with an empty source list
    #[error("no editor sources configured")]
    NoSources,

    /// Every source was tried and none loaded
    #[error("failed to load the editor from all {attempted} sources")]
    AllSourcesFailed {
        /// Number of sources tried
        attempted: usize,
    },

    /// The loaded library could not build an instance
    #[error("editor initialization failed: {0}")]
    Init(String),

    /// A live instance rejected an operation
    #[error("editor surface error: {0}")]
    Surface(String),

    /// Operation not allowed in the current lifecycle state
    #[error("cannot {action} while editor is {state}")]
    InvalidState {
        /// Attempted operation
        action: &'static str,
        /// State the adapter was in
        state: String,
    },

    /// Export requested before any save
    #[error("nothing has been saved yet")]
    NothingSaved,
}

impl From<EditorError> for mailcraft_core::MailcraftError {
    fn from(err: EditorError) -> Self {
        Self::Editor(err.to_string())
    }
}
