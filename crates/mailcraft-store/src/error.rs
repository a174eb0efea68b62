//! Error types for the store subsystem.

use thiserror::Error;

/// Errors that can occur in store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No custom template with this id
    #[error("custom template not found: {template_id}")]
    NotFound {
        /// The id that was looked up
        template_id: String,
    },

    /// Failed to read or write a storage entry
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        /// File backing the entry
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Persisted collection could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<StoreError> for mailcraft_core::MailcraftError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound {
            template_id: "custom-1-abc".to_string(),
        };
        assert_eq!(err.to_string(), "custom template not found: custom-1-abc");
    }

    #[test]
    fn test_converts_to_core_error() {
        let err: mailcraft_core::MailcraftError = StoreError::NotFound {
            template_id: "x".to_string(),
        }
        .into();
        assert!(matches!(err, mailcraft_core::MailcraftError::Store(_)));
    }
}
