//! Core error types for the Mailcraft application.
//!
//! This module defines the central error type used across all subsystems.
//! Each subsystem error is represented as a variant for clear error propagation.

use thiserror::Error;

/// Central error type for all Mailcraft operations.
#[derive(Error, Debug)]
pub enum MailcraftError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rendering errors (layout lookup, assembly)
    #[error("render error: {0}")]
    Render(String),

    /// Custom template store errors (lookup, persistence)
    #[error("store error: {0}")]
    Store(String),

    /// Editing surface errors (library acquisition, instance lifecycle)
    #[error("editor error: {0}")]
    Editor(String),

    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `MailcraftError`.
pub type Result<T> = std::result::Result<T, MailcraftError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
