//! Mailcraft Core - Foundation crate for the Mailcraft email template editor.
//!
//! This crate provides the canonical template data record, shared types,
//! error handling and configuration management that all other Mailcraft
//! crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes (`Timestamp`)
//! - [`template_data`] - The single record of branding and content driving every render
//! - [`custom_template`] - User-authored HTML/CSS templates and their patches
//!
//! # Example
//!
//! ```rust
//! use mailcraft_core::{AppConfig, TemplateData, TemplateDataPatch};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.general.default_template, "modern");
//!
//! let mut data = TemplateData::default();
//! data.apply(TemplateDataPatch {
//!     heading: Some("Spring Sale".to_string()),
//!     ..TemplateDataPatch::default()
//! });
//! assert_eq!(data.heading, "Spring Sale");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod custom_template;
pub mod error;
pub mod template_data;
pub mod types;

// Re-export commonly used types
pub use config::{
    AppConfig, EditorConfig, EditorSourceConfig, ExportConfig, GeneralConfig, StorageConfig,
};
pub use custom_template::{
    CustomTemplate, CustomTemplateUpdate, NewCustomTemplate, CUSTOM_TEMPLATE_PREFIX,
};
pub use error::{ConfigError, ConfigResult, MailcraftError, Result};
pub use template_data::{Content, SocialLinks, TemplateData, TemplateDataPatch, Testimonial};
pub use types::Timestamp;
