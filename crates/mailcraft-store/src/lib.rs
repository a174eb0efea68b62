//! Mailcraft Store - Session state for template data and custom templates.
//!
//! # Architecture
//!
//! - **Template data** ([`template_data`]): The single shared branding/content record
//! - **Custom templates** ([`custom_templates`]): User-authored templates, written through on every change
//! - **Storage** ([`storage`]): Key-value persistence backends (file and in-memory)
//! - **Codec** ([`codec`]): JSON wire format of the persisted collection
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use mailcraft_core::NewCustomTemplate;
//! use mailcraft_store::{CustomTemplateStore, MemoryStorage};
//!
//! let store = CustomTemplateStore::open(Arc::new(MemoryStorage::new()), "custom-email-templates");
//! let template = store.add(NewCustomTemplate {
//!     name: "Launch".to_string(),
//!     html: "<h1>{{heading}}</h1>".to_string(),
//!     ..NewCustomTemplate::default()
//! });
//! assert!(template.id.starts_with("custom-"));
//! assert_eq!(store.list().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod codec;
pub mod custom_templates;
pub mod error;
pub mod storage;
pub mod template_data;

// Re-export commonly used types
pub use codec::{deserialize, serialize};
pub use custom_templates::CustomTemplateStore;
pub use error::{Result, StoreError};
pub use storage::{FileStorage, MemoryStorage, TemplateStorage};
pub use template_data::TemplateDataStore;
