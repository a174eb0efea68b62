//! Mailcraft Render - Turns template data into email-ready HTML.
//!
//! Every rendering path in the application goes through this crate, so the
//! editor, the preview pane and the exporter always agree on output.
//!
//! # Architecture
//!
//! - **Placeholders** ([`placeholder`]): The closed set of `{{token}}` names custom templates may use
//! - **Substitution** ([`substitution`]): Single-pass token replacement over an HTML/CSS pair
//! - **Layouts** ([`layouts`]): The five built-in layouts, rendered by direct interpolation
//! - **Template ids** ([`template_id`]): Closed sum type over built-in layouts and custom ids
//! - **Resolver** ([`resolver`]): Dispatches an id to a layout or a custom template
//! - **Assembler** ([`assembler`]): Wraps a fragment in a complete email-client-safe document
//! - **Preview** ([`preview`]): Viewport framing for on-screen previews
//! - **Catalog** ([`catalog`]): Display metadata for the template picker
//!
//! # Example
//!
//! ```rust
//! use mailcraft_core::TemplateData;
//! use mailcraft_render::{assemble, resolve, TemplateId};
//!
//! let data = TemplateData::default();
//! let fragment = resolve(&TemplateId::parse("classic"), &data, &[]);
//! let document = assemble(&fragment, "", &data);
//! assert!(document.starts_with("<!DOCTYPE html>"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod assembler;
pub mod catalog;
pub mod error;
pub mod layouts;
pub mod placeholder;
pub mod preview;
pub mod resolver;
pub mod substitution;
pub mod template_id;

// Re-export commonly used types
pub use assembler::{assemble, export_file_name, ExportArtifact, EXPORT_MIME_TYPE};
pub use catalog::{catalog, TemplateKind, TemplateSummary};
pub use error::{RenderError, Result};
pub use layouts::{render_builtin, BuiltinLayout};
pub use placeholder::Placeholder;
pub use preview::{render_preview, PreviewFrame, Viewport};
pub use resolver::{resolve, resolve_str};
pub use substitution::substitute;
pub use template_id::TemplateId;
