//! Visual editor adapter.
//!
//! Loads a third-party drag-and-drop editor from a list of sources, keeps
//! it in sync with the renderer, and falls back to plain-text editing when
//! the library cannot be loaded.
//!
//! # Architecture
//!
//! - **Adapter** ([`adapter`]): The lifecycle state machine and save/export
//! - **Sources** ([`sources`]): Library locations built from configuration
//! - **Surface** ([`surface`]): Contracts the external library is driven through
//! - **Fallback** ([`fallback`]): Plain-text editing when no library loads
//! - **Blocks** ([`blocks`]): The drag-and-drop palette
//! - **Events** ([`events`]): Saved-template notifications

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod adapter;
pub mod blocks;
pub mod error;
pub mod events;
pub mod fallback;
pub mod sources;
pub mod surface;

pub use adapter::{AdapterState, EditorAdapter, CUSTOM_CATEGORY, DEFAULT_CUSTOM_DESCRIPTION};
pub use blocks::{default_blocks, Block, BlockCategory};
pub use error::{EditorError, Result};
pub use events::TemplateSaved;
pub use fallback::FallbackEditor;
pub use sources::{configured_sources, ConfiguredSource, ScriptHost};
pub use surface::{EditorLibrary, EditorSource, EditorSurface, SurfaceConfig};
