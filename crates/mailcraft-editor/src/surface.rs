//! Contracts for the external visual editor.
//!
//! The visual editor is a third-party library fetched at runtime. A
//! [`EditorSource`] knows one place to fetch it from, the loaded
//! [`EditorLibrary`] builds live [`EditorSurface`] instances.

use crate::blocks::Block;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One place the editor library can be loaded from.
#[async_trait]
pub trait EditorSource: Send + Sync {
    /// Short name used in logs, e.g. `"unpkg"`.
    fn name(&self) -> &str;

    /// Fetch and initialise the library.
    ///
    /// # Errors
    /// Returns error if the library cannot be fetched or does not come up.
    async fn load(&self) -> Result<Arc<dyn EditorLibrary>>;
}

/// A loaded editor library.
pub trait EditorLibrary: Send + Sync {
    /// Build a live editor showing `initial_html`.
    ///
    /// # Errors
    /// Returns error if the instance cannot be created.
    fn init(&self, config: &SurfaceConfig, initial_html: &str) -> Result<Box<dyn EditorSurface>>;
}

/// A live editor instance.
pub trait EditorSurface: Send + Sync {
    /// Replace the editable content.
    fn set_components(&mut self, html: &str) -> Result<()>;

    /// Current markup.
    fn html(&self) -> Result<String>;

    /// Current stylesheet.
    fn css(&self) -> Result<String>;

    /// Tear the instance down.
    fn destroy(&mut self) -> Result<()>;
}

/// Settings handed to [`EditorLibrary::init`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Canvas height, CSS units
    pub height: String,
    /// Canvas width, CSS units
    pub width: String,
    /// Blocks offered in the block palette
    pub blocks: Vec<Block>,
}
