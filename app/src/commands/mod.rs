//! Command handlers.

pub mod custom;
pub mod data;
pub mod export;
pub mod settings;
pub mod templates;
