//! Wire format of the persisted custom template collection.
//!
//! A JSON array of camelCase objects with RFC 3339 timestamps.

use crate::error::Result;
use mailcraft_core::CustomTemplate;

/// Encode the collection for storage.
pub fn serialize(templates: &[CustomTemplate]) -> Result<String> {
    Ok(serde_json::to_string(templates)?)
}

/// Decode a stored collection.
pub fn deserialize(raw: &str) -> Result<Vec<CustomTemplate>> {
    Ok(serde_json::from_str(raw)?)
}
