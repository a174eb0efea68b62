//! The session's single template data record.

use mailcraft_core::{TemplateData, TemplateDataPatch};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Shared holder of the [`TemplateData`] every render reads from.
///
/// Updates are whole-record merges under one write lock, so readers only
/// ever see a record before or after a patch, never part way through.
#[derive(Debug, Clone, Default)]
pub struct TemplateDataStore {
    data: Arc<RwLock<TemplateData>>,
}

impl TemplateDataStore {
    /// Store seeded with the session defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `data`.
    #[must_use]
    pub fn with_data(data: TemplateData) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Consistent copy of the current record.
    #[must_use]
    pub fn snapshot(&self) -> TemplateData {
        self.data
            .read()
            .expect("acquire read lock on template data")
            .clone()
    }

    /// Merge `patch` into the record and return the result.
    pub fn update(&self, patch: TemplateDataPatch) -> TemplateData {
        let mut data = self
            .data
            .write()
            .expect("acquire write lock on template data");
        data.apply(patch);
        debug!(heading = %data.heading, company = %data.company_name, "template data updated");
        data.clone()
    }

    /// Replace the whole record.
    pub fn replace(&self, data: TemplateData) {
        *self
            .data
            .write()
            .expect("acquire write lock on template data") = data;
    }

    /// Restore the session defaults.
    pub fn reset(&self) {
        self.replace(TemplateData::default());
    }
}
