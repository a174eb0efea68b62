//! The persisted collection of user-authored templates.

use crate::codec;
use crate::error::{Result, StoreError};
use crate::storage::TemplateStorage;
use mailcraft_core::{
    CustomTemplate, CustomTemplateUpdate, NewCustomTemplate, Timestamp, CUSTOM_TEMPLATE_PREFIX,
};
use rand::Rng;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Length of the random id suffix.
const ID_SUFFIX_LEN: usize = 9;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Build an id of the form `custom-<unixMillis>-<9 base36 chars>`.
fn generate_id(created_at: Timestamp) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();
    format!(
        "{CUSTOM_TEMPLATE_PREFIX}{}-{suffix}",
        created_at.timestamp_millis()
    )
}

/// Custom templates held in memory and written through to storage.
///
/// The in-memory collection is authoritative for the session. Every
/// mutation rewrites the whole collection under the store's key; a failed
/// write is logged and the session carries on.
#[derive(Clone)]
pub struct CustomTemplateStore {
    storage: Arc<dyn TemplateStorage>,
    key: String,
    templates: Arc<RwLock<Vec<CustomTemplate>>>,
}

impl CustomTemplateStore {
    /// Load the collection stored under `key`.
    ///
    /// Missing, unreadable or malformed data starts the session empty.
    #[must_use]
    pub fn open(storage: Arc<dyn TemplateStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let templates = match storage.load(&key) {
            Ok(Some(raw)) => codec::deserialize(&raw).unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "stored custom templates are malformed, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "failed to read custom templates, starting empty");
                Vec::new()
            }
        };

        info!(key = %key, count = templates.len(), "loaded custom templates");

        Self {
            storage,
            key,
            templates: Arc::new(RwLock::new(templates)),
        }
    }

    /// Storage key of the collection.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshot of every template, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<CustomTemplate> {
        self.templates
            .read()
            .expect("acquire read lock on templates")
            .clone()
    }

    /// Look up a template by id.
    #[must_use]
    pub fn get(&self, template_id: &str) -> Option<CustomTemplate> {
        self.templates
            .read()
            .expect("acquire read lock on templates")
            .iter()
            .find(|t| t.id == template_id)
            .cloned()
    }

    /// Number of stored templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates
            .read()
            .expect("acquire read lock on templates")
            .len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a template with a fresh id. `created_at` equals `updated_at`.
    pub fn add(&self, new: NewCustomTemplate) -> CustomTemplate {
        let mut templates = self
            .templates
            .write()
            .expect("acquire write lock on templates");

        let now = Timestamp::now();
        let mut id = generate_id(now);
        while templates.iter().any(|t| t.id == id) {
            id = generate_id(now);
        }

        let template = CustomTemplate {
            id,
            name: new.name,
            description: new.description,
            category: new.category,
            html: new.html,
            css: new.css,
            created_at: now,
            updated_at: now,
        };
        templates.push(template.clone());
        info!(template_id = %template.id, name = %template.name, "added custom template");

        self.persist(&templates);
        template
    }

    /// Apply `update` to the template with `template_id` and bump `updated_at`.
    pub fn update(&self, template_id: &str, update: CustomTemplateUpdate) -> Result<CustomTemplate> {
        let mut templates = self
            .templates
            .write()
            .expect("acquire write lock on templates");

        let template = templates
            .iter_mut()
            .find(|t| t.id == template_id)
            .ok_or_else(|| StoreError::NotFound {
                template_id: template_id.to_string(),
            })?;

        update.apply_to(template);
        template.updated_at = Timestamp::now_after(template.updated_at);
        let updated = template.clone();
        debug!(template_id = %template_id, "updated custom template");

        self.persist(&templates);
        Ok(updated)
    }

    /// Remove the template with `template_id`, returning it.
    pub fn delete(&self, template_id: &str) -> Result<CustomTemplate> {
        let mut templates = self
            .templates
            .write()
            .expect("acquire write lock on templates");

        let index = templates
            .iter()
            .position(|t| t.id == template_id)
            .ok_or_else(|| StoreError::NotFound {
                template_id: template_id.to_string(),
            })?;

        let removed = templates.remove(index);
        info!(template_id = %template_id, "deleted custom template");

        self.persist(&templates);
        Ok(removed)
    }

    /// Copy a template under a new id and name.
    ///
    /// The copy's description is the source description prefixed with
    /// "Copy of ".
    pub fn duplicate(&self, template_id: &str, new_name: &str) -> Result<CustomTemplate> {
        let source = self.get(template_id).ok_or_else(|| StoreError::NotFound {
            template_id: template_id.to_string(),
        })?;

        Ok(self.add(NewCustomTemplate {
            name: new_name.to_string(),
            description: format!("Copy of {}", source.description),
            category: source.category,
            html: source.html,
            css: source.css,
        }))
    }

    fn persist(&self, templates: &[CustomTemplate]) {
        let result = codec::serialize(templates).and_then(|raw| self.storage.save(&self.key, &raw));
        if let Err(e) = result {
            warn!(key = %self.key, error = %e, "failed to persist custom templates");
        }
    }
}

impl std::fmt::Debug for CustomTemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomTemplateStore")
            .field("key", &self.key)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
