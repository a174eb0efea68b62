//! Editor sources built from configuration.
//!
//! Each configured `[[editor.sources]]` entry becomes one [`ConfiguredSource`].
//! Fetching a script needs a host that can run it (a webview, a browser
//! engine); without one every source reports a failure and the adapter
//! moves on to the next.

use crate::error::{EditorError, Result};
use crate::surface::{EditorLibrary, EditorSource};
use async_trait::async_trait;
use mailcraft_core::{EditorConfig, EditorSourceConfig};
use std::sync::Arc;
use tracing::debug;

/// Something that can fetch the editor script and stylesheet and hand back
/// the running library.
#[async_trait]
pub trait ScriptHost: Send + Sync {
    /// Load the library described by `source`.
    ///
    /// # Errors
    /// Returns error if either asset cannot be fetched or the library does
    /// not come up.
    async fn load_library(&self, source: &EditorSourceConfig) -> Result<Arc<dyn EditorLibrary>>;
}

/// An [`EditorSource`] backed by one configured location.
pub struct ConfiguredSource {
    config: EditorSourceConfig,
    host: Option<Arc<dyn ScriptHost>>,
}

impl ConfiguredSource {
    /// Source for `config`, loaded through `host` when one is available.
    #[must_use]
    pub fn new(config: EditorSourceConfig, host: Option<Arc<dyn ScriptHost>>) -> Self {
        Self { config, host }
    }

    /// Configured location.
    #[must_use]
    pub fn config(&self) -> &EditorSourceConfig {
        &self.config
    }
}

#[async_trait]
impl EditorSource for ConfiguredSource {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn load(&self) -> Result<Arc<dyn EditorLibrary>> {
        let Some(host) = &self.host else {
            return Err(EditorError::SourceFailed {
                source_name: self.config.name.clone(),
                reason: format!("no script host available to load {}", self.config.script_url),
            });
        };

        debug!(
            source = %self.config.name,
            script = %self.config.script_url,
            stylesheet = %self.config.stylesheet_url,
            "loading editor assets"
        );
        host.load_library(&self.config).await
    }
}

/// Build the adapter's source list from `config.sources`, in order.
#[must_use]
pub fn configured_sources(
    config: &EditorConfig,
    host: Option<Arc<dyn ScriptHost>>,
) -> Vec<Arc<dyn EditorSource>> {
    config
        .sources
        .iter()
        .map(|source| {
            Arc::new(ConfiguredSource::new(source.clone(), host.clone())) as Arc<dyn EditorSource>
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{AdapterState, EditorAdapter};
    use crate::surface::{EditorSurface, SurfaceConfig};
    use mailcraft_core::TemplateData;
    use mailcraft_render::TemplateId;
    use std::sync::Mutex;

    struct StaticSurface(String);

    impl EditorSurface for StaticSurface {
        fn set_components(&mut self, html: &str) -> Result<()> {
            self.0 = html.to_string();
            Ok(())
        }

        fn html(&self) -> Result<String> {
            Ok(self.0.clone())
        }

        fn css(&self) -> Result<String> {
            Ok(String::new())
        }

        fn destroy(&mut self) -> Result<()> {
            Ok(())
        }
    }

    struct StaticLibrary;

    impl EditorLibrary for StaticLibrary {
        fn init(&self, _config: &SurfaceConfig, initial_html: &str) -> Result<Box<dyn EditorSurface>> {
            Ok(Box::new(StaticSurface(initial_html.to_string())))
        }
    }

    /// Fails every script url containing `unreachable`, records what it was asked for.
    #[derive(Default)]
    struct RecordingHost {
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ScriptHost for RecordingHost {
        async fn load_library(
            &self,
            source: &EditorSourceConfig,
        ) -> Result<Arc<dyn EditorLibrary>> {
            self.requested.lock().unwrap().push(source.script_url.clone());
            if source.script_url.contains("unreachable") {
                return Err(EditorError::SourceFailed {
                    source_name: source.name.clone(),
                    reason: "connection refused".to_string(),
                });
            }
            Ok(Arc::new(StaticLibrary))
        }
    }

    fn config_with(sources: Vec<EditorSourceConfig>) -> EditorConfig {
        EditorConfig {
            settle_delay_ms: 0,
            sources,
            ..EditorConfig::default()
        }
    }

    fn source(name: &str, script_url: &str) -> EditorSourceConfig {
        EditorSourceConfig {
            name: name.to_string(),
            script_url: script_url.to_string(),
            stylesheet_url: format!("{script_url}.css"),
        }
    }

    #[test]
    fn test_sources_follow_config_order() {
        let sources = configured_sources(&EditorConfig::default(), None);
        let names: Vec<&str> = sources.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["unpkg", "jsdelivr"]);
    }

    #[tokio::test]
    async fn test_without_host_every_source_fails() {
        let config = config_with(EditorConfig::default().sources);
        let sources = configured_sources(&config, None);
        let mut adapter = EditorAdapter::new(config, sources);

        let err = adapter
            .mount(TemplateId::default(), &TemplateData::default(), &[])
            .await
            .expect_err("no host");

        assert!(matches!(err, EditorError::AllSourcesFailed { attempted: 2 }));
        assert!(matches!(adapter.state(), AdapterState::Failed { .. }));
    }

    #[tokio::test]
    async fn test_host_fails_over_to_next_source() {
        let config = config_with(vec![
            source("primary", "https://unreachable.example/editor.js"),
            source("mirror", "https://mirror.example/editor.js"),
        ]);
        let host = Arc::new(RecordingHost::default());
        let sources = configured_sources(&config, Some(host.clone() as Arc<dyn ScriptHost>));
        let mut adapter = EditorAdapter::new(config, sources);

        adapter
            .mount(TemplateId::default(), &TemplateData::default(), &[])
            .await
            .expect("mirror loads");

        assert_eq!(adapter.state(), &AdapterState::Ready);
        assert_eq!(
            *host.requested.lock().unwrap(),
            vec![
                "https://unreachable.example/editor.js".to_string(),
                "https://mirror.example/editor.js".to_string(),
            ]
        );
    }
}
