//! Lifecycle of the visual editor.
//!
//! ```text
//! Uninitialized -> Loading -> Ready
//!                          -> Failed -> Loading (retry)
//!                                    -> FallbackReady
//! ```

use crate::blocks::default_blocks;
use crate::error::{EditorError, Result};
use crate::events::{TemplateSaved, EVENT_CHANNEL_CAPACITY};
use crate::fallback::FallbackEditor;
use crate::surface::{EditorLibrary, EditorSource, EditorSurface, SurfaceConfig};
use mailcraft_core::{CustomTemplate, EditorConfig, NewCustomTemplate, TemplateData};
use mailcraft_render::{assemble, resolve, ExportArtifact, TemplateId};
use mailcraft_store::CustomTemplateStore;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Category given to templates captured from the editor.
pub const CUSTOM_CATEGORY: &str = "Custom";

/// Description used when the user does not supply one.
pub const DEFAULT_CUSTOM_DESCRIPTION: &str = "Custom template created from editor";

/// Where the adapter is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AdapterState {
    /// Not mounted
    Uninitialized,
    /// Acquiring the library
    Loading,
    /// Visual editor live
    Ready,
    /// Acquisition or initialisation failed
    Failed {
        /// What went wrong
        reason: String,
    },
    /// Plain-text editor live
    FallbackReady,
}

impl fmt::Display for AdapterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("uninitialized"),
            Self::Loading => f.write_str("loading"),
            Self::Ready => f.write_str("ready"),
            Self::Failed { .. } => f.write_str("failed"),
            Self::FallbackReady => f.write_str("fallback"),
        }
    }
}

/// Bridges the external editor to the renderer.
///
/// Content always comes from [`resolve`], so the editor shows exactly what
/// the preview and export paths produce.
pub struct EditorAdapter {
    config: EditorConfig,
    sources: Vec<Arc<dyn EditorSource>>,
    state: AdapterState,
    template_id: TemplateId,
    surface: Option<Box<dyn EditorSurface>>,
    fallback: Option<FallbackEditor>,
    saved: Option<String>,
    events: broadcast::Sender<TemplateSaved>,
}

impl EditorAdapter {
    /// Create an unmounted adapter that will try `sources` in order.
    #[must_use]
    pub fn new(config: EditorConfig, sources: Vec<Arc<dyn EditorSource>>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            config,
            sources,
            state: AdapterState::Uninitialized,
            template_id: TemplateId::default(),
            surface: None,
            fallback: None,
            saved: None,
            events,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &AdapterState {
        &self.state
    }

    /// Why the last acquisition failed, while in the failed state.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.state {
            AdapterState::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Template currently shown.
    #[must_use]
    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    /// Last saved document, if any.
    #[must_use]
    pub fn saved_html(&self) -> Option<&str> {
        self.saved.as_deref()
    }

    /// Plain-text editor, while in fallback mode.
    pub fn fallback_mut(&mut self) -> Option<&mut FallbackEditor> {
        self.fallback.as_mut()
    }

    /// Listen for [`TemplateSaved`] notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TemplateSaved> {
        self.events.subscribe()
    }

    /// Load the editor and show `template_id`.
    ///
    /// On failure the adapter moves to [`AdapterState::Failed`] and the
    /// error is returned. Dropping the future mid-acquisition abandons it;
    /// call [`EditorAdapter::unmount`] to reset.
    pub async fn mount(
        &mut self,
        template_id: TemplateId,
        data: &TemplateData,
        custom_templates: &[CustomTemplate],
    ) -> Result<()> {
        if self.state != AdapterState::Uninitialized {
            return Err(self.invalid("mount"));
        }
        self.template_id = template_id;
        self.acquire(data, custom_templates).await
    }

    /// Run acquisition again after a failure.
    pub async fn retry(
        &mut self,
        data: &TemplateData,
        custom_templates: &[CustomTemplate],
    ) -> Result<()> {
        if !matches!(self.state, AdapterState::Failed { .. }) {
            return Err(self.invalid("retry"));
        }
        info!(template_id = %self.template_id, "retrying editor load");
        self.acquire(data, custom_templates).await
    }

    /// Give up on the visual editor and switch to plain-text editing.
    pub fn use_fallback(
        &mut self,
        data: &TemplateData,
        custom_templates: &[CustomTemplate],
    ) -> Result<()> {
        if !matches!(self.state, AdapterState::Failed { .. }) {
            return Err(self.invalid("use fallback"));
        }
        let html = resolve(&self.template_id, data, custom_templates);
        self.fallback = Some(FallbackEditor::seeded(html));
        self.state = AdapterState::FallbackReady;
        info!(template_id = %self.template_id, "using fallback editor");
        Ok(())
    }

    /// Push fresh render output for `template_id` into the live editor.
    ///
    /// Outside the ready states only the selection is recorded.
    pub fn sync(
        &mut self,
        template_id: &TemplateId,
        data: &TemplateData,
        custom_templates: &[CustomTemplate],
    ) -> Result<()> {
        self.template_id = template_id.clone();

        match self.state {
            AdapterState::Ready => {
                let html = resolve(template_id, data, custom_templates);
                if let Some(surface) = self.surface.as_mut() {
                    surface.set_components(&html)?;
                }
                debug!(template_id = %template_id, "synced editor content");
            }
            AdapterState::FallbackReady => {
                let html = resolve(template_id, data, custom_templates);
                if let Some(fallback) = self.fallback.as_mut() {
                    fallback.reseed(html);
                }
                debug!(template_id = %template_id, "reseeded fallback editor");
            }
            _ => {}
        }
        Ok(())
    }

    /// Assemble the current content into a document and remember it.
    ///
    /// Emits [`TemplateSaved`]; having no listeners is fine.
    pub fn save(&mut self, data: &TemplateData) -> Result<String> {
        let (html, css) = self.current_markup("save")?;
        let document = assemble(&html, &css, data);

        self.saved = Some(document.clone());
        let receivers = self
            .events
            .send(TemplateSaved {
                html: document.clone(),
                template_id: self.template_id.clone(),
                data: data.clone(),
            })
            .unwrap_or(0);

        info!(
            template_id = %self.template_id,
            bytes = document.len(),
            receivers,
            "template saved"
        );
        Ok(document)
    }

    /// Capture the current markup as a new custom template.
    ///
    /// A missing or blank description gets a default.
    pub fn save_as_custom(
        &self,
        store: &CustomTemplateStore,
        name: &str,
        description: Option<&str>,
    ) -> Result<CustomTemplate> {
        let (html, css) = self.current_markup("save as custom")?;
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_CUSTOM_DESCRIPTION);

        Ok(store.add(NewCustomTemplate {
            name: name.to_string(),
            description: description.to_string(),
            category: CUSTOM_CATEGORY.to_string(),
            html,
            css,
        }))
    }

    /// Package the last saved document for download.
    pub fn export(&self) -> Result<ExportArtifact> {
        self.export_named(self.template_id.as_str())
    }

    /// Package the last saved document under the file stem `template_id`.
    ///
    /// Used when the caller's selected id differs from the template the
    /// editor resolved it to.
    pub fn export_named(&self, template_id: &str) -> Result<ExportArtifact> {
        let document = self.saved.as_ref().ok_or(EditorError::NothingSaved)?;
        Ok(ExportArtifact::new(template_id, document.clone()))
    }

    /// Tear down whatever is live and return to the unmounted state.
    ///
    /// Destroy failures are logged, never returned.
    pub fn unmount(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            if let Err(e) = surface.destroy() {
                warn!(error = %e, "error destroying editor");
            }
        }
        self.fallback = None;
        self.state = AdapterState::Uninitialized;
        debug!("editor unmounted");
    }

    async fn acquire(
        &mut self,
        data: &TemplateData,
        custom_templates: &[CustomTemplate],
    ) -> Result<()> {
        self.state = AdapterState::Loading;

        let result = match self.load_library().await {
            Ok(library) => {
                tokio::time::sleep(Duration::from_millis(self.config.settle_delay_ms)).await;
                self.init_surface(library.as_ref(), data, custom_templates)
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(surface) => {
                self.surface = Some(surface);
                self.state = AdapterState::Ready;
                info!(template_id = %self.template_id, "editor ready");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "editor failed to load");
                self.state = AdapterState::Failed {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    async fn load_library(&self) -> Result<Arc<dyn EditorLibrary>> {
        if self.sources.is_empty() {
            return Err(EditorError::NoSources);
        }

        let timeout_ms = self.config.attempt_timeout_ms;
        for source in &self.sources {
            debug!(source = source.name(), "trying editor source");
            match tokio::time::timeout(Duration::from_millis(timeout_ms), source.load()).await {
                Ok(Ok(library)) => {
                    info!(source = source.name(), "editor library loaded");
                    return Ok(library);
                }
                Ok(Err(e)) => {
                    warn!(source = source.name(), error = %e, "editor source failed");
                }
                Err(_) => {
                    let e = EditorError::Timeout {
                        source_name: source.name().to_string(),
                        timeout_ms,
                    };
                    warn!(source = source.name(), error = %e, "editor source failed");
                }
            }
        }

        Err(EditorError::AllSourcesFailed {
            attempted: self.sources.len(),
        })
    }

    fn init_surface(
        &self,
        library: &dyn EditorLibrary,
        data: &TemplateData,
        custom_templates: &[CustomTemplate],
    ) -> Result<Box<dyn EditorSurface>> {
        let config = SurfaceConfig {
            height: self.config.height.clone(),
            width: self.config.width.clone(),
            blocks: default_blocks(data),
        };
        let initial_html = resolve(&self.template_id, data, custom_templates);
        library.init(&config, &initial_html)
    }

    fn current_markup(&self, action: &'static str) -> Result<(String, String)> {
        match self.state {
            AdapterState::Ready => {
                let surface = self.surface.as_ref().ok_or_else(|| self.invalid(action))?;
                Ok((surface.html()?, surface.css()?))
            }
            AdapterState::FallbackReady => {
                let fallback = self.fallback.as_ref().ok_or_else(|| self.invalid(action))?;
                Ok((fallback.html().to_string(), fallback.css().to_string()))
            }
            _ => Err(self.invalid(action)),
        }
    }

    fn invalid(&self, action: &'static str) -> EditorError {
        EditorError::InvalidState {
            action,
            state: self.state.to_string(),
        }
    }
}

impl fmt::Debug for EditorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorAdapter")
            .field("state", &self.state)
            .field("template_id", &self.template_id)
            .field("sources", &self.sources.len())
            .field("saved", &self.saved.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recorded {
        init_html: Option<String>,
        init_blocks: usize,
        components: Vec<String>,
        destroyed: bool,
    }

    struct MockSurface {
        recorded: Arc<Mutex<Recorded>>,
        html: String,
        fail_destroy: bool,
    }

    impl EditorSurface for MockSurface {
        fn set_components(&mut self, html: &str) -> Result<()> {
            self.html = html.to_string();
            self.recorded.lock().unwrap().components.push(html.to_string());
            Ok(())
        }

        fn html(&self) -> Result<String> {
            Ok(self.html.clone())
        }

        fn css(&self) -> Result<String> {
            Ok("p{margin:0}".to_string())
        }

        fn destroy(&mut self) -> Result<()> {
            self.recorded.lock().unwrap().destroyed = true;
            if self.fail_destroy {
                Err(EditorError::Surface("already gone".to_string()))
            } else {
                Ok(())
            }
        }
    }

    struct MockLibrary {
        recorded: Arc<Mutex<Recorded>>,
        fail_destroy: bool,
    }

    impl EditorLibrary for MockLibrary {
        fn init(
            &self,
            config: &SurfaceConfig,
            initial_html: &str,
        ) -> Result<Box<dyn EditorSurface>> {
            let mut recorded = self.recorded.lock().unwrap();
            recorded.init_html = Some(initial_html.to_string());
            recorded.init_blocks = config.blocks.len();
            Ok(Box::new(MockSurface {
                recorded: self.recorded.clone(),
                html: initial_html.to_string(),
                fail_destroy: self.fail_destroy,
            }))
        }
    }

    enum Behaviour {
        Succeed,
        Fail,
        Hang,
    }

    struct MockSource {
        name: String,
        behaviour: Behaviour,
        recorded: Arc<Mutex<Recorded>>,
        attempts: Arc<Mutex<usize>>,
    }

    #[async_trait]
    impl EditorSource for MockSource {
        fn name(&self) -> &str {
            &self.name
        }

        async fn load(&self) -> Result<Arc<dyn EditorLibrary>> {
            *self.attempts.lock().unwrap() += 1;
            match self.behaviour {
                Behaviour::Succeed => Ok(Arc::new(MockLibrary {
                    recorded: self.recorded.clone(),
                    fail_destroy: false,
                })),
                Behaviour::Fail => Err(EditorError::SourceFailed {
                    source_name: self.name.clone(),
                    reason: "script error".to_string(),
                }),
                Behaviour::Hang => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Err(EditorError::Init("unreachable".to_string()))
                }
            }
        }
    }

    struct Harness {
        recorded: Arc<Mutex<Recorded>>,
        attempts: Arc<Mutex<usize>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                recorded: Arc::new(Mutex::new(Recorded::default())),
                attempts: Arc::new(Mutex::new(0)),
            }
        }

        fn source(&self, name: &str, behaviour: Behaviour) -> Arc<dyn EditorSource> {
            Arc::new(MockSource {
                name: name.to_string(),
                behaviour,
                recorded: self.recorded.clone(),
                attempts: self.attempts.clone(),
            })
        }
    }

    fn fast_config() -> EditorConfig {
        EditorConfig {
            attempt_timeout_ms: 50,
            settle_delay_ms: 0,
            ..EditorConfig::default()
        }
    }

    #[tokio::test]
    async fn test_mount_ready_with_resolver_output() {
        let harness = Harness::new();
        let mut adapter =
            EditorAdapter::new(fast_config(), vec![harness.source("primary", Behaviour::Succeed)]);
        let data = TemplateData::default();

        adapter
            .mount(TemplateId::parse("classic"), &data, &[])
            .await
            .expect("mount");

        assert_eq!(adapter.state(), &AdapterState::Ready);
        let recorded = harness.recorded.lock().unwrap();
        assert_eq!(
            recorded.init_html.as_deref(),
            Some(resolve(&TemplateId::parse("classic"), &data, &[]).as_str())
        );
        assert_eq!(recorded.init_blocks, 8);
    }

    #[tokio::test]
    async fn test_falls_through_failed_and_slow_sources() {
        let harness = Harness::new();
        let sources = vec![
            harness.source("broken", Behaviour::Fail),
            harness.source("slow", Behaviour::Hang),
            harness.source("good", Behaviour::Succeed),
        ];
        let mut adapter = EditorAdapter::new(fast_config(), sources);

        adapter
            .mount(TemplateId::default(), &TemplateData::default(), &[])
            .await
            .expect("mount");

        assert_eq!(adapter.state(), &AdapterState::Ready);
        assert_eq!(*harness.attempts.lock().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_all_sources_failed_keeps_reason() {
        let harness = Harness::new();
        let sources = vec![
            harness.source("a", Behaviour::Fail),
            harness.source("b", Behaviour::Hang),
        ];
        let mut adapter = EditorAdapter::new(fast_config(), sources);

        let err = adapter
            .mount(TemplateId::default(), &TemplateData::default(), &[])
            .await
            .expect_err("mount should fail");

        assert!(matches!(err, EditorError::AllSourcesFailed { attempted: 2 }));
        assert_eq!(
            adapter.failure_reason(),
            Some("failed to load the editor from all 2 sources")
        );
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let harness = Harness::new();
        let mut adapter =
            EditorAdapter::new(fast_config(), vec![harness.source("a", Behaviour::Fail)]);
        let data = TemplateData::default();

        assert!(adapter.mount(TemplateId::default(), &data, &[]).await.is_err());
        assert!(adapter.retry(&data, &[]).await.is_err());
        assert_eq!(*harness.attempts.lock().unwrap(), 2);
        assert!(adapter.failure_reason().is_some());
    }

    #[tokio::test]
    async fn test_retry_only_from_failed() {
        let mut adapter = EditorAdapter::new(fast_config(), Vec::new());
        let err = adapter
            .retry(&TemplateData::default(), &[])
            .await
            .expect_err("retry from uninitialized");
        assert!(matches!(err, EditorError::InvalidState { action: "retry", .. }));
    }

    #[tokio::test]
    async fn test_fallback_save_and_export() {
        let mut adapter = EditorAdapter::new(fast_config(), Vec::new());
        let data = TemplateData::default();
        let mut saved_rx = adapter.subscribe();

        let err = adapter
            .mount(TemplateId::parse("welcome"), &data, &[])
            .await
            .expect_err("no sources");
        assert!(matches!(err, EditorError::NoSources));

        adapter.use_fallback(&data, &[]).expect("fallback");
        assert_eq!(adapter.state(), &AdapterState::FallbackReady);
        assert!(matches!(adapter.export(), Err(EditorError::NothingSaved)));

        adapter
            .fallback_mut()
            .expect("fallback editor")
            .set_css(".cta{color:red}");
        let document = adapter.save(&data).expect("save");
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains(".cta{color:red}"));

        let event = saved_rx.try_recv().expect("saved event");
        assert_eq!(event.html, document);
        assert_eq!(event.template_id, TemplateId::parse("welcome"));

        let artifact = adapter.export().expect("export");
        assert!(artifact.file_name.starts_with("welcome-email-template-"));
        assert_eq!(artifact.contents, document);
    }

    #[tokio::test]
    async fn test_sync_pushes_new_content() {
        let harness = Harness::new();
        let mut adapter =
            EditorAdapter::new(fast_config(), vec![harness.source("a", Behaviour::Succeed)]);
        let mut data = TemplateData::default();
        adapter
            .mount(TemplateId::default(), &data, &[])
            .await
            .expect("mount");

        data.heading = "Fresh".to_string();
        let id = TemplateId::parse("minimal");
        adapter.sync(&id, &data, &[]).expect("sync");

        let recorded = harness.recorded.lock().unwrap();
        let pushed = recorded.components.last().expect("pushed content");
        assert_eq!(pushed, &resolve(&id, &data, &[]));
        assert_eq!(adapter.template_id(), &id);
    }

    #[tokio::test]
    async fn test_save_requires_live_editor() {
        let mut adapter = EditorAdapter::new(fast_config(), Vec::new());
        assert!(matches!(
            adapter.save(&TemplateData::default()),
            Err(EditorError::InvalidState { action: "save", .. })
        ));
    }

    #[tokio::test]
    async fn test_unmount_swallows_destroy_errors() {
        let recorded = Arc::new(Mutex::new(Recorded::default()));

        struct FailingSource(Arc<Mutex<Recorded>>);

        #[async_trait]
        impl EditorSource for FailingSource {
            fn name(&self) -> &str {
                "failing-destroy"
            }

            async fn load(&self) -> Result<Arc<dyn EditorLibrary>> {
                Ok(Arc::new(MockLibrary {
                    recorded: self.0.clone(),
                    fail_destroy: true,
                }))
            }
        }

        let source: Arc<dyn EditorSource> = Arc::new(FailingSource(recorded.clone()));
        let mut adapter = EditorAdapter::new(fast_config(), vec![source]);
        adapter
            .mount(TemplateId::default(), &TemplateData::default(), &[])
            .await
            .expect("mount");

        adapter.unmount();
        assert_eq!(adapter.state(), &AdapterState::Uninitialized);
        assert!(recorded.lock().unwrap().destroyed);
    }
}
