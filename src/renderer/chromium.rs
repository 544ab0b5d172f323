//! Chromium-backed renderer.
//!
//! Each render acquires a semaphore permit (sessions are resource-heavy),
//! launches a fresh browser with its own profile, drives the render
//! sequence and tears the browser down again. Sessions are never shared
//! between calls; the permit pool is, so the session cap holds across
//! concurrent scrape calls too.

use super::{PageSession, RenderSettings, Renderer, js_scripts, render_with_session};
use crate::browser::{BrowserWrapper, launch_browser};
use crate::config::ScrapeConfig;
use crate::error::RenderError;
use async_trait::async_trait;
use chromiumoxide::Page;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);

static SESSION_LIMITER: OnceLock<Arc<Semaphore>> = OnceLock::new();

/// Process-wide session permit pool, sized on first use.
///
/// Renderers are call-scoped and cheap to construct; the cap on live
/// browser sessions must hold across all of them, so every renderer
/// draws permits from the same pool.
fn session_limiter(max_sessions: usize) -> Arc<Semaphore> {
    Arc::clone(SESSION_LIMITER.get_or_init(|| Arc::new(Semaphore::new(max_sessions))))
}

/// Renderer over a real Chromium process.
pub struct ChromiumRenderer {
    settings: RenderSettings,
    headless: bool,
    limiter: Arc<Semaphore>,
}

impl ChromiumRenderer {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            settings: RenderSettings {
                ready_timeout: config.ready_timeout(),
                settle_interval: config.settle_interval(),
            },
            headless: config.headless(),
            limiter: session_limiter(config.max_sessions()),
        }
    }
}

#[async_trait]
impl Renderer for ChromiumRenderer {
    async fn render(&self, url: &str) -> Result<String, RenderError> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|e| RenderError::Session(format!("session limiter closed: {e}")))?;

        let wrapper: BrowserWrapper = launch_browser(self.headless).await?;

        let page = wrapper
            .browser()
            .new_page("about:blank")
            .await
            .map_err(|e| RenderError::Session(format!("failed to open page: {e}")))?;

        let mut session = ChromiumSession { page: Some(page) };
        let result = render_with_session(&mut session, url, &self.settings).await;

        wrapper.shutdown().await;
        result
    }
}

/// One chromiumoxide page behind the [`PageSession`] contract.
struct ChromiumSession {
    page: Option<Page>,
}

impl ChromiumSession {
    fn page(&self) -> Result<&Page, RenderError> {
        self.page
            .as_ref()
            .ok_or_else(|| RenderError::Session("page session already closed".to_string()))
    }
}

#[async_trait]
impl PageSession for ChromiumSession {
    async fn navigate(&mut self, url: &str) -> Result<(), RenderError> {
        self.page()?
            .goto(url)
            .await
            .map_err(|e| RenderError::Navigation(e.to_string()))?;
        Ok(())
    }

    async fn wait_for_ready(&mut self, timeout: Duration) -> Result<(), RenderError> {
        let start = Instant::now();
        loop {
            if start.elapsed() >= timeout {
                return Err(RenderError::Timeout(timeout));
            }

            match self.page()?.evaluate(js_scripts::READY_STATE_SCRIPT).await {
                Ok(result) => {
                    if result.into_value::<bool>().unwrap_or(false) {
                        debug!(
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "document ready"
                        );
                        return Ok(());
                    }
                }
                Err(e) => {
                    // Transient during navigation; keep polling until the bound
                    debug!("ready-state check failed, retrying: {e}");
                }
            }

            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }
    }

    async fn run_script(&mut self, script: &str) -> Result<i64, RenderError> {
        let result = self
            .page()?
            .evaluate(script)
            .await
            .map_err(|e| RenderError::Script(e.to_string()))?;
        result
            .into_value::<i64>()
            .map_err(|e| RenderError::Script(format!("script returned non-numeric result: {e}")))
    }

    async fn capture_markup(&mut self) -> Result<String, RenderError> {
        self.page()?
            .content()
            .await
            .map_err(|e| RenderError::Session(format!("failed to capture markup: {e}")))
    }

    async fn close(&mut self) {
        if let Some(page) = self.page.take()
            && let Err(e) = page.close().await
        {
            warn!("failed to close page: {e}");
        }
    }
}
