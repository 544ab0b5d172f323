//! Rendering: turn an interactive document into a static, fully-expanded
//! markup snapshot.
//!
//! The browser's side-effecting session is hidden behind the narrow
//! [`PageSession`] contract, so the navigate → ready-wait → expand-all →
//! settle → capture sequence in [`render_with_session`] can be tested
//! against canned markup with no real browser.

pub mod chromium;
pub mod js_scripts;

pub use chromium::ChromiumRenderer;

use crate::error::RenderError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Produces a fully-expanded markup snapshot for a URL.
///
/// The snapshot crosses this boundary as markup text; the pipeline parses
/// it into a tree on its own thread.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, url: &str) -> Result<String, RenderError>;
}

/// The capabilities the renderer needs from a browser page. Nothing else
/// of the browser is visible to the core.
#[async_trait]
pub trait PageSession: Send {
    async fn navigate(&mut self, url: &str) -> Result<(), RenderError>;

    /// Wait until the document reaches a usable state, bounded by
    /// `timeout`. Must fail with [`RenderError::Timeout`] rather than
    /// hang.
    async fn wait_for_ready(&mut self, timeout: Duration) -> Result<(), RenderError>;

    /// Run a script against the page; returns the script's numeric result
    /// (for the expand-all step, the count of triggers fired).
    async fn run_script(&mut self, script: &str) -> Result<i64, RenderError>;

    /// Capture the current markup as a string.
    async fn capture_markup(&mut self) -> Result<String, RenderError>;

    /// Tear the session down. Infallible by contract; failures are logged
    /// by implementations.
    async fn close(&mut self);
}

/// Timing knobs for one render.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Bounded wait for the document to become ready
    pub ready_timeout: Duration,
    /// Fixed wait after the expand-all step before capture
    pub settle_interval: Duration,
}

/// Drive one session through the full render sequence. The session is
/// always closed, also on failure.
pub async fn render_with_session(
    session: &mut dyn PageSession,
    url: &str,
    settings: &RenderSettings,
) -> Result<String, RenderError> {
    let result = drive(session, url, settings).await;
    session.close().await;
    result
}

async fn drive(
    session: &mut dyn PageSession,
    url: &str,
    settings: &RenderSettings,
) -> Result<String, RenderError> {
    session.navigate(url).await?;
    session.wait_for_ready(settings.ready_timeout).await?;

    let fired = session.run_script(js_scripts::EXPAND_ALL_SCRIPT).await?;
    debug!(fired, "dispatched expansion triggers");

    if settings.settle_interval > Duration::ZERO {
        tokio::time::sleep(settings.settle_interval).await;
    }

    session.capture_markup().await
}
