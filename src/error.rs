//! Error types for scrape operations.
//!
//! Only renderer failures propagate out of a scrape call. Per-item
//! extraction problems are absorbed by the pipeline and reported through
//! the progress observer instead.

use std::time::Duration;
use thiserror::Error;

/// Convenience alias for Result with [`ScrapeError`]
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Failures at the renderer boundary.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The document root never became present within the bounded wait
    #[error("document did not become ready within {0:?}")]
    Timeout(Duration),

    /// Navigation to the target URL failed
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// A script run against the page failed to execute
    #[error("script execution failed: {0}")]
    Script(String),

    /// The browser session itself failed (launch, CDP transport, capture)
    #[error("browser session error: {0}")]
    Session(String),
}

/// User-visible failures of a whole scrape call.
///
/// Exactly two fatal kinds exist; everything else degrades coverage, not
/// availability.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The page never reached a ready state; no partial result is returned
    #[error("page did not become ready within {timeout:?}: {url}")]
    RenderTimeout { url: String, timeout: Duration },

    /// Navigation or expansion scripting failed irrecoverably
    #[error("failed to render {url}")]
    Render {
        url: String,
        #[source]
        source: RenderError,
    },
}

impl ScrapeError {
    /// Lift a renderer failure into the call-level taxonomy.
    pub(crate) fn from_render(url: &str, source: RenderError) -> Self {
        match source {
            RenderError::Timeout(timeout) => Self::RenderTimeout {
                url: url.to_string(),
                timeout,
            },
            other => Self::Render {
                url: url.to_string(),
                source: other,
            },
        }
    }
}
