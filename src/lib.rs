//! Browser-driven FAQ extraction and classification for accordion-style
//! support pages.
//!
//! The page family this targets exposes no stable markup contract, so the
//! engine works through cascades: a prioritized chain of structural
//! discovery strategies, a header/content pairing with validation floors,
//! and an ordered classification cascade (ancestry, headings, domain
//! vocabulary, default) over four fixed category buckets.

pub mod browser;
pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod progress;
pub mod renderer;
pub mod schema;

pub use classify::{Classifier, ClassifierConfig};
pub use config::{DEFAULT_FAQ_URL, ScrapeConfig};
pub use document::RenderedDocument;
pub use error::{RenderError, ScrapeError, ScrapeResult};
pub use extract::{ItemUnit, QaPair, RejectReason, locate_items};
pub use pipeline::Pipeline;
pub use progress::{NoOpProgress, ProgressReporter, TracingProgress};
pub use renderer::{ChromiumRenderer, PageSession, RenderSettings, Renderer};
pub use schema::{Category, CategoryCounts, FaqItem, ResultSet};

/// Scrape one FAQ page with a real browser and the default observer.
pub async fn scrape(url: &str, config: ScrapeConfig) -> ScrapeResult<ResultSet> {
    let renderer = ChromiumRenderer::new(&config);
    Pipeline::new(&config, &TracingProgress)
        .scrape(&renderer, url)
        .await
}
