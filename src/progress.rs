//! Progress reporting abstraction for scrape runs.
//!
//! The pipeline holds no process-wide mutable state; lifecycle events go
//! through an injected reporter instead. `NoOpProgress` serves embedders
//! that only want the ResultSet, `TracingProgress` logs the way the
//! original tool did.

use crate::extract::RejectReason;
use crate::schema::{Category, CategoryCounts};
use tracing::{debug, info, warn};

/// Observer for scrape lifecycle events.
///
/// Implementations can log, update UI, or feed metrics; the core calls
/// them at fixed points and never depends on their behavior.
pub trait ProgressReporter: Send + Sync {
    /// Rendering of the target URL has started
    fn report_render_started(&self, url: &str);

    /// The fully-expanded snapshot was captured
    fn report_page_rendered(&self, url: &str);

    /// Structural discovery finished
    fn report_items_located(&self, count: usize);

    /// A pair was validated and classified
    fn report_item_classified(&self, question: &str, category: Category);

    /// A located unit failed validation and was skipped
    fn report_item_rejected(&self, reason: &RejectReason);

    /// A pair repeated an already-seen question and was discarded
    fn report_duplicate_skipped(&self, question: &str);

    /// The run finished with these counts
    fn report_completed(&self, counts: &CategoryCounts);
}

/// Progress reporter that does nothing.
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_render_started(&self, _url: &str) {}

    #[inline(always)]
    fn report_page_rendered(&self, _url: &str) {}

    #[inline(always)]
    fn report_items_located(&self, _count: usize) {}

    #[inline(always)]
    fn report_item_classified(&self, _question: &str, _category: Category) {}

    #[inline(always)]
    fn report_item_rejected(&self, _reason: &RejectReason) {}

    #[inline(always)]
    fn report_duplicate_skipped(&self, _question: &str) {}

    #[inline(always)]
    fn report_completed(&self, _counts: &CategoryCounts) {}
}

/// Progress reporter backed by `tracing`.
#[derive(Debug, Clone, Copy)]
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn report_render_started(&self, url: &str) {
        info!(url, "rendering page");
    }

    fn report_page_rendered(&self, url: &str) {
        info!(url, "captured fully-expanded snapshot");
    }

    fn report_items_located(&self, count: usize) {
        info!(count, "located candidate items");
    }

    fn report_item_classified(&self, question: &str, category: Category) {
        let preview: String = question.chars().take(50).collect();
        info!(question = %preview, %category, "extracted FAQ item");
    }

    fn report_item_rejected(&self, reason: &RejectReason) {
        warn!(%reason, "skipping malformed item");
    }

    fn report_duplicate_skipped(&self, question: &str) {
        let preview: String = question.chars().take(50).collect();
        debug!(question = %preview, "skipping duplicate question");
    }

    fn report_completed(&self, counts: &CategoryCounts) {
        info!(
            total = counts.total,
            teleriscaldamento = counts.teleriscaldamento,
            acqua = counts.acqua,
            ambiente = counts.ambiente,
            reti = counts.reti,
            "scrape completed"
        );
    }
}
