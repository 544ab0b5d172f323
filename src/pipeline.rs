//! Top-level orchestration: render → locate → extract → classify →
//! aggregate.
//!
//! Only renderer failures propagate; every per-item failure degrades
//! coverage, not availability.

use crate::classify::Classifier;
use crate::config::ScrapeConfig;
use crate::document::RenderedDocument;
use crate::error::{ScrapeError, ScrapeResult};
use crate::extract::{extract_pair, locate_items};
use crate::progress::ProgressReporter;
use crate::renderer::Renderer;
use crate::schema::{FaqItem, ResultSet};
use std::collections::HashSet;

/// One scrape run over an injected renderer and observer.
///
/// Holds no state of its own across calls; each invocation builds a fresh
/// ResultSet.
pub struct Pipeline<'a> {
    config: &'a ScrapeConfig,
    reporter: &'a dyn ProgressReporter,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a ScrapeConfig, reporter: &'a dyn ProgressReporter) -> Self {
        Self { config, reporter }
    }

    /// Render the page once, discover items once, then extract, classify
    /// and bucket each unit in discovery order. Duplicate questions are
    /// discarded, first occurrence wins.
    pub async fn scrape(&self, renderer: &dyn Renderer, url: &str) -> ScrapeResult<ResultSet> {
        self.reporter.report_render_started(url);
        let snapshot = renderer
            .render(url)
            .await
            .map_err(|e| ScrapeError::from_render(url, e))?;
        self.reporter.report_page_rendered(url);

        let doc = RenderedDocument::parse(&snapshot);
        let units = locate_items(&doc, self.config.classifier().ancestor_depth);
        self.reporter.report_items_located(units.len());

        let classifier = Classifier::new(self.config.classifier());
        let mut results = ResultSet::default();
        let mut seen_questions: HashSet<String> = HashSet::new();

        for unit in units.iter().take(self.config.max_items()) {
            let pair = match extract_pair(&doc, unit, self.config) {
                Ok(pair) => pair,
                Err(reason) => {
                    self.reporter.report_item_rejected(&reason);
                    continue;
                }
            };

            if !seen_questions.insert(pair.question.clone()) {
                self.reporter.report_duplicate_skipped(&pair.question);
                continue;
            }

            let category = classifier.classify(&doc, unit, &pair);
            self.reporter.report_item_classified(&pair.question, category);
            results.push(
                category,
                FaqItem {
                    question: pair.question,
                    answer: pair.answer,
                },
            );
        }

        self.reporter.report_completed(&results.counts());
        Ok(results)
    }
}
