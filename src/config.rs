//! Scrape configuration with validated defaults.
//!
//! Heuristic tuning values (timeouts, validation floors, keyword lists,
//! ancestor depth) live here rather than as hard constants so callers can
//! adjust them per deployment.

use crate::classify::ClassifierConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// FAQ page this tool was built for; the CLI falls back to it when no URL
/// is given.
pub const DEFAULT_FAQ_URL: &str = "https://www.gruppoiren.it/it/assistenza/faq.html";

/// Configuration for one scrape run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Bounded wait for the document root to become present
    pub(crate) ready_timeout: Duration,
    /// Fixed wait after dispatching expansion triggers, so asynchronous
    /// content can materialize before the markup is captured
    pub(crate) settle_interval: Duration,
    /// Concurrent browser sessions admitted at once. The permit pool is
    /// process-wide and sized on first use.
    pub(crate) max_sessions: usize,
    /// Run the browser headless
    pub(crate) headless: bool,
    /// Cap on located items processed per run
    pub(crate) max_items: usize,
    /// Minimum question length (chars, after trimming)
    pub(crate) min_question_len: usize,
    /// Minimum answer length (chars, after trimming)
    pub(crate) min_answer_len: usize,
    /// Classification cascade tuning
    pub(crate) classifier: ClassifierConfig,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            ready_timeout: Duration::from_secs(15),
            settle_interval: Duration::from_secs(3),
            max_sessions: 2,
            headless: true,
            max_items: 50,
            min_question_len: 5,
            min_answer_len: 10,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl ScrapeConfig {
    pub fn ready_timeout(&self) -> Duration {
        self.ready_timeout
    }

    pub fn settle_interval(&self) -> Duration {
        self.settle_interval
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    pub fn headless(&self) -> bool {
        self.headless
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn min_question_len(&self) -> usize {
        self.min_question_len
    }

    pub fn min_answer_len(&self) -> usize {
        self.min_answer_len
    }

    pub fn classifier(&self) -> &ClassifierConfig {
        &self.classifier
    }

    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    pub fn with_settle_interval(mut self, interval: Duration) -> Self {
        self.settle_interval = interval;
        self
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions.max(1);
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_min_question_len(mut self, min_question_len: usize) -> Self {
        self.min_question_len = min_question_len;
        self
    }

    pub fn with_min_answer_len(mut self, min_answer_len: usize) -> Self {
        self.min_answer_len = min_answer_len;
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }
}
