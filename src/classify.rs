//! Category assignment via an ordered cascade of signals.
//!
//! Signals, strongest first: structural ancestry, nearest preceding
//! top-level heading, lexical vocabulary over the pair's own text, and a
//! guaranteed default. Classification is a total function: every valid
//! pair gets exactly one of the four categories, never none.

use crate::document::{RenderedDocument, collapsed_text};
use crate::extract::locator::ItemUnit;
use crate::extract::pair::QaPair;
use crate::schema::Category;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::trace;

static TOP_HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2").expect("BUG: hardcoded CSS selector 'h1, h2' is invalid")
});

/// One keyword list per category.
///
/// Membership is case-insensitive substring containment; keywords are
/// stored lowercase. Lists are a starting set, not a closed vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub teleriscaldamento: Vec<String>,
    pub acqua: Vec<String>,
    pub ambiente: Vec<String>,
    pub reti: Vec<String>,
}

impl CategoryKeywords {
    pub fn for_category(&self, category: Category) -> &[String] {
        match category {
            Category::Teleriscaldamento => &self.teleriscaldamento,
            Category::Acqua => &self.acqua,
            Category::Ambiente => &self.ambiente,
            Category::Reti => &self.reti,
        }
    }

    /// First category in cascade order with a keyword contained in
    /// `haystack`. Callers lowercase the haystack.
    fn matching(&self, haystack: &str) -> Option<Category> {
        for category in Category::CASCADE {
            if self
                .for_category(category)
                .iter()
                .any(|keyword| haystack.contains(keyword.as_str()))
            {
                return Some(category);
            }
        }
        None
    }
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Tuning for the classification cascade.
///
/// The depth bound and both keyword sets are heuristics observed to work
/// on the target page family; treat them as extensible configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// How many enclosing containers the ancestor signal inspects
    pub ancestor_depth: usize,
    /// Keywords matched against ancestor id/class tokens and headings
    pub structural_keywords: CategoryKeywords,
    /// Expanded domain vocabulary matched against question + answer text
    pub lexical_keywords: CategoryKeywords,
    /// Category assigned when no signal matches
    pub default_category: Category,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            ancestor_depth: 3,
            structural_keywords: CategoryKeywords {
                teleriscaldamento: words(&["teleriscaldamento", "riscaldamento"]),
                acqua: words(&["acqua", "idrico"]),
                ambiente: words(&["ambiente", "ambientale"]),
                reti: words(&["reti", "rete"]),
            },
            lexical_keywords: CategoryKeywords {
                teleriscaldamento: words(&[
                    "teleriscaldamento",
                    "riscaldamento",
                    "caldaia",
                    "calore",
                    "scambiatore",
                    "termico",
                ]),
                acqua: words(&[
                    "acqua",
                    "acquedotto",
                    "fognatura",
                    "depurazione",
                    "idrico",
                    "potabile",
                ]),
                ambiente: words(&[
                    "ambiente",
                    "rifiuti",
                    "raccolta",
                    "differenziata",
                    "ingombranti",
                    "spazzamento",
                ]),
                reti: words(&[
                    "elettrica",
                    "elettrico",
                    "distribuzione",
                    "illuminazione",
                    "gas",
                ]),
            },
            default_category: Category::Acqua,
        }
    }
}

/// Assigns exactly one category to each validated pair.
pub struct Classifier<'a> {
    config: &'a ClassifierConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a ClassifierConfig) -> Self {
        Self { config }
    }

    /// Evaluate the cascade; first matching signal wins, the default
    /// closes it. Never fails.
    pub fn classify(&self, doc: &RenderedDocument, unit: &ItemUnit, pair: &QaPair) -> Category {
        if let Some(category) = self.ancestor_signal(doc, unit) {
            trace!(%category, "classified via ancestor signal");
            return category;
        }
        if let Some(category) = self.heading_signal(doc, unit) {
            trace!(%category, "classified via heading signal");
            return category;
        }
        if let Some(category) = self.lexical_signal(pair) {
            trace!(%category, "classified via lexical signal");
            return category;
        }
        trace!(category = %self.config.default_category, "no signal matched, using default");
        self.config.default_category
    }

    /// Walk the unit's ancestor chain outward, matching each ancestor's
    /// id and class tokens. First matching ancestor at any depth decides.
    fn ancestor_signal(&self, doc: &RenderedDocument, unit: &ItemUnit) -> Option<Category> {
        for ancestor in unit.ancestors.iter().take(self.config.ancestor_depth) {
            let Some(element) = doc.element(*ancestor) else {
                continue;
            };
            let mut tokens = String::new();
            if let Some(id) = element.value().attr("id") {
                tokens.push_str(id);
                tokens.push(' ');
            }
            if let Some(classes) = element.value().attr("class") {
                tokens.push_str(classes);
            }
            let tokens = tokens.to_lowercase();
            if let Some(category) = self.config.structural_keywords.matching(&tokens) {
                return Some(category);
            }
        }
        None
    }

    /// Nearest preceding top-level heading in document order.
    fn heading_signal(&self, doc: &RenderedDocument, unit: &ItemUnit) -> Option<Category> {
        let heading = doc.last_match_before(unit.container, &TOP_HEADING_SELECTOR)?;
        let text = collapsed_text(heading).to_lowercase();
        self.config.structural_keywords.matching(&text)
    }

    /// Domain vocabulary over the pair's own text.
    fn lexical_signal(&self, pair: &QaPair) -> Option<Category> {
        let haystack = format!("{} {}", pair.question, pair.answer).to_lowercase();
        self.config.lexical_keywords.matching(&haystack)
    }
}
