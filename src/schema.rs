//! Output schema: categories, classified items and the per-run result set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four topical buckets of the target FAQ page.
///
/// The enumeration is closed: no other value is ever produced, and every
/// serialized result carries all four keys even when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// District heating
    Teleriscaldamento,
    /// Water service
    Acqua,
    /// Environment and waste collection
    Ambiente,
    /// Distribution networks
    Reti,
}

impl Category {
    /// All categories in output order.
    pub const ALL: [Category; 4] = [
        Category::Teleriscaldamento,
        Category::Acqua,
        Category::Ambiente,
        Category::Reti,
    ];

    /// Categories in the order keyword matching tests them.
    ///
    /// A string matching two categories' keywords resolves to the earlier
    /// one here, so classification stays deterministic.
    pub const CASCADE: [Category; 4] = [
        Category::Teleriscaldamento,
        Category::Ambiente,
        Category::Reti,
        Category::Acqua,
    ];

    /// Canonical lowercase name, as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Teleriscaldamento => "teleriscaldamento",
            Category::Acqua => "acqua",
            Category::Ambiente => "ambiente",
            Category::Reti => "reti",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified question/answer pair. Immutable once created.
///
/// Wire field names follow the original page's language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    #[serde(rename = "domanda")]
    pub question: String,
    #[serde(rename = "risposta")]
    pub answer: String,
}

/// Per-category and total item counts for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub teleriscaldamento: usize,
    pub acqua: usize,
    pub ambiente: usize,
    pub reti: usize,
    pub total: usize,
}

/// The sole return value of a scrape: four ordered category buckets.
///
/// Insertion order within a bucket is discovery order on the page. Built
/// fresh per call; nothing persists across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub teleriscaldamento: Vec<FaqItem>,
    pub acqua: Vec<FaqItem>,
    pub ambiente: Vec<FaqItem>,
    pub reti: Vec<FaqItem>,
}

impl ResultSet {
    /// Items collected under one category, in discovery order.
    pub fn items(&self, category: Category) -> &[FaqItem] {
        match category {
            Category::Teleriscaldamento => &self.teleriscaldamento,
            Category::Acqua => &self.acqua,
            Category::Ambiente => &self.ambiente,
            Category::Reti => &self.reti,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<FaqItem> {
        match category {
            Category::Teleriscaldamento => &mut self.teleriscaldamento,
            Category::Acqua => &mut self.acqua,
            Category::Ambiente => &mut self.ambiente,
            Category::Reti => &mut self.reti,
        }
    }

    /// Append an item to its category bucket.
    pub fn push(&mut self, category: Category, item: FaqItem) {
        self.bucket_mut(category).push(item);
    }

    /// Total number of items across all categories.
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.items(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Per-category and total counts.
    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            teleriscaldamento: self.teleriscaldamento.len(),
            acqua: self.acqua.len(),
            ambiente: self.ambiente.len(),
            reti: self.reti.len(),
            total: self.total(),
        }
    }
}
