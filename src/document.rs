//! Parsed snapshot of a fully-expanded page.

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

/// Immutable, fully-expanded markup snapshot as a parseable tree.
///
/// Produced once per scrape from the renderer's captured markup, owned by
/// the pipeline for the duration of one run, discarded afterwards.
pub struct RenderedDocument {
    html: Html,
}

impl RenderedDocument {
    /// Parse a captured markup string into a document tree.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    pub(crate) fn html(&self) -> &Html {
        &self.html
    }

    /// Resolve a stored node handle back to an element, if it still is one.
    pub(crate) fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }

    /// Last element matching `selector` that precedes `target` in document
    /// order. Used for heading fallbacks.
    pub(crate) fn last_match_before(
        &self,
        target: NodeId,
        selector: &Selector,
    ) -> Option<ElementRef<'_>> {
        let mut last = None;
        for node in self.html.tree.root().descendants() {
            if node.id() == target {
                break;
            }
            if let Some(element) = ElementRef::wrap(node)
                && selector.matches(&element)
            {
                last = Some(element);
            }
        }
        last
    }
}

/// Text content of an element with all whitespace runs collapsed.
pub(crate) fn collapsed_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect::<Vec<_>>().join(" ");
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
