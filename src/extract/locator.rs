//! Item discovery via a prioritized chain of structural strategies.
//!
//! The target page family has no stable markup contract, so discovery
//! tries a fixed cascade from most to least structurally specific and
//! uses the first strategy that yields any units. Results from different
//! strategies are never merged; the same logical item found two ways
//! would double-count.

use crate::document::RenderedDocument;
use ego_tree::NodeId;
use scraper::{ElementRef, Selector};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

static ITEM_CLASS_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".accordion-item, .faq-item")
        .expect("BUG: hardcoded CSS selector '.accordion-item, .faq-item' is invalid")
});

static COLLAPSIBLE_CLASS_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("[class*='accordion'], [class*='collapse'], [class*='faq']")
        .expect("BUG: hardcoded collapsible-class CSS selector is invalid")
});

static STATE_ATTRIBUTE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("[aria-expanded], [data-bs-toggle='collapse'], [data-toggle]")
        .expect("BUG: hardcoded state-attribute CSS selector is invalid")
});

static HEADER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".accordion-button, .accordion-header, button, [role='button'], summary, h2, h3, h4")
        .expect("BUG: hardcoded header CSS selector is invalid")
});

/// A located structural candidate: one header paired with one piece of
/// expandable content, plus the ancestry the classifier needs.
///
/// Handles are indices into the [`RenderedDocument`] tree; units are never
/// mutated and never outlive the run.
#[derive(Debug, Clone)]
pub struct ItemUnit {
    /// Candidate content region
    pub container: NodeId,
    /// Directly-associated header, when the layout exposes one
    pub header: Option<NodeId>,
    /// Enclosing containers, innermost first, bounded depth
    pub ancestors: Vec<NodeId>,
}

/// Discovery strategies in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorStrategy {
    /// Containers explicitly marked as item structural classes
    ItemClass,
    /// Containers with a generic collapsible/expandable class
    CollapsibleClass,
    /// Any element exposing an expanded/collapsed state attribute
    StateAttribute,
}

impl LocatorStrategy {
    pub const CASCADE: [LocatorStrategy; 3] = [
        LocatorStrategy::ItemClass,
        LocatorStrategy::CollapsibleClass,
        LocatorStrategy::StateAttribute,
    ];
}

impl fmt::Display for LocatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocatorStrategy::ItemClass => "item-class",
            LocatorStrategy::CollapsibleClass => "collapsible-class",
            LocatorStrategy::StateAttribute => "state-attribute",
        };
        f.write_str(name)
    }
}

/// Discover item units in document order.
///
/// Never fails; an unrecognized document yields an empty sequence.
pub fn locate_items(doc: &RenderedDocument, ancestor_depth: usize) -> Vec<ItemUnit> {
    for strategy in LocatorStrategy::CASCADE {
        let units = apply_strategy(doc, strategy, ancestor_depth);
        if !units.is_empty() {
            debug!(%strategy, count = units.len(), "located item units");
            return units;
        }
    }
    debug!("no item units recognized under any strategy");
    Vec::new()
}

fn apply_strategy(
    doc: &RenderedDocument,
    strategy: LocatorStrategy,
    ancestor_depth: usize,
) -> Vec<ItemUnit> {
    match strategy {
        LocatorStrategy::ItemClass => {
            units_from_containers(doc, &ITEM_CLASS_SELECTOR, ancestor_depth)
        }
        LocatorStrategy::CollapsibleClass => {
            units_from_containers(doc, &COLLAPSIBLE_CLASS_SELECTOR, ancestor_depth)
        }
        LocatorStrategy::StateAttribute => units_from_controls(doc, ancestor_depth),
    }
}

/// One unit per matched container element.
///
/// A matched element that wraps another match is a section or list around
/// real items, not an item itself; only the enclosed matches become units.
fn units_from_containers(
    doc: &RenderedDocument,
    selector: &Selector,
    ancestor_depth: usize,
) -> Vec<ItemUnit> {
    let matches: Vec<ElementRef<'_>> = doc.html().select(selector).collect();
    matches
        .iter()
        .copied()
        .filter(|container| !encloses_other_match(*container, &matches))
        .map(|container| ItemUnit {
            container: container.id(),
            header: container.select(&HEADER_SELECTOR).next().map(|e| e.id()),
            ancestors: ancestor_chain(container, ancestor_depth),
        })
        .collect()
}

fn encloses_other_match(container: ElementRef<'_>, matches: &[ElementRef<'_>]) -> bool {
    matches.iter().any(|other| {
        other.id() != container.id() && other.ancestors().any(|node| node.id() == container.id())
    })
}

/// One unit per toggle control; the structural container is inferred from
/// the control's ancestry.
fn units_from_controls(doc: &RenderedDocument, ancestor_depth: usize) -> Vec<ItemUnit> {
    doc.html()
        .select(&STATE_ATTRIBUTE_SELECTOR)
        .map(|control| {
            let container = control
                .ancestors()
                .find_map(ElementRef::wrap)
                .unwrap_or(control);
            ItemUnit {
                container: container.id(),
                header: Some(control.id()),
                ancestors: ancestor_chain(container, ancestor_depth),
            }
        })
        .collect()
}

fn ancestor_chain(element: ElementRef<'_>, depth: usize) -> Vec<NodeId> {
    element
        .ancestors()
        .filter(|node| node.value().is_element())
        .take(depth)
        .map(|node| node.id())
        .collect()
}
