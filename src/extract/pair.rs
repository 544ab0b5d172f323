//! Header/content pairing and validation.
//!
//! A malformed item must never abort the run: every failure here is a
//! [`RejectReason`] the pipeline absorbs, skipping the candidate.

use super::locator::ItemUnit;
use crate::config::ScrapeConfig;
use crate::document::{RenderedDocument, collapsed_text};
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use thiserror::Error;

static CONTENT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        ".accordion-collapse, .accordion-body, .collapse, [class*='answer'], [class*='risposta'], [class*='content']",
    )
    .expect("BUG: hardcoded content CSS selector is invalid")
});

static ANY_HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6")
        .expect("BUG: hardcoded heading CSS selector is invalid")
});

/// A validated question/answer pair.
///
/// Both fields are non-empty, whitespace-collapsed and length-validated
/// before the pair exists; an invalid candidate never becomes a `QaPair`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// Why a located unit failed validation. Recovered locally by the
/// pipeline; the run continues with the next unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("unit exposes no header and no preceding heading was found")]
    MissingHeader,
    #[error("question too short ({len} chars)")]
    QuestionTooShort { len: usize },
    #[error("unit has no content region")]
    MissingContent,
    #[error("answer too short ({len} chars)")]
    AnswerTooShort { len: usize },
    #[error("answer is only a repetition of the question")]
    AnswerRepeatsQuestion,
}

/// Extract and validate the (question, answer) pair of one unit.
pub fn extract_pair(
    doc: &RenderedDocument,
    unit: &ItemUnit,
    config: &ScrapeConfig,
) -> Result<QaPair, RejectReason> {
    let header = resolve_header(doc, unit).ok_or(RejectReason::MissingHeader)?;

    let question = collapsed_text(header);
    let question_len = question.chars().count();
    if question_len < config.min_question_len() {
        return Err(RejectReason::QuestionTooShort { len: question_len });
    }

    let content = resolve_content(doc, unit, header).ok_or(RejectReason::MissingContent)?;

    let answer = collapsed_text(content);
    let answer_len = answer.chars().count();
    if answer_len < config.min_answer_len() {
        return Err(RejectReason::AnswerTooShort { len: answer_len });
    }

    let answer = strip_question_prefix(&question, answer)?;

    Ok(QaPair { question, answer })
}

/// The unit's associated clickable/heading element, else the nearest
/// preceding heading-level element in document order.
fn resolve_header<'a>(doc: &'a RenderedDocument, unit: &ItemUnit) -> Option<ElementRef<'a>> {
    if let Some(id) = unit.header
        && let Some(element) = doc.element(id)
    {
        return Some(element);
    }
    doc.last_match_before(unit.container, &ANY_HEADING_SELECTOR)
}

/// The unit's own designated collapsible sub-element, else the header's
/// next sibling element.
fn resolve_content<'a>(
    doc: &'a RenderedDocument,
    unit: &ItemUnit,
    header: ElementRef<'a>,
) -> Option<ElementRef<'a>> {
    if let Some(container) = doc.element(unit.container)
        && let Some(content) = container
            .select(&CONTENT_SELECTOR)
            .find(|candidate| candidate.id() != header.id())
    {
        return Some(content);
    }
    header.next_siblings().find_map(ElementRef::wrap)
}

/// Pages sometimes duplicate the question inside the revealed answer;
/// strip an exact leading copy.
fn strip_question_prefix(question: &str, answer: String) -> Result<String, RejectReason> {
    match answer.strip_prefix(question) {
        Some(rest) => {
            let rest = rest.trim();
            if rest.is_empty() {
                return Err(RejectReason::AnswerRepeatsQuestion);
            }
            Ok(rest.to_string())
        }
        None => Ok(answer),
    }
}
