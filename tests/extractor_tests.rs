//! Tests for header/content pairing and validation floors

use faqscrape::config::ScrapeConfig;
use faqscrape::document::RenderedDocument;
use faqscrape::extract::{RejectReason, extract_pair, locate_items};

mod common;
use common::{accordion_item, page};

fn single_unit_pair(markup: &str) -> Result<faqscrape::QaPair, RejectReason> {
    let config = ScrapeConfig::default();
    let doc = RenderedDocument::parse(markup);
    let units = locate_items(&doc, config.classifier().ancestor_depth);
    assert_eq!(units.len(), 1, "fixture must locate exactly one unit");
    extract_pair(&doc, &units[0], &config)
}

#[test]
fn extracts_question_and_answer_from_accordion_item() {
    let markup = page(&accordion_item(
        "Come posso pagare la bolletta?",
        "Con addebito diretto oppure bollettino postale.",
    ));
    let pair = single_unit_pair(&markup).expect("valid pair");
    assert_eq!(pair.question, "Come posso pagare la bolletta?");
    assert_eq!(pair.answer, "Con addebito diretto oppure bollettino postale.");
}

#[test]
fn question_below_five_chars_is_rejected() {
    let markup = page(&accordion_item("Chi?", "Una risposta lunga a sufficienza."));
    assert_eq!(
        single_unit_pair(&markup),
        Err(RejectReason::QuestionTooShort { len: 4 })
    );
}

#[test]
fn question_of_exactly_five_chars_is_retained() {
    let markup = page(&accordion_item("Dove?", "Una risposta lunga a sufficienza."));
    assert!(single_unit_pair(&markup).is_ok());
}

#[test]
fn answer_below_ten_chars_is_rejected() {
    let markup = page(&accordion_item("Dove si trova lo sportello?", "Risposta9"));
    assert_eq!(
        single_unit_pair(&markup),
        Err(RejectReason::AnswerTooShort { len: 9 })
    );
}

#[test]
fn answer_of_exactly_ten_chars_is_retained() {
    let markup = page(&accordion_item("Dove si trova lo sportello?", "Risposta10"));
    let pair = single_unit_pair(&markup).expect("boundary answer retained");
    assert_eq!(pair.answer, "Risposta10");
}

#[test]
fn validation_floors_are_configurable() {
    let config = ScrapeConfig::default()
        .with_min_question_len(30)
        .with_min_answer_len(60);
    let markup = page(&accordion_item(
        "Come posso pagare la bolletta?",
        "Con addebito diretto oppure bollettino postale.",
    ));
    let doc = RenderedDocument::parse(&markup);
    let units = locate_items(&doc, config.classifier().ancestor_depth);

    // the question meets the raised floor exactly; the answer no longer does
    assert_eq!(
        extract_pair(&doc, &units[0], &config),
        Err(RejectReason::AnswerTooShort { len: 47 })
    );
}

#[test]
fn leading_question_copy_is_stripped_from_answer() {
    let markup = page(&accordion_item(
        "Come si paga la bolletta?",
        "Come si paga la bolletta? Con addebito diretto.",
    ));
    let pair = single_unit_pair(&markup).expect("valid pair");
    assert_eq!(pair.answer, "Con addebito diretto.");
}

#[test]
fn answer_that_only_repeats_the_question_is_rejected() {
    let markup = page(&accordion_item(
        "Come si paga la bolletta?",
        "Come si paga la bolletta?",
    ));
    assert_eq!(
        single_unit_pair(&markup),
        Err(RejectReason::AnswerRepeatsQuestion)
    );
}

#[test]
fn header_falls_back_to_nearest_preceding_heading() {
    // The item exposes no clickable/heading element of its own
    let markup = page(
        r#"<h4>Quali documenti servono per la voltura?</h4>
<div class="faq-item">
  <div class="collapse show">Serve un documento di identità valido.</div>
</div>"#,
    );
    let pair = single_unit_pair(&markup).expect("valid pair");
    assert_eq!(pair.question, "Quali documenti servono per la voltura?");
    assert_eq!(pair.answer, "Serve un documento di identità valido.");
}

#[test]
fn content_falls_back_to_header_next_sibling() {
    let markup = page(
        r#"<div>
  <button aria-expanded="false">Dove trovo il contratto firmato?</button>
  <div>Nella tua area personale del sito.</div>
</div>"#,
    );
    let pair = single_unit_pair(&markup).expect("valid pair");
    assert_eq!(pair.answer, "Nella tua area personale del sito.");
}

#[test]
fn unit_without_content_region_is_rejected() {
    let markup = page(
        r#"<div class="faq-item">
  <button>Domanda senza alcuna risposta?</button>
</div>"#,
    );
    assert_eq!(single_unit_pair(&markup), Err(RejectReason::MissingContent));
}

#[test]
fn nested_markup_text_is_whitespace_collapsed() {
    let markup = page(
        r#"<div class="accordion-item">
  <button class="accordion-button">Come   si
     attiva il servizio?</button>
  <div class="accordion-collapse"><p>In tre  passaggi</p><p>dal portale clienti.</p></div>
</div>"#,
    );
    let pair = single_unit_pair(&markup).expect("valid pair");
    assert_eq!(pair.question, "Come si attiva il servizio?");
    assert_eq!(pair.answer, "In tre passaggi dal portale clienti.");
}
