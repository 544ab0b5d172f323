//! Tests for the session-driving render sequence

use faqscrape::error::RenderError;
use faqscrape::renderer::{RenderSettings, render_with_session};
use std::time::Duration;

mod common;
use common::ScriptedSession;

fn instant_settings() -> RenderSettings {
    RenderSettings {
        ready_timeout: Duration::from_secs(1),
        settle_interval: Duration::ZERO,
    }
}

#[tokio::test]
async fn drives_the_full_sequence_in_order() {
    let mut session = ScriptedSession::ready("<html><body>ok</body></html>");
    session.triggers_fired = 4;

    let markup = render_with_session(&mut session, "https://example.com/faq", &instant_settings())
        .await
        .expect("render succeeds");

    assert_eq!(markup, "<html><body>ok</body></html>");
    assert_eq!(
        session.calls,
        vec![
            "navigate:https://example.com/faq",
            "wait_for_ready",
            "run_script",
            "capture_markup",
            "close",
        ]
    );
}

#[tokio::test]
async fn ready_timeout_propagates_and_still_closes_the_session() {
    let mut session = ScriptedSession::never_ready();

    let err = render_with_session(&mut session, "https://example.com/faq", &instant_settings())
        .await
        .expect_err("timeout must propagate");

    assert!(matches!(err, RenderError::Timeout(_)));
    assert_eq!(session.calls.last().map(String::as_str), Some("close"));
    // capture never happened
    assert!(!session.calls.iter().any(|c| c == "capture_markup"));
}

#[tokio::test]
async fn expansion_runs_exactly_once_per_render() {
    let mut session = ScriptedSession::ready("<html></html>");

    render_with_session(&mut session, "https://example.com/faq", &instant_settings())
        .await
        .expect("render succeeds");

    let script_runs = session.calls.iter().filter(|c| *c == "run_script").count();
    assert_eq!(script_runs, 1);
}
