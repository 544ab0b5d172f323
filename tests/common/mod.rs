//! Shared fixtures and fake renderers for the faqscrape test suite

use async_trait::async_trait;
use faqscrape::error::RenderError;
use faqscrape::renderer::{PageSession, Renderer};
use std::time::Duration;

/// Wrap a body fragment in a minimal page shell
#[allow(dead_code)]
pub fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="it">
<head><meta charset="UTF-8"><title>FAQ</title></head>
<body>
{body}
</body>
</html>"#
    )
}

/// One Bootstrap-style accordion item
#[allow(dead_code)]
pub fn accordion_item(question: &str, answer: &str) -> String {
    format!(
        r#"<div class="accordion-item">
  <h3 class="accordion-header">
    <button class="accordion-button" aria-expanded="true">{question}</button>
  </h3>
  <div class="accordion-collapse collapse show">
    <div class="accordion-body">{answer}</div>
  </div>
</div>"#
    )
}

/// Renderer that serves a canned snapshot
#[allow(dead_code)]
pub struct StaticRenderer {
    markup: String,
}

#[allow(dead_code)]
impl StaticRenderer {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

#[async_trait]
impl Renderer for StaticRenderer {
    async fn render(&self, _url: &str) -> Result<String, RenderError> {
        Ok(self.markup.clone())
    }
}

/// Renderer that never reaches a ready state
#[allow(dead_code)]
pub struct TimedOutRenderer;

#[async_trait]
impl Renderer for TimedOutRenderer {
    async fn render(&self, _url: &str) -> Result<String, RenderError> {
        Err(RenderError::Timeout(Duration::from_secs(15)))
    }
}

/// Renderer whose navigation fails outright
#[allow(dead_code)]
pub struct BrokenRenderer;

#[async_trait]
impl Renderer for BrokenRenderer {
    async fn render(&self, _url: &str) -> Result<String, RenderError> {
        Err(RenderError::Navigation("net::ERR_NAME_NOT_RESOLVED".into()))
    }
}

/// Page session over canned markup that records the calls made to it
#[allow(dead_code)]
pub struct ScriptedSession {
    pub markup: String,
    pub becomes_ready: bool,
    pub calls: Vec<String>,
    pub triggers_fired: i64,
}

#[allow(dead_code)]
impl ScriptedSession {
    pub fn ready(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            becomes_ready: true,
            calls: Vec::new(),
            triggers_fired: 0,
        }
    }

    pub fn never_ready() -> Self {
        Self {
            markup: String::new(),
            becomes_ready: false,
            calls: Vec::new(),
            triggers_fired: 0,
        }
    }
}

#[async_trait]
impl PageSession for ScriptedSession {
    async fn navigate(&mut self, url: &str) -> Result<(), RenderError> {
        self.calls.push(format!("navigate:{url}"));
        Ok(())
    }

    async fn wait_for_ready(&mut self, timeout: Duration) -> Result<(), RenderError> {
        self.calls.push("wait_for_ready".into());
        if self.becomes_ready {
            Ok(())
        } else {
            Err(RenderError::Timeout(timeout))
        }
    }

    async fn run_script(&mut self, _script: &str) -> Result<i64, RenderError> {
        self.calls.push("run_script".into());
        Ok(self.triggers_fired)
    }

    async fn capture_markup(&mut self) -> Result<String, RenderError> {
        self.calls.push("capture_markup".into());
        Ok(self.markup.clone())
    }

    async fn close(&mut self) {
        self.calls.push("close".into());
    }
}
