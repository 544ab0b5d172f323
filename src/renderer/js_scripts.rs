//! JavaScript run against the live page.

/// Checks whether the document reached a usable state.
///
/// Readiness requires `readyState === "complete"` and a present `body`,
/// the minimal signal that the root element exists and scripts ran.
pub const READY_STATE_SCRIPT: &str = r#"
    (() => {
        return document.readyState === 'complete' && document.body !== null;
    })()
"#;

/// Expand-all step: click every disclosure control not already expanded.
///
/// The attribute vocabulary varies across page builds, so the selector
/// list is a prioritized set of alternatives. Individual click failures
/// are swallowed so one broken control cannot abort rendering, and
/// already-expanded controls are skipped, making the whole step
/// idempotent. Returns the number of triggers fired.
pub const EXPAND_ALL_SCRIPT: &str = r#"
    (() => {
        const TRIGGER_SELECTORS = [
            "button[data-bs-toggle='collapse']",
            "[data-toggle='collapse']",
            ".accordion-button",
            "[aria-expanded='false']",
            "summary",
            "[role='button']",
        ];

        const seen = new Set();
        let fired = 0;

        for (const selector of TRIGGER_SELECTORS) {
            for (const el of document.querySelectorAll(selector)) {
                if (seen.has(el)) continue;
                seen.add(el);

                if (el.getAttribute('aria-expanded') === 'true') continue;
                const details = el.closest('details');
                if (details && details.open) continue;

                try {
                    el.scrollIntoView({ block: 'center' });
                    el.click();
                    fired += 1;
                } catch (err) {
                    // one broken control must not abort the pass
                }
            }
        }

        return fired;
    })()
"#;
