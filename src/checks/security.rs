//! Security hygiene checks (SEC-001, SEC-002).
//!
//! Checks that external links opening a new browsing context are hardened
//! with `noopener`/`noreferrer`, and that inline scripts stay rare.

use crate::checks::{fixture_unavailable, quote_list};
use crate::data::contract::{MAX_INLINE_SCRIPTS, SAFE_LINK_RELS};
use crate::engine::orchestrator::RegisteredCheck;
use crate::site::document::{snippet, ANCHOR_SELECTOR};
use crate::site::SiteBundle;
use crate::{CheckCategory, CheckResult};
use scraper::Selector;
use std::sync::LazyLock;

static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script").expect("Failed to parse script selector - this is a bug")
});

/// Get all security checks
pub fn get_security_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck::new(
            "SEC-001",
            "External Link Hardening",
            CheckCategory::Security,
            "Verify target=\"_blank\" external links carry rel=\"noopener\" or rel=\"noreferrer\"",
            run_sec001,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "SEC-002",
            "Inline Scripts",
            CheckCategory::Security,
            "Verify the number of inline script blocks stays within limit",
            run_sec002,
        )
        .depends_on(&["STR-003"]),
    ]
}

/// Run SEC-001: External Link Hardening
pub fn run_sec001(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    let external: Vec<_> = doc
        .select(&ANCHOR_SELECTOR)
        .into_iter()
        .filter(|a| {
            let el = a.value();
            el.attr("href").is_some_and(|href| href.starts_with("http"))
                && el.attr("target") == Some("_blank")
        })
        .collect();

    let unsafe_links: Vec<String> = external
        .iter()
        .filter(|a| {
            let rel = a.value().attr("rel").unwrap_or("");
            !rel.split_whitespace().any(|token| {
                SAFE_LINK_RELS
                    .iter()
                    .any(|safe| token.eq_ignore_ascii_case(safe))
            })
        })
        .map(snippet)
        .collect();

    match unsafe_links.first() {
        None => CheckResult::pass(format!(
            "{} external target=\"_blank\" link(s), all hardened",
            external.len()
        )),
        Some(first) => CheckResult::fail(
            format!("External link missing security attributes: {}", first),
            format!(
                "{} link(s) need rel containing one of {}: {}",
                unsafe_links.len(),
                quote_list(&SAFE_LINK_RELS),
                unsafe_links.join(" | ")
            ),
        ),
    }
}

/// Run SEC-002: Inline Scripts
pub fn run_sec002(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    let inline = doc
        .select(&SCRIPT_SELECTOR)
        .into_iter()
        .filter(|s| s.value().attr("src").is_none())
        .filter(|s| !s.text().collect::<String>().trim().is_empty())
        .count();

    if inline <= MAX_INLINE_SCRIPTS {
        CheckResult::pass(format!(
            "{} inline script(s) (limit: {})",
            inline, MAX_INLINE_SCRIPTS
        ))
    } else {
        CheckResult::fail(
            format!("Too many inline scripts found: {}", inline),
            format!("At most {} non-empty inline script blocks allowed", MAX_INLINE_SCRIPTS),
        )
    }
}
