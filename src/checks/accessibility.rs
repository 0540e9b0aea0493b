//! Accessibility checks (A11Y-001 through A11Y-003).

use crate::checks::fixture_unavailable;
use crate::data::contract::{INTERACTIVE_ELEMENTS, MIN_SEMANTIC_ELEMENTS, SEMANTIC_ELEMENTS};
use crate::engine::orchestrator::RegisteredCheck;
use crate::site::document::snippet;
use crate::site::SiteBundle;
use crate::{CheckCategory, CheckResult};
use scraper::Selector;
use std::sync::LazyLock;

static IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("img").expect("Failed to parse image selector - this is a bug")
});

static INTERACTIVE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&INTERACTIVE_ELEMENTS.join(", "))
        .expect("Failed to parse interactive element selector - this is a bug")
});

static SEMANTIC_SELECTORS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    SEMANTIC_ELEMENTS
        .iter()
        .map(|tag| {
            let selector = Selector::parse(tag)
                .expect("Failed to parse semantic element selector - this is a bug");
            (*tag, selector)
        })
        .collect()
});

/// Get all accessibility checks
pub fn get_accessibility_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck::new(
            "A11Y-001",
            "Image Alt Text",
            CheckCategory::Accessibility,
            "Verify every image carries non-empty alt text",
            run_a11y001,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "A11Y-002",
            "ARIA Labels",
            CheckCategory::Accessibility,
            "Verify at least one interactive element carries an ARIA label",
            run_a11y002,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "A11Y-003",
            "Semantic Elements",
            CheckCategory::Accessibility,
            "Verify enough semantic structural elements are used",
            run_a11y003,
        )
        .depends_on(&["STR-003"]),
    ]
}

/// Run A11Y-001: Image Alt Text
pub fn run_a11y001(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    let images = doc.select(&IMAGE_SELECTOR);
    let offenders: Vec<String> = images
        .iter()
        .filter(|img| img.value().attr("alt").map_or(true, |alt| alt.trim().is_empty()))
        .map(snippet)
        .collect();

    match offenders.first() {
        None => CheckResult::pass(format!("{} image(s), all with alt text", images.len())),
        Some(first) => CheckResult::fail(
            format!("Image missing alt attribute: {}", first),
            format!("{} of {} image(s) lack alt text", offenders.len(), images.len()),
        ),
    }
}

/// Run A11Y-002: ARIA Labels
pub fn run_a11y002(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    let interactive = doc.select(&INTERACTIVE_SELECTOR);
    let labelled = interactive
        .iter()
        .filter(|el| {
            ["aria-label", "aria-labelledby"]
                .iter()
                .any(|attr| el.value().attr(attr).is_some_and(|v| !v.is_empty()))
        })
        .count();

    if labelled > 0 {
        CheckResult::pass(format!(
            "{} of {} interactive element(s) carry ARIA labels",
            labelled,
            interactive.len()
        ))
    } else {
        CheckResult::fail(
            "No ARIA labels found on interactive elements!",
            format!(
                "None of {} {} element(s) has aria-label or aria-labelledby",
                interactive.len(),
                INTERACTIVE_ELEMENTS.join("/")
            ),
        )
    }
}

/// Run A11Y-003: Semantic Elements
pub fn run_a11y003(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    let found: Vec<&str> = SEMANTIC_SELECTORS
        .iter()
        .filter(|(_, selector)| doc.exists(selector))
        .map(|(tag, _)| *tag)
        .collect();

    if found.len() >= MIN_SEMANTIC_ELEMENTS {
        CheckResult::pass(format!("Semantic elements used: {}", found.join(", ")))
    } else {
        CheckResult::fail(
            format!("Not enough semantic elements found. Found: {:?}", found),
            format!(
                "At least {} of {} required",
                MIN_SEMANTIC_ELEMENTS,
                SEMANTIC_ELEMENTS.join(", ")
            ),
        )
    }
}
