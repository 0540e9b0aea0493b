//! Stylesheet checks (CSS-001 through CSS-004).
//!
//! Textual heuristics over `styles.css`. Nothing here parses CSS; every
//! check is a literal substring or character count.

use crate::checks::{fixture_unavailable, missing_terms, present_terms, quote_list};
use crate::data::contract::{CSS_PERFORMANCE_HINTS, MODERN_CSS_FEATURES, RESPONSIVE_MARKERS};
use crate::engine::orchestrator::RegisteredCheck;
use crate::site::SiteBundle;
use crate::{CheckCategory, CheckResult};

/// Get all stylesheet checks
pub fn get_stylesheet_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck::new(
            "CSS-001",
            "Brace Balance",
            CheckCategory::Stylesheet,
            "Verify opening and closing braces balance",
            run_css001,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "CSS-002",
            "Modern CSS Features",
            CheckCategory::Stylesheet,
            "Verify grid, flex, transitions, transforms, animations and backdrop filters are used",
            run_css002,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "CSS-003",
            "Responsive Design",
            CheckCategory::Stylesheet,
            "Verify media queries with max-width rules are present",
            run_css003,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "CSS-004",
            "Performance Hints",
            CheckCategory::Stylesheet,
            "Verify at least one rendering performance hint is used",
            run_css004,
        )
        .depends_on(&["STR-003"]),
    ]
}

/// Run CSS-001: Brace Balance
pub fn run_css001(bundle: &SiteBundle) -> CheckResult {
    let css = match bundle.stylesheet() {
        Ok(css) => css,
        Err(e) => return fixture_unavailable(&e),
    };

    let open = css.matches('{').count();
    let close = css.matches('}').count();

    if open == close {
        CheckResult::pass(format!("{} balanced brace pair(s)", open))
    } else {
        CheckResult::fail(
            "Unbalanced CSS braces detected!",
            format!("{} opening vs {} closing brace(s)", open, close),
        )
    }
}

/// Run CSS-002: Modern CSS Features
pub fn run_css002(bundle: &SiteBundle) -> CheckResult {
    let css = match bundle.stylesheet() {
        Ok(css) => css,
        Err(e) => return fixture_unavailable(&e),
    };

    let missing = missing_terms(css, &MODERN_CSS_FEATURES);
    match missing.first() {
        None => CheckResult::pass(format!(
            "All {} modern CSS features used",
            MODERN_CSS_FEATURES.len()
        )),
        Some(first) => CheckResult::fail(
            format!("Modern CSS feature '{}' not found!", first),
            format!("Missing: {}", quote_list(&missing)),
        ),
    }
}

/// Run CSS-003: Responsive Design
pub fn run_css003(bundle: &SiteBundle) -> CheckResult {
    let css = match bundle.stylesheet() {
        Ok(css) => css,
        Err(e) => return fixture_unavailable(&e),
    };

    let missing = missing_terms(css, &RESPONSIVE_MARKERS);
    if missing.is_empty() {
        return CheckResult::pass("Media queries with max-width rules present");
    }

    let message = if missing.contains(&"@media") {
        "No media queries found for responsive design!"
    } else {
        "No max-width rules found for responsive design!"
    };
    CheckResult::fail(message, format!("Missing: {}", quote_list(&missing)))
}

/// Run CSS-004: Performance Hints
pub fn run_css004(bundle: &SiteBundle) -> CheckResult {
    let css = match bundle.stylesheet() {
        Ok(css) => css,
        Err(e) => return fixture_unavailable(&e),
    };

    let found = present_terms(css, &CSS_PERFORMANCE_HINTS);
    if found.is_empty() {
        CheckResult::fail(
            "No performance optimizations found in CSS!",
            format!("Expected at least one of {}", quote_list(&CSS_PERFORMANCE_HINTS)),
        )
    } else {
        CheckResult::pass(format!("Performance hints used: {}", quote_list(&found)))
    }
}
