//! Script checks (JS-001 through JS-003).
//!
//! Textual heuristics over `script.js`; no JavaScript is parsed.

use crate::checks::{fixture_unavailable, missing_terms, present_terms, quote_list};
use crate::data::contract::{
    INTERACTIVE_FEATURES, JS_EVENT_REGISTRATION, JS_FUNCTION_MARKERS, MIN_INTERACTIVE_FEATURES,
    MODERN_JS_FEATURES,
};
use crate::engine::orchestrator::RegisteredCheck;
use crate::site::SiteBundle;
use crate::{CheckCategory, CheckResult};

/// Get all script checks
pub fn get_script_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck::new(
            "JS-001",
            "Basic Script Shape",
            CheckCategory::Script,
            "Verify document event listeners and functions are present",
            run_js001,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "JS-002",
            "Modern JavaScript Features",
            CheckCategory::Script,
            "Verify block-scoped declarations and modern DOM APIs are used",
            run_js002,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "JS-003",
            "Interactive Features",
            CheckCategory::Script,
            "Verify enough interactive behaviours are implemented",
            run_js003,
        )
        .depends_on(&["STR-003"]),
    ]
}

/// Run JS-001: Basic Script Shape
pub fn run_js001(bundle: &SiteBundle) -> CheckResult {
    let js = match bundle.script() {
        Ok(js) => js,
        Err(e) => return fixture_unavailable(&e),
    };

    let mut problems = Vec::new();
    if !js.contains(JS_EVENT_REGISTRATION) {
        problems.push("No event listeners found!");
    }
    if present_terms(js, &JS_FUNCTION_MARKERS).is_empty() {
        problems.push("No functions found!");
    }

    if problems.is_empty() {
        CheckResult::pass("Event listeners and functions present")
    } else {
        CheckResult::fail(
            problems.join(" "),
            format!(
                "Expected '{}' and one of {}",
                JS_EVENT_REGISTRATION,
                quote_list(&JS_FUNCTION_MARKERS)
            ),
        )
    }
}

/// Run JS-002: Modern JavaScript Features
pub fn run_js002(bundle: &SiteBundle) -> CheckResult {
    let js = match bundle.script() {
        Ok(js) => js,
        Err(e) => return fixture_unavailable(&e),
    };

    let missing = missing_terms(js, &MODERN_JS_FEATURES);
    match missing.first() {
        None => CheckResult::pass(format!(
            "All {} modern JavaScript features used",
            MODERN_JS_FEATURES.len()
        )),
        Some(first) => CheckResult::fail(
            format!("Modern JavaScript feature '{}' not found!", first),
            format!("Missing: {}", quote_list(&missing)),
        ),
    }
}

/// Names of the interactivity markers found in a script.
///
/// Each marker is evaluated once and counts at most once, whichever of its
/// alternative terms matched.
pub fn interactive_features(js: &str) -> Vec<&'static str> {
    INTERACTIVE_FEATURES
        .iter()
        .filter(|(_, terms)| terms.iter().any(|t| js.contains(t)))
        .map(|(name, _)| *name)
        .collect()
}

/// Run JS-003: Interactive Features
pub fn run_js003(bundle: &SiteBundle) -> CheckResult {
    let js = match bundle.script() {
        Ok(js) => js,
        Err(e) => return fixture_unavailable(&e),
    };

    let found = interactive_features(js);
    if found.len() >= MIN_INTERACTIVE_FEATURES {
        CheckResult::pass(format!(
            "{} of {} interactive features: {}",
            found.len(),
            INTERACTIVE_FEATURES.len(),
            found.join(", ")
        ))
    } else {
        CheckResult::fail(
            "Not enough interactive features implemented!",
            format!(
                "Found {} of {} ({}), need at least {}",
                found.len(),
                INTERACTIVE_FEATURES.len(),
                if found.is_empty() { "none".to_string() } else { found.join(", ") },
                MIN_INTERACTIVE_FEATURES
            ),
        )
    }
}
