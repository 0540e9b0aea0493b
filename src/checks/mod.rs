//! Validation check modules.
//!
//! This module contains the checklist organized by category:
//! - Structure: site directory and asset presence
//! - Markup: document shape, title, meta tags, linked resources
//! - Sections: section ids and in-page navigation
//! - Accessibility: alt text, ARIA labels, semantic elements
//! - Stylesheet: brace balance, feature terms, responsive markers
//! - Script: event wiring, modern syntax, interactivity
//! - Performance: file-size budget
//! - Security: link hardening, inline scripts
//!
//! # Fixtures
//!
//! Every check is a pure function of the site bundle. A check whose fixture
//! (an asset, or the document parsed from it) cannot be loaded returns
//! `CheckResult::Error` naming the asset. An errored check counts against a
//! passing run just as a failure does; the structure checks additionally
//! report the missing asset as a failure.
//!
//! Checks never panic.

pub mod accessibility;
pub mod markup;
pub mod performance;
pub mod script;
pub mod sections;
pub mod security;
pub mod structure;
pub mod stylesheet;

use crate::engine::orchestrator::RegisteredCheck;
use crate::error::SiteError;
use crate::{CheckCategory, CheckResult};

/// Get all registered checks, in checklist order
pub fn get_all_checks() -> Vec<RegisteredCheck> {
    CheckCategory::ALL
        .iter()
        .flat_map(|category| get_checks_by_category(*category))
        .collect()
}

/// Get checks for a specific category
pub fn get_checks_by_category(category: CheckCategory) -> Vec<RegisteredCheck> {
    match category {
        CheckCategory::Structure => structure::get_structure_checks(),
        CheckCategory::Markup => markup::get_markup_checks(),
        CheckCategory::Sections => sections::get_section_checks(),
        CheckCategory::Accessibility => accessibility::get_accessibility_checks(),
        CheckCategory::Stylesheet => stylesheet::get_stylesheet_checks(),
        CheckCategory::Script => script::get_script_checks(),
        CheckCategory::Performance => performance::get_performance_checks(),
        CheckCategory::Security => security::get_security_checks(),
    }
}

/// Result for a check whose fixture could not be loaded
pub(crate) fn fixture_unavailable(err: &SiteError) -> CheckResult {
    CheckResult::error(format!("fixture unavailable: {}", err))
}

/// Terms from `terms` that do not appear in `text`
pub(crate) fn missing_terms<'a>(text: &str, terms: &[&'a str]) -> Vec<&'a str> {
    terms.iter().copied().filter(|t| !text.contains(t)).collect()
}

/// Terms from `terms` that appear in `text`
pub(crate) fn present_terms<'a>(text: &str, terms: &[&'a str]) -> Vec<&'a str> {
    terms.iter().copied().filter(|t| text.contains(t)).collect()
}

/// Quote a list of terms for a diagnostic
pub(crate) fn quote_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|i| format!("'{}'", i))
        .collect::<Vec<_>>()
        .join(", ")
}
