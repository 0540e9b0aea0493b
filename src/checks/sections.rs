//! Section coverage checks (NAV-001, NAV-002).

use crate::checks::fixture_unavailable;
use crate::data::contract::EXPECTED_SECTIONS;
use crate::engine::orchestrator::RegisteredCheck;
use crate::site::SiteBundle;
use crate::{CheckCategory, CheckResult};

/// Get all section checks
pub fn get_section_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck::new(
            "NAV-001",
            "Required Sections",
            CheckCategory::Sections,
            "Verify each required section id appears exactly once",
            run_nav001,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "NAV-002",
            "Navigation Links",
            CheckCategory::Sections,
            "Verify an in-page anchor exists for each required section",
            run_nav002,
        )
        .depends_on(&["STR-003"]),
    ]
}

/// Run NAV-001: Required Sections
pub fn run_nav001(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    let mut problems = Vec::new();
    for id in EXPECTED_SECTIONS {
        match doc.count_id(id) {
            1 => {}
            0 => problems.push(format!("Section with id '{}' not found!", id)),
            n => problems.push(format!("Section id '{}' is used {} times", id, n)),
        }
    }

    if problems.is_empty() {
        CheckResult::pass(format!("All {} sections present", EXPECTED_SECTIONS.len()))
    } else {
        CheckResult::fail(problems[0].clone(), problems.join("; "))
    }
}

/// Run NAV-002: Navigation Links
pub fn run_nav002(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    let hrefs = doc.anchor_hrefs();
    let missing: Vec<String> = EXPECTED_SECTIONS
        .iter()
        .map(|id| format!("#{}", id))
        .filter(|expected| !hrefs.iter().any(|href| *href == expected.as_str()))
        .collect();

    match missing.as_slice() {
        [] => CheckResult::pass(format!(
            "Navigation links to all {} sections present",
            EXPECTED_SECTIONS.len()
        )),
        [first, ..] => CheckResult::fail(
            format!("Navigation link to '{}' not found!", first),
            format!("Missing in-page anchors: {}", missing.join(", ")),
        ),
    }
}
