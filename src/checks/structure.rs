//! Site structure checks (STR-001 through STR-003).
//!
//! Verifies the site directory exists and every required asset is present
//! and non-empty.

use crate::engine::orchestrator::RegisteredCheck;
use crate::error::SiteError;
use crate::site::{Asset, SiteBundle};
use crate::{CheckCategory, CheckResult};

/// Get all structure checks
pub fn get_structure_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck::new(
            "STR-001",
            "Site Directory",
            CheckCategory::Structure,
            "Verify the site root directory exists",
            run_str001,
        ),
        RegisteredCheck::new(
            "STR-002",
            "Required Files",
            CheckCategory::Structure,
            "Verify index.html, styles.css and script.js exist",
            run_str002,
        )
        .depends_on(&["STR-001"]),
        RegisteredCheck::new(
            "STR-003",
            "Files Not Empty",
            CheckCategory::Structure,
            "Verify every required file has content",
            run_str003,
        )
        .depends_on(&["STR-002"]),
    ]
}

/// Run STR-001: Site Directory
pub fn run_str001(bundle: &SiteBundle) -> CheckResult {
    if bundle.root_exists {
        CheckResult::pass(format!("Site directory '{}' found", bundle.root.display()))
    } else {
        CheckResult::fail(
            format!("Site directory '{}' not found!", bundle.root.display()),
            SiteError::MissingRoot {
                path: bundle.root.clone(),
            }
            .to_string(),
        )
    }
}

/// Run STR-002: Required Files
pub fn run_str002(bundle: &SiteBundle) -> CheckResult {
    let mut missing = Vec::new();
    let mut unreadable = Vec::new();
    let mut errors = Vec::new();

    for asset in Asset::ALL {
        match bundle.file(asset) {
            Ok(_) => {}
            Err(e @ SiteError::MissingAsset { .. }) => {
                missing.push(asset.file_name());
                errors.push(e.to_string());
            }
            Err(e) => {
                unreadable.push(asset.file_name());
                errors.push(e.to_string());
            }
        }
    }

    let message = match (missing.as_slice(), unreadable.as_slice()) {
        ([], []) => {
            return CheckResult::pass(format!("All {} required files present", Asset::ALL.len()));
        }
        ([name], []) => format!("Required file '{}' not found!", name),
        (names, []) => format!("Required files not found: {}", names.join(", ")),
        ([], names) => format!("Required file(s) unreadable: {}", names.join(", ")),
        (missing, unreadable) => format!(
            "Required files not found: {}; unreadable: {}",
            missing.join(", "),
            unreadable.join(", ")
        ),
    };

    CheckResult::fail(message, errors.join("; "))
}

/// Run STR-003: Files Not Empty
///
/// Files that are absent are reported by STR-002 and ignored here.
pub fn run_str003(bundle: &SiteBundle) -> CheckResult {
    let present: Vec<_> = Asset::ALL
        .iter()
        .filter_map(|asset| bundle.file(*asset).ok())
        .collect();

    if present.is_empty() {
        return CheckResult::error("No required files to inspect");
    }

    let empty: Vec<_> = present
        .iter()
        .filter(|loaded| loaded.is_blank())
        .map(|loaded| loaded.asset.file_name())
        .collect();

    if empty.is_empty() {
        CheckResult::pass(format!("{} file(s) have content", present.len()))
    } else {
        let details = empty
            .iter()
            .map(|name| {
                SiteError::EmptyAsset {
                    asset: name.to_string(),
                }
                .to_string()
            })
            .collect::<Vec<_>>()
            .join("; ");
        CheckResult::fail(format!("Empty file(s): {}", empty.join(", ")), details)
    }
}
