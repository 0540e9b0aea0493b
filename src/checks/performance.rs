//! Performance checks (PERF-001).
//!
//! Enforces the per-asset byte budget.

use crate::data::contract::size_limit;
use crate::engine::orchestrator::RegisteredCheck;
use crate::site::{Asset, SiteBundle};
use crate::{CheckCategory, CheckResult};

/// Get all performance checks
pub fn get_performance_checks() -> Vec<RegisteredCheck> {
    vec![RegisteredCheck::new(
        "PERF-001",
        "File Size Budget",
        CheckCategory::Performance,
        "Verify each asset stays within its byte ceiling",
        run_perf001,
    )
    .depends_on(&["STR-002"])]
}

/// Run PERF-001: File Size Budget
///
/// Absent assets are reported by STR-002; only readable files are measured.
pub fn run_perf001(bundle: &SiteBundle) -> CheckResult {
    let mut measured = Vec::new();
    let mut oversized = Vec::new();

    for asset in Asset::ALL {
        let Ok(file) = bundle.file(asset) else {
            continue;
        };
        let Some(limit) = size_limit(asset.file_name()) else {
            continue;
        };

        measured.push(format!("{} {}/{} bytes", asset, file.size_bytes, limit));
        if file.size_bytes > limit {
            oversized.push(format!(
                "File '{}' is too large: {} bytes (limit: {} bytes)",
                asset, file.size_bytes, limit
            ));
        }
    }

    if measured.is_empty() {
        return CheckResult::error("No required files to measure");
    }

    match oversized.first() {
        None => CheckResult::pass(format!("Within budget: {}", measured.join(", "))),
        Some(first) => CheckResult::fail(first.clone(), oversized.join("; ")),
    }
}
