//! Result aggregation and reporting.
//!
//! Collects check results and generates summaries.

use crate::{Check, CheckResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub passed: u32,
    pub failed: u32,
    /// Checks that could not run because their fixture was unavailable
    pub errored: u32,
    pub skipped: u32,
    pub total: u32,
    pub total_duration_ms: u64,
}

impl ResultSummary {
    fn from_checks(checks: &[Check]) -> Self {
        let mut summary = ResultSummary::default();

        for check in checks {
            summary.total += 1;

            match &check.result {
                Some(CheckResult::Pass { duration_ms, .. }) => {
                    summary.passed += 1;
                    summary.total_duration_ms += duration_ms;
                }
                Some(CheckResult::Fail { duration_ms, .. }) => {
                    summary.failed += 1;
                    summary.total_duration_ms += duration_ms;
                }
                Some(CheckResult::Error { .. }) => {
                    summary.errored += 1;
                }
                Some(CheckResult::Skip { .. }) | None => {
                    summary.skipped += 1;
                }
            }
        }

        summary
    }

    /// True when nothing failed and every selected check could run
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

/// Validation report containing all check results
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub timestamp: DateTime<Utc>,
    /// Site root the checks ran against
    pub root: String,
    pub checks: Vec<Check>,
    pub total_duration_ms: u64,
}

impl ValidationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        ValidationReport {
            timestamp: Utc::now(),
            root: String::new(),
            checks: Vec::new(),
            total_duration_ms: 0,
        }
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        ResultSummary::from_checks(&self.checks)
    }

    /// Failed and errored checks, in execution order
    pub fn failures(&self) -> Vec<&Check> {
        self.checks
            .iter()
            .filter(|c| c.result.as_ref().is_some_and(CheckResult::blocks_success))
            .collect()
    }

    /// Result of one check by ID
    pub fn result_of(&self, id: &str) -> Option<&CheckResult> {
        self.checks
            .iter()
            .find(|c| c.id == id)
            .and_then(|c| c.result.as_ref())
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Result aggregator for collecting check results
pub struct ResultAggregator {
    checks: Vec<Check>,
    root: String,
    total_duration_ms: u64,
}

impl ResultAggregator {
    /// Create a new result aggregator
    pub fn new() -> Self {
        ResultAggregator {
            checks: Vec::new(),
            root: String::new(),
            total_duration_ms: 0,
        }
    }

    /// Set report metadata
    pub fn set_metadata(&mut self, root: String, total_duration_ms: u64) {
        self.root = root;
        self.total_duration_ms = total_duration_ms;
    }

    /// Add a completed check result
    pub fn add_result(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Whether a result for this check ID was recorded
    pub fn contains(&self, id: &str) -> bool {
        self.checks.iter().any(|c| c.id == id)
    }

    /// Get summary statistics
    pub fn get_summary(&self) -> ResultSummary {
        ResultSummary::from_checks(&self.checks)
    }

    /// Create final validation report
    pub fn to_report(&self) -> ValidationReport {
        ValidationReport {
            timestamp: Utc::now(),
            root: self.root.clone(),
            checks: self.checks.clone(),
            total_duration_ms: self.total_duration_ms,
        }
    }
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}
