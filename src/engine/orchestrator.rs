//! Check execution orchestrator.
//!
//! Manages check registration, dependency ordering, and execution against a
//! loaded site bundle.
//!
//! # Graceful Degradation
//!
//! This module handles errors gracefully:
//! - Check panics: Caught via std::panic::catch_unwind, converted to Fail result
//! - Dependency failure: Continues with remaining checks unless fail_fast
//! - Fail-fast stop: Selected checks that never ran are recorded as Skip
//! - Invalid check ID: Silently skipped in run_specific/run_excluding
//! - Empty check list: Returns empty report (not an error)
//!
//! The orchestrator ensures all selected checks complete regardless of
//! individual check failures, unless fail_fast is enabled.
//! No function in this module will panic.

use crate::engine::result::{ResultAggregator, ValidationReport};
use crate::site::SiteBundle;
use crate::{Check, CheckCategory, CheckResult};
use std::collections::HashSet;
use std::thread;
use std::time::Instant;
use tracing::{debug, warn};

/// Signature of a check body
pub type CheckFn = Box<dyn Fn(&SiteBundle) -> CheckResult + Send + Sync>;

/// Orchestrator configuration
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub parallel: bool,
    pub fail_fast: bool,
    pub max_parallel: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        OrchestratorConfig {
            parallel: false,
            fail_fast: false,
            max_parallel: 4,
        }
    }
}

/// A registered check with its execution function
pub struct RegisteredCheck {
    pub id: String,
    pub name: String,
    pub category: CheckCategory,
    pub description: String,
    pub check_fn: CheckFn,
    pub dependencies: Vec<String>,
}

impl RegisteredCheck {
    /// Register a check body under the given metadata
    pub fn new(
        id: &str,
        name: &str,
        category: CheckCategory,
        description: &str,
        check_fn: impl Fn(&SiteBundle) -> CheckResult + Send + Sync + 'static,
    ) -> Self {
        RegisteredCheck {
            id: id.to_string(),
            name: name.to_string(),
            category,
            description: description.to_string(),
            check_fn: Box::new(check_fn),
            dependencies: Vec::new(),
        }
    }

    /// Declare checks that must run before this one when both are selected
    pub fn depends_on(mut self, ids: &[&str]) -> Self {
        self.dependencies.extend(ids.iter().map(|id| id.to_string()));
        self
    }

    fn to_check(&self, result: CheckResult) -> Check {
        Check {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category,
            description: self.description.clone(),
            result: Some(result),
        }
    }
}

/// Check orchestrator
pub struct CheckOrchestrator {
    config: OrchestratorConfig,
    bundle: SiteBundle,
    checks: Vec<RegisteredCheck>,
}

impl CheckOrchestrator {
    /// Create a new orchestrator over a loaded site bundle
    pub fn new(config: OrchestratorConfig, bundle: SiteBundle) -> Self {
        CheckOrchestrator {
            config,
            bundle,
            checks: Vec::new(),
        }
    }

    /// Register checks for execution
    pub fn register_checks(&mut self, checks: Vec<RegisteredCheck>) {
        self.checks.extend(checks);
    }

    /// Register a single check
    pub fn register_check(&mut self, check: RegisteredCheck) {
        self.checks.push(check);
    }

    /// True when a check with this ID is registered
    pub fn has_check(&self, id: &str) -> bool {
        self.checks.iter().any(|c| c.id == id)
    }

    /// Run all registered checks
    pub fn run_all(&self) -> ValidationReport {
        self.run_checks(&self.checks.iter().map(|c| c.id.clone()).collect::<Vec<_>>())
    }

    /// Run checks in a specific category
    pub fn run_category(&self, category: CheckCategory) -> ValidationReport {
        self.run_categories(&[category])
    }

    /// Run checks in multiple categories
    pub fn run_categories(&self, categories: &[CheckCategory]) -> ValidationReport {
        let ids: Vec<String> = self
            .checks
            .iter()
            .filter(|c| categories.contains(&c.category))
            .map(|c| c.id.clone())
            .collect();
        self.run_checks(&ids)
    }

    /// Run specific checks by ID
    pub fn run_specific(&self, check_ids: &[String]) -> ValidationReport {
        self.run_checks(check_ids)
    }

    /// Run all checks except specified IDs
    pub fn run_excluding(&self, skip_ids: &[String]) -> ValidationReport {
        let ids: Vec<String> = self
            .checks
            .iter()
            .filter(|c| !skip_ids.contains(&c.id))
            .map(|c| c.id.clone())
            .collect();
        self.run_checks(&ids)
    }

    /// Execute the specified checks
    fn run_checks(&self, check_ids: &[String]) -> ValidationReport {
        let start = Instant::now();
        let mut aggregator = ResultAggregator::new();

        let ordered = self.resolve_dependencies(check_ids);
        debug!(count = ordered.len(), parallel = self.config.parallel, "running checks");

        if self.config.parallel {
            self.run_parallel(&ordered, &mut aggregator);
        } else {
            self.run_sequential(&ordered, &mut aggregator);
        }

        if self.config.fail_fast {
            let not_run: Vec<Check> = ordered
                .iter()
                .filter(|c| !aggregator.contains(&c.id))
                .map(|c| c.to_check(CheckResult::skip("Not run: stopped after first failure")))
                .collect();
            for check in not_run {
                aggregator.add_result(check);
            }
        }

        aggregator.set_metadata(
            self.bundle.root.display().to_string(),
            start.elapsed().as_millis() as u64,
        );
        aggregator.to_report()
    }

    /// Run checks sequentially
    fn run_sequential(&self, ordered: &[&RegisteredCheck], aggregator: &mut ResultAggregator) {
        for check in ordered {
            let result = self.execute_check(check);
            let failed = result.blocks_success();
            aggregator.add_result(check.to_check(result));

            if self.config.fail_fast && failed {
                debug!(check = %check.id, "fail-fast: stopping after first failure");
                break;
            }
        }
    }

    /// Run checks in parallel, batch by batch, where dependencies allow
    fn run_parallel(&self, ordered: &[&RegisteredCheck], aggregator: &mut ResultAggregator) {
        let selected: HashSet<&str> = ordered.iter().map(|c| c.id.as_str()).collect();
        let mut remaining: Vec<&RegisteredCheck> = ordered.to_vec();
        let mut completed: HashSet<&str> = HashSet::new();

        while !remaining.is_empty() {
            // A dependency outside the selection never blocks
            let runnable: Vec<&RegisteredCheck> = remaining
                .iter()
                .copied()
                .filter(|check| {
                    check.dependencies.iter().all(|dep| {
                        !selected.contains(dep.as_str()) || completed.contains(dep.as_str())
                    })
                })
                .take(self.config.max_parallel.max(1))
                .collect();

            if runnable.is_empty() {
                warn!("unsatisfiable check dependencies, running remaining checks sequentially");
                self.run_sequential(&remaining, aggregator);
                break;
            }

            let results: Vec<Check> = thread::scope(|s| {
                let handles: Vec<_> = runnable
                    .iter()
                    .map(|check| s.spawn(move || check.to_check(self.execute_check(check))))
                    .collect();

                handles
                    .into_iter()
                    .zip(runnable.iter())
                    .map(|(handle, check)| {
                        handle.join().unwrap_or_else(|_| {
                            check.to_check(CheckResult::fail(
                                "Check thread terminated unexpectedly",
                                "An unexpected error occurred",
                            ))
                        })
                    })
                    .collect()
            });

            let batch_failed = results
                .iter()
                .any(|c| c.result.as_ref().is_some_and(CheckResult::blocks_success));
            for check in results {
                aggregator.add_result(check);
            }

            for check in &runnable {
                completed.insert(check.id.as_str());
            }
            remaining.retain(|check| !completed.contains(check.id.as_str()));

            if self.config.fail_fast && batch_failed {
                break;
            }
        }
    }

    /// Execute a single check, timing it and converting panics into failures
    fn execute_check(&self, check: &RegisteredCheck) -> CheckResult {
        let start = Instant::now();
        debug!(check = %check.id, "starting check");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            (check.check_fn)(&self.bundle)
        }));
        let elapsed = start.elapsed().as_millis() as u64;

        let result = match result {
            Ok(check_result) => check_result.with_duration(elapsed),
            Err(_) => {
                warn!(check = %check.id, "check panicked");
                CheckResult::Fail {
                    message: "Check panicked during execution".to_string(),
                    details: "An unexpected error occurred".to_string(),
                    duration_ms: elapsed,
                }
            }
        };

        debug!(
            check = %check.id,
            status = result.status(),
            elapsed_ms = elapsed,
            "check finished"
        );
        result
    }

    /// Resolve check dependencies and return an ordered list.
    ///
    /// Dependencies outside `check_ids` are not pulled in; unknown IDs are
    /// dropped.
    fn resolve_dependencies(&self, check_ids: &[String]) -> Vec<&RegisteredCheck> {
        fn visit<'a>(
            id: &str,
            checks: &'a [RegisteredCheck],
            check_ids: &[String],
            visited: &mut HashSet<String>,
            result: &mut Vec<&'a RegisteredCheck>,
        ) {
            if !visited.insert(id.to_string()) {
                return;
            }

            if let Some(check) = checks.iter().find(|c| c.id == id) {
                for dep in &check.dependencies {
                    if check_ids.contains(dep) {
                        visit(dep, checks, check_ids, visited, result);
                    }
                }
                if check_ids.iter().any(|c| c == id) {
                    result.push(check);
                }
            }
        }

        let mut result = Vec::new();
        let mut visited = HashSet::new();
        for id in check_ids {
            visit(id, &self.checks, check_ids, &mut visited, &mut result);
        }
        result
    }
}

/// Create all registered checks with their execution functions
pub fn create_all_checks() -> Vec<RegisteredCheck> {
    crate::checks::get_all_checks()
}
