//! site-preflight library
//!
//! Checklist validation for a static portfolio site.
//!
//! The site is a fixed trio of assets (`index.html`, `styles.css`,
//! `script.js`) under one root directory. This library provides:
//! - Loading the site bundle and parsing the markup document
//! - Structure, markup, section, accessibility, stylesheet, script,
//!   file-size and security checks
//! - Check orchestration with filtering, fail-fast and parallel execution
//! - Terminal, JSON and JUnit XML reports
//!
//! # Example
//!
//! ```no_run
//! use site_preflight::{run_preflight, PreflightConfig};
//!
//! let config = PreflightConfig::default();
//! let report = run_preflight(config).expect("Validation failed");
//! println!("Checks passed: {}", report.summary().passed);
//! ```

pub mod checks;
pub mod cli;
pub mod data;
pub mod engine;
pub mod error;
pub mod logging;
pub mod site;
pub mod version;

use cli::args::CheckArgs;
use data::contract::DEFAULT_ROOT;
use engine::orchestrator::{create_all_checks, CheckOrchestrator, OrchestratorConfig};
use engine::result::ValidationReport;
use serde::Serialize;
use site::SiteBundle;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

// Re-exports for public API
pub use engine::orchestrator::CheckOrchestrator as Orchestrator;
pub use engine::result::{ResultSummary, ValidationReport as Report};
pub use error::SiteError;

/// Check result indicating the outcome of a validation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckResult {
    /// Check passed
    Pass {
        message: String,
        duration_ms: u64,
    },
    /// Check failed
    Fail {
        message: String,
        details: String,
        duration_ms: u64,
    },
    /// Check could not run because its fixture is unavailable
    Error {
        reason: String,
    },
    /// Check was selected but not run
    Skip {
        reason: String,
    },
}

impl CheckResult {
    /// A passing result
    pub fn pass(message: impl Into<String>) -> Self {
        CheckResult::Pass {
            message: message.into(),
            duration_ms: 0,
        }
    }

    /// A failing result
    pub fn fail(message: impl Into<String>, details: impl Into<String>) -> Self {
        CheckResult::Fail {
            message: message.into(),
            details: details.into(),
            duration_ms: 0,
        }
    }

    /// A result for a check that could not run
    pub fn error(reason: impl Into<String>) -> Self {
        CheckResult::Error {
            reason: reason.into(),
        }
    }

    /// A skipped result
    pub fn skip(reason: impl Into<String>) -> Self {
        CheckResult::Skip {
            reason: reason.into(),
        }
    }

    /// Replace the recorded duration. Errors and skips carry none.
    pub fn with_duration(self, elapsed_ms: u64) -> Self {
        match self {
            CheckResult::Pass { message, .. } => CheckResult::Pass {
                message,
                duration_ms: elapsed_ms,
            },
            CheckResult::Fail { message, details, .. } => CheckResult::Fail {
                message,
                details,
                duration_ms: elapsed_ms,
            },
            other => other,
        }
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, CheckResult::Fail { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CheckResult::Error { .. })
    }

    /// Fail or Error: the run cannot be reported as passing
    pub fn blocks_success(&self) -> bool {
        self.is_fail() || self.is_error()
    }

    /// Short status label
    pub fn status(&self) -> &'static str {
        match self {
            CheckResult::Pass { .. } => "pass",
            CheckResult::Fail { .. } => "fail",
            CheckResult::Error { .. } => "error",
            CheckResult::Skip { .. } => "skip",
        }
    }

    /// Duration, if the check ran
    pub fn duration_ms(&self) -> Option<u64> {
        match self {
            CheckResult::Pass { duration_ms, .. } | CheckResult::Fail { duration_ms, .. } => {
                Some(*duration_ms)
            }
            CheckResult::Error { .. } | CheckResult::Skip { .. } => None,
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass { message, .. } => write!(f, "PASS: {}", message),
            CheckResult::Fail { message, details, .. } => {
                write!(f, "FAIL: {} ({})", message, details)
            }
            CheckResult::Error { reason } => write!(f, "ERROR: {}", reason),
            CheckResult::Skip { reason } => write!(f, "SKIP: {}", reason),
        }
    }
}

/// Check category for grouping related checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    /// Site directory and asset presence
    Structure,
    /// Document shape, title, meta tags and linked resources
    Markup,
    /// Section ids and in-page navigation
    Sections,
    /// Alt text, ARIA labels and semantic elements
    Accessibility,
    /// Stylesheet content heuristics
    Stylesheet,
    /// Script content heuristics
    Script,
    /// File-size budget
    Performance,
    /// Link hardening and inline scripts
    Security,
}

impl CheckCategory {
    /// All categories in report order
    pub const ALL: [CheckCategory; 8] = [
        CheckCategory::Structure,
        CheckCategory::Markup,
        CheckCategory::Sections,
        CheckCategory::Accessibility,
        CheckCategory::Stylesheet,
        CheckCategory::Script,
        CheckCategory::Performance,
        CheckCategory::Security,
    ];

    /// Lowercase identifier used for JUnit suites and JSON
    pub fn slug(&self) -> &'static str {
        match self {
            CheckCategory::Structure => "structure",
            CheckCategory::Markup => "markup",
            CheckCategory::Sections => "sections",
            CheckCategory::Accessibility => "accessibility",
            CheckCategory::Stylesheet => "stylesheet",
            CheckCategory::Script => "script",
            CheckCategory::Performance => "performance",
            CheckCategory::Security => "security",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::Structure => write!(f, "Structure"),
            CheckCategory::Markup => write!(f, "Markup"),
            CheckCategory::Sections => write!(f, "Sections"),
            CheckCategory::Accessibility => write!(f, "Accessibility"),
            CheckCategory::Stylesheet => write!(f, "Stylesheet"),
            CheckCategory::Script => write!(f, "Script"),
            CheckCategory::Performance => write!(f, "Performance"),
            CheckCategory::Security => write!(f, "Security"),
        }
    }
}

/// A validation check with its result.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    /// Unique identifier (e.g., "HTML-002")
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Check category
    pub category: CheckCategory,
    /// Description of what this check validates
    pub description: String,
    /// Result of the check (None if not yet executed)
    pub result: Option<CheckResult>,
}

/// Configuration for a validation run.
#[derive(Debug, Clone)]
pub struct PreflightConfig {
    /// Site root directory
    pub root: PathBuf,
    /// Categories to run (None = all)
    pub categories: Option<Vec<CheckCategory>>,
    /// Specific checks to skip (by ID)
    pub skip_checks: Vec<String>,
    /// Specific checks to run (by ID)
    pub only_checks: Vec<String>,
    /// Run checks in parallel
    pub parallel: bool,
    /// Stop on first failure
    pub fail_fast: bool,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        PreflightConfig {
            root: PathBuf::from(DEFAULT_ROOT),
            categories: None,
            skip_checks: Vec::new(),
            only_checks: Vec::new(),
            parallel: false,
            fail_fast: false,
        }
    }
}

impl PreflightConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &CheckArgs) -> Self {
        let categories = args.categories();

        PreflightConfig {
            root: args.root.clone(),
            categories: if categories.is_empty() {
                None
            } else {
                Some(categories)
            },
            skip_checks: args.skip.clone(),
            only_checks: args.only.clone(),
            parallel: args.parallel,
            fail_fast: args.fail_fast,
        }
    }
}

/// Run validation checks.
///
/// Loads the site bundle under `config.root` and runs the selected checks
/// against it. Selection precedence is `only_checks`, then `skip_checks`,
/// then `categories`, then everything.
///
/// # Example
///
/// ```no_run
/// use site_preflight::{run_preflight, PreflightConfig, CheckCategory};
///
/// // Run only stylesheet checks
/// let config = PreflightConfig {
///     categories: Some(vec![CheckCategory::Stylesheet]),
///     ..Default::default()
/// };
///
/// match run_preflight(config) {
///     Ok(report) => {
///         let summary = report.summary();
///         println!("Passed: {}, Failed: {}", summary.passed, summary.failed);
///     }
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_preflight(config: PreflightConfig) -> Result<ValidationReport, SiteError> {
    let orch_config = OrchestratorConfig {
        parallel: config.parallel,
        fail_fast: config.fail_fast,
        max_parallel: 4,
    };

    let bundle = SiteBundle::load(&config.root);
    let mut orchestrator = CheckOrchestrator::new(orch_config, bundle);
    orchestrator.register_checks(create_all_checks());

    if let Some(unknown) = config
        .only_checks
        .iter()
        .chain(config.skip_checks.iter())
        .find(|id| !orchestrator.has_check(id))
    {
        return Err(SiteError::Usage {
            message: format!("unknown check ID '{}' (run 'site-preflight list')", unknown),
        });
    }

    let report = if !config.only_checks.is_empty() {
        orchestrator.run_specific(&config.only_checks)
    } else if !config.skip_checks.is_empty() {
        orchestrator.run_excluding(&config.skip_checks)
    } else if let Some(ref categories) = config.categories {
        orchestrator.run_categories(categories)
    } else {
        orchestrator.run_all()
    };

    let summary = report.summary();
    info!(
        root = %config.root.display(),
        passed = summary.passed,
        failed = summary.failed,
        errored = summary.errored,
        skipped = summary.skipped,
        "validation finished"
    );

    Ok(report)
}
