//! Output formatting for site-preflight.
//!
//! Provides terminal, JSON, and JUnit XML output formatters.
//!
//! # Graceful Degradation
//!
//! - Non-TTY output: Color disabled via NO_COLOR or --no-color
//! - Empty reports: Produces valid output with zero checks
//! - Serialization failure: JSON formatter falls back to an error object
//!
//! All formatters produce valid output for any ValidationReport input.

use crate::cli::args::OutputFormat;
use crate::engine::result::ValidationReport;
use crate::{Check, CheckCategory, CheckResult};
use serde_json::json;

const RULE: &str =
    "--------------------------------------------------------------------------------";

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> String;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            quiet,
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    fn gray(&self, text: &str) -> String {
        self.colorize(text, "90")
    }

    fn check_line(&self, check: &Check) -> String {
        let (status, message) = match &check.result {
            Some(CheckResult::Pass { message, duration_ms }) => {
                let msg = if self.verbose {
                    format!("{} ({}ms)", message, duration_ms)
                } else {
                    message.clone()
                };
                (self.green("[PASS]"), msg)
            }
            Some(CheckResult::Fail { message, details, duration_ms }) => {
                let msg = if self.verbose {
                    format!("{} - {} ({}ms)", message, details, duration_ms)
                } else {
                    message.clone()
                };
                (self.red("[FAIL]"), msg)
            }
            Some(CheckResult::Error { reason }) => (self.yellow("[ERROR]"), reason.clone()),
            Some(CheckResult::Skip { reason }) => (self.gray("[SKIP]"), reason.clone()),
            None => (self.gray("[----]"), "Not executed".to_string()),
        };

        format!("  {} {}: {} ({})\n", status, check.id, check.name, message)
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        // Header
        output.push_str(RULE);
        output.push('\n');
        output.push_str("site-preflight validation report\n");
        output.push_str(&format!("Site: {}\n", report.root));
        output.push_str(&format!(
            "Timestamp: {}\n",
            report.timestamp.format("%Y-%m-%dT%H:%M:%SZ")
        ));
        output.push_str(RULE);
        output.push_str("\n\n");

        for category in CheckCategory::ALL {
            let category_checks: Vec<&Check> = report
                .checks
                .iter()
                .filter(|c| c.category == category)
                .filter(|c| {
                    !self.quiet || c.result.as_ref().is_some_and(CheckResult::blocks_success)
                })
                .collect();

            if category_checks.is_empty() {
                continue;
            }

            output.push_str(&format!("{} CHECKS\n", category.slug().to_uppercase()));
            for check in category_checks {
                output.push_str(&self.check_line(check));
            }
            output.push('\n');
        }

        // Summary
        let summary = report.summary();
        output.push_str(RULE);
        output.push('\n');
        output.push_str(&format!(
            "SUMMARY: {} passed, {} failed, {} errors, {} skipped\n",
            summary.passed, summary.failed, summary.errored, summary.skipped
        ));
        output.push_str(&format!(
            "Total time: {:.1}s\n",
            report.total_duration_ms as f64 / 1000.0
        ));

        let failures = report.failures();
        if !failures.is_empty() {
            output.push_str("\nFailures:\n");
            for check in &failures {
                if let Some(
                    CheckResult::Fail { message, .. } | CheckResult::Error { reason: message },
                ) = &check.result
                {
                    output.push_str(&format!("  - {}: {}\n", check.id, message));
                }
            }
            output.push('\n');
            let banner = match (summary.failed, summary.errored) {
                (failed, 0) => format!("{} check(s) failed", failed),
                (0, errored) => format!("{} check(s) could not run", errored),
                (failed, errored) => {
                    format!("{} check(s) failed, {} could not run", failed, errored)
                }
            };
            output.push_str(&self.red(&banner));
        } else {
            output.push_str(&self.green("All checks passed"));
        }
        output.push('\n');
        output.push_str(RULE);

        output
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let document = json!({
            "timestamp": report.timestamp,
            "root": report.root,
            "total_duration_ms": report.total_duration_ms,
            "summary": report.summary(),
            "checks": report.checks,
        });

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };

        rendered.unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string())
    }
}

/// JUnit XML formatter
pub struct JunitFormatter;

impl JunitFormatter {
    pub fn new() -> Self {
        JunitFormatter
    }

    fn escape_xml(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&apos;"),
                c => result.push(c),
            }
        }
        result
    }

    fn seconds(check: &Check) -> f64 {
        check
            .result
            .as_ref()
            .and_then(CheckResult::duration_ms)
            .unwrap_or(0) as f64
            / 1000.0
    }
}

impl Default for JunitFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JunitFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

        let summary = report.summary();
        output.push_str(&format!(
            "<testsuites name=\"site-preflight\" tests=\"{}\" failures=\"{}\" \
             errors=\"{}\" skipped=\"{}\" time=\"{:.3}\">\n",
            summary.total,
            summary.failed,
            summary.errored,
            summary.skipped,
            report.total_duration_ms as f64 / 1000.0
        ));

        // One test suite per category
        for category in CheckCategory::ALL {
            let suite_name = category.slug();
            let category_checks: Vec<&Check> = report
                .checks
                .iter()
                .filter(|c| c.category == category)
                .collect();

            if category_checks.is_empty() {
                continue;
            }

            let suite_failures = category_checks
                .iter()
                .filter(|c| matches!(&c.result, Some(CheckResult::Fail { .. })))
                .count();
            let suite_errors = category_checks
                .iter()
                .filter(|c| matches!(&c.result, Some(CheckResult::Error { .. })))
                .count();
            let suite_skipped = category_checks
                .iter()
                .filter(|c| matches!(&c.result, Some(CheckResult::Skip { .. }) | None))
                .count();
            let suite_time: f64 = category_checks.iter().map(|c| Self::seconds(c)).sum();

            output.push_str(&format!(
                "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" \
                 errors=\"{}\" skipped=\"{}\" time=\"{:.3}\">\n",
                suite_name,
                category_checks.len(),
                suite_failures,
                suite_errors,
                suite_skipped,
                suite_time
            ));

            for check in category_checks {
                output.push_str(&format!(
                    "    <testcase name=\"{}: {}\" classname=\"site-preflight.{}\" \
                     time=\"{:.3}\"",
                    Self::escape_xml(&check.id),
                    Self::escape_xml(&check.name),
                    suite_name,
                    Self::seconds(check)
                ));

                match &check.result {
                    Some(CheckResult::Pass { message, .. }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <system-out>{}</system-out>\n",
                            Self::escape_xml(message)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    Some(CheckResult::Fail { message, details, .. }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <failure message=\"{}\">{}</failure>\n",
                            Self::escape_xml(message),
                            Self::escape_xml(details)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    Some(CheckResult::Error { reason }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <error message=\"{}\" />\n",
                            Self::escape_xml(reason)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    Some(CheckResult::Skip { reason }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <skipped message=\"{}\" />\n",
                            Self::escape_xml(reason)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    None => {
                        output.push_str(" />\n");
                    }
                }
            }

            output.push_str("  </testsuite>\n");
        }

        output.push_str("</testsuites>");
        output
    }
}

/// Get a formatter based on the output format
pub fn get_formatter(
    format: OutputFormat,
    color: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(color, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Junit => Box::new(JunitFormatter::new()),
    }
}
