//! Output formatting tests.
//!
//! Renders reports from real runs in every format.

use crate::fixtures::SiteFixture;
use site_preflight::cli::args::OutputFormat;
use site_preflight::cli::output::{
    get_formatter, JsonFormatter, JunitFormatter, OutputFormatter, TerminalFormatter,
};
use site_preflight::engine::result::ValidationReport;
use site_preflight::{run_preflight, CheckCategory, PreflightConfig};

fn report_without_script() -> ValidationReport {
    let site = SiteFixture::passing();
    site.remove("script.js");
    run_preflight(PreflightConfig {
        root: site.path().to_path_buf(),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_terminal_groups_by_category() {
    let out = TerminalFormatter::new(false, false, false).format(&report_without_script());

    for category in CheckCategory::ALL {
        let header = format!("{} CHECKS", category.slug().to_uppercase());
        assert!(out.contains(&header), "missing {}", header);
    }
    assert!(out.contains("SUMMARY: 18 passed, 1 failed, 3 errors, 0 skipped"));
    assert!(out.contains("  - STR-002: Required file 'script.js' not found!"));
}

#[test]
fn test_terminal_verbose_includes_details() {
    let out = TerminalFormatter::new(false, true, false).format(&report_without_script());
    assert!(out.contains("required file 'script.js' not found"));
}

#[test]
fn test_json_round_trips_through_serde() {
    let report = report_without_script();
    let out = JsonFormatter::new(true).format(&report);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["summary"]["passed"], 18);
    assert_eq!(value["summary"]["failed"], 1);
    assert_eq!(value["summary"]["errored"], 3);
    assert_eq!(value["checks"].as_array().map(Vec::len), Some(22));

    let str002 = value["checks"]
        .as_array()
        .and_then(|checks| checks.iter().find(|c| c["id"] == "STR-002"))
        .expect("STR-002 present");
    assert_eq!(str002["category"], "structure");
    assert_eq!(str002["result"]["status"], "fail");
    assert!(value["timestamp"].is_string());
}

#[test]
fn test_junit_has_one_suite_per_category() {
    let out = JunitFormatter::new().format(&report_without_script());

    assert_eq!(out.matches("<testsuite ").count(), CheckCategory::ALL.len());
    assert!(out.contains(
        "<testsuites name=\"site-preflight\" tests=\"22\" failures=\"1\" errors=\"3\" skipped=\"0\""
    ));
    assert!(out.contains(
        "<testsuite name=\"script\" tests=\"3\" failures=\"0\" errors=\"3\" skipped=\"0\""
    ));
    assert!(out.contains("<error message=\"fixture unavailable: "));
    assert!(out.contains("Required file &apos;script.js&apos; not found!"));
    assert!(out.ends_with("</testsuites>"));
}

#[test]
fn test_get_formatter_selects_format() {
    let report = report_without_script();

    let json = get_formatter(OutputFormat::Json, false, false, false).format(&report);
    assert!(json.trim_start().starts_with('{'));

    let junit = get_formatter(OutputFormat::Junit, false, false, false).format(&report);
    assert!(junit.starts_with("<?xml"));

    let text = get_formatter(OutputFormat::Text, false, false, true).format(&report);
    assert!(text.contains("[FAIL] STR-002"));
    assert!(!text.contains("[PASS]"));
}
