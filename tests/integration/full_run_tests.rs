//! Full run integration tests.
//!
//! Tests for complete validation runs, including orchestration,
//! fail-fast behavior, and result aggregation.

use crate::fixtures::SiteFixture;
use site_preflight::engine::orchestrator::{
    create_all_checks, CheckOrchestrator, OrchestratorConfig, RegisteredCheck,
};
use site_preflight::engine::result::ValidationReport;
use site_preflight::site::SiteBundle;
use site_preflight::{run_preflight, CheckCategory, CheckResult, PreflightConfig, SiteError};
use std::collections::BTreeMap;
use std::path::Path;

const TOTAL_CHECKS: u32 = 22;

fn config_for(root: &Path) -> PreflightConfig {
    PreflightConfig {
        root: root.to_path_buf(),
        ..Default::default()
    }
}

fn run(root: &Path) -> ValidationReport {
    run_preflight(config_for(root)).expect("run preflight")
}

fn status(report: &ValidationReport, id: &str) -> &'static str {
    report
        .result_of(id)
        .map(CheckResult::status)
        .unwrap_or("missing")
}

fn fail_message(report: &ValidationReport, id: &str) -> String {
    match report.result_of(id) {
        Some(CheckResult::Fail { message, .. }) => message.clone(),
        other => panic!("expected {} to fail, got {:?}", id, other),
    }
}

/// Outcome per check ID, without timings
fn outcomes(report: &ValidationReport) -> BTreeMap<String, String> {
    report
        .checks
        .iter()
        .map(|c| {
            let outcome = c.result.as_ref().map(|r| r.to_string()).unwrap_or_default();
            (c.id.clone(), outcome)
        })
        .collect()
}

#[test]
fn test_passing_site_passes_every_check() {
    let site = SiteFixture::passing();
    let report = run(site.path());
    let summary = report.summary();

    let failures: Vec<String> = report
        .failures()
        .iter()
        .map(|c| format!("{}: {:?}", c.id, c.result))
        .collect();
    assert!(failures.is_empty(), "unexpected failures: {:#?}", failures);

    assert_eq!(summary.total, TOTAL_CHECKS);
    assert_eq!(summary.passed, TOTAL_CHECKS);
    assert_eq!(summary.errored, 0);
    assert_eq!(summary.skipped, 0);
    assert!(summary.all_passed());
}

#[test]
fn test_missing_script_fails_structure_and_errors_script_checks() {
    let site = SiteFixture::passing();
    site.remove("script.js");
    let report = run(site.path());

    assert_eq!(
        fail_message(&report, "STR-002"),
        "Required file 'script.js' not found!"
    );
    for id in ["JS-001", "JS-002", "JS-003"] {
        assert_eq!(status(&report, id), "error", "{} should not run", id);
    }
    assert_eq!(status(&report, "STR-003"), "pass");
    assert_eq!(status(&report, "CSS-001"), "pass");
    assert_eq!(status(&report, "PERF-001"), "pass");
    assert_eq!(report.summary().errored, 3);
    assert!(!report.summary().all_passed());
}

#[test]
fn test_script_category_without_script_is_not_a_pass() {
    let site = SiteFixture::passing();
    site.remove("script.js");
    let report = run_preflight(PreflightConfig {
        categories: Some(vec![CheckCategory::Script]),
        ..config_for(site.path())
    })
    .unwrap();
    let summary = report.summary();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.errored, 3);
    assert!(!summary.all_passed());
    assert_eq!(report.failures().len(), 3);
}

#[test]
fn test_only_markup_check_on_missing_root_is_not_a_pass() {
    let site = SiteFixture::empty();
    let report = run_preflight(PreflightConfig {
        only_checks: vec!["HTML-002".to_string()],
        ..config_for(&site.missing_root())
    })
    .unwrap();

    assert_eq!(status(&report, "HTML-002"), "error");
    assert!(!report.summary().all_passed());
}

#[test]
fn test_wrong_title_quotes_expected_and_actual() {
    let site = SiteFixture::passing();
    site.edit_html(
        "<title>DevOps Portfolio - Firman Arya</title>",
        "<title>My Site</title>",
    );
    let report = run(site.path());

    assert_eq!(
        fail_message(&report, "HTML-002"),
        "Title should be 'DevOps Portfolio - Firman Arya', got 'My Site'"
    );
    assert_eq!(report.summary().failed, 1);
}

#[test]
fn test_title_comparison_is_whitespace_sensitive() {
    let site = SiteFixture::passing();
    site.edit_html(
        "<title>DevOps Portfolio - Firman Arya</title>",
        "<title> DevOps Portfolio - Firman Arya</title>",
    );
    let report = run(site.path());

    assert_eq!(status(&report, "HTML-002"), "fail");
}

#[test]
fn test_unhardened_external_link_fails_security() {
    let site = SiteFixture::passing();
    site.edit_html(
        r#"<section id="contact">"#,
        r#"<section id="contact"><a href="https://x.com" target="_blank">X</a>"#,
    );
    let report = run(site.path());

    let message = fail_message(&report, "SEC-001");
    assert!(message.contains(r#"href="https://x.com""#), "got {}", message);
    assert_eq!(report.summary().failed, 1);
}

#[test]
fn test_minimal_stylesheet_with_all_terms_passes() {
    let site = SiteFixture::passing();
    site.write(
        "styles.css",
        concat!(
            "div{color:red}\n",
            "/* grid flex transition transform animation @keyframes backdrop-filter */\n",
            "@media (max-width: 600px) {}\n",
        ),
    );
    let report = run(site.path());

    for id in ["CSS-001", "CSS-002", "CSS-003", "CSS-004"] {
        assert_eq!(status(&report, id), "pass", "{} should pass", id);
    }
}

#[test]
fn test_unbalanced_stylesheet_fails_only_brace_check() {
    let site = SiteFixture::passing();
    site.write(
        "styles.css",
        format!("{}\n.broken {{ color: red;", crate::fixtures::PASSING_CSS),
    );
    let report = run(site.path());

    assert_eq!(fail_message(&report, "CSS-001"), "Unbalanced CSS braces detected!");
    assert_eq!(report.summary().failed, 1);
}

#[test]
fn test_blank_stylesheet_fails_structure_and_errors_stylesheet_checks() {
    let site = SiteFixture::passing();
    site.write("styles.css", "\n   \n");
    let report = run(site.path());

    assert_eq!(fail_message(&report, "STR-003"), "Empty file(s): styles.css");
    for id in ["CSS-001", "CSS-002", "CSS-003", "CSS-004"] {
        assert_eq!(status(&report, id), "error");
    }
}

#[test]
fn test_missing_root_fails_structure_and_errors_content() {
    let site = SiteFixture::empty();
    let report = run(&site.missing_root());

    assert!(fail_message(&report, "STR-001").contains("not found"));
    assert_eq!(status(&report, "STR-002"), "fail");
    assert_eq!(status(&report, "STR-003"), "error");
    assert_eq!(status(&report, "HTML-001"), "error");
    assert_eq!(status(&report, "PERF-001"), "error");
    assert_eq!(report.summary().total, TOTAL_CHECKS);
}

#[test]
fn test_runs_are_idempotent() {
    let site = SiteFixture::passing();
    site.edit_html(r#"alt="Portrait of Firman""#, "");

    let first = run(site.path());
    let second = run(site.path());

    assert_eq!(outcomes(&first), outcomes(&second));
    assert_eq!(status(&first, "A11Y-001"), "fail");
}

#[test]
fn test_parallel_matches_sequential() {
    let site = SiteFixture::passing();
    site.remove("script.js");

    let sequential = run(site.path());
    let parallel = run_preflight(PreflightConfig {
        parallel: true,
        ..config_for(site.path())
    })
    .unwrap();

    assert_eq!(outcomes(&sequential), outcomes(&parallel));
}

#[test]
fn test_fail_fast_stops_after_first_failure() {
    let site = SiteFixture::empty();
    let report = run_preflight(PreflightConfig {
        fail_fast: true,
        ..config_for(&site.missing_root())
    })
    .unwrap();

    assert_eq!(report.checks.len(), TOTAL_CHECKS as usize);
    assert_eq!(report.checks[0].id, "STR-001");
    assert_eq!(status(&report, "STR-001"), "fail");
    assert!(report.checks[1..]
        .iter()
        .all(|c| c.result.as_ref().map(CheckResult::status) == Some("skip")));
    assert_eq!(report.summary().skipped, TOTAL_CHECKS - 1);
}

#[test]
fn test_fail_fast_stops_on_unloadable_fixture() {
    let site = SiteFixture::passing();
    site.remove("script.js");
    let report = run_preflight(PreflightConfig {
        categories: Some(vec![CheckCategory::Script]),
        fail_fast: true,
        ..config_for(site.path())
    })
    .unwrap();

    assert_eq!(status(&report, "JS-001"), "error");
    assert_eq!(status(&report, "JS-002"), "skip");
    assert_eq!(status(&report, "JS-003"), "skip");
    assert!(!report.summary().all_passed());
}

#[test]
fn test_category_filter() {
    let site = SiteFixture::passing();
    let report = run_preflight(PreflightConfig {
        categories: Some(vec![CheckCategory::Security, CheckCategory::Performance]),
        ..config_for(site.path())
    })
    .unwrap();

    let ids: Vec<&str> = report.checks.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["PERF-001", "SEC-001", "SEC-002"]);
}

#[test]
fn test_only_takes_precedence_over_skip() {
    let site = SiteFixture::passing();
    let report = run_preflight(PreflightConfig {
        only_checks: vec!["HTML-002".to_string()],
        skip_checks: vec!["HTML-002".to_string()],
        ..config_for(site.path())
    })
    .unwrap();

    assert_eq!(report.checks.len(), 1);
    assert_eq!(status(&report, "HTML-002"), "pass");
}

#[test]
fn test_skip_excludes_checks() {
    let site = SiteFixture::passing();
    let report = run_preflight(PreflightConfig {
        skip_checks: vec!["SEC-001".to_string(), "SEC-002".to_string()],
        ..config_for(site.path())
    })
    .unwrap();

    assert_eq!(report.summary().total, TOTAL_CHECKS - 2);
    assert!(report.result_of("SEC-001").is_none());
}

#[test]
fn test_unknown_check_id_is_usage_error() {
    let site = SiteFixture::passing();
    let result = run_preflight(PreflightConfig {
        only_checks: vec!["NOPE-001".to_string()],
        ..config_for(site.path())
    });

    match result {
        Err(SiteError::Usage { message }) => assert!(message.contains("NOPE-001")),
        other => panic!("expected usage error, got {:?}", other.map(|r| r.checks.len())),
    }
}

#[test]
fn test_registered_checks_run_against_the_loaded_bundle() {
    let site = SiteFixture::passing();
    let mut orch =
        CheckOrchestrator::new(OrchestratorConfig::default(), SiteBundle::load(site.path()));
    orch.register_checks(create_all_checks());
    orch.register_check(RegisteredCheck::new(
        "CUSTOM-001",
        "Root Exists",
        CheckCategory::Structure,
        "test",
        |bundle| {
            if bundle.root_exists {
                CheckResult::pass("root present")
            } else {
                CheckResult::fail("root missing", "")
            }
        },
    ));

    let report = orch.run_category(CheckCategory::Structure);
    let ids: Vec<&str> = report.checks.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["STR-001", "STR-002", "STR-003", "CUSTOM-001"]);
    assert!(report.summary().all_passed());
}
