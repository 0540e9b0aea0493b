//! CLI integration tests.
//!
//! Exit codes and report streams of the built binary.

use crate::fixtures::SiteFixture;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn preflight() -> Command {
    let mut cmd = Command::cargo_bin("site-preflight").expect("binary built");
    cmd.env_remove("SITE_PREFLIGHT_ROOT")
        .env_remove("SITE_PREFLIGHT_FORMAT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn check(root: &Path) -> Command {
    let mut cmd = preflight();
    cmd.arg("check").arg("--root").arg(root);
    cmd
}

#[test]
fn test_passing_site_exits_zero() {
    let site = SiteFixture::passing();

    check(site.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("SUMMARY: 22 passed, 0 failed, 0 errors, 0 skipped"));
}

#[test]
fn test_check_is_the_default_command() {
    let site = SiteFixture::passing();

    preflight()
        .arg("--root")
        .arg(site.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("site-preflight validation report"));
}

#[test]
fn test_root_from_environment() {
    let site = SiteFixture::passing();

    preflight()
        .env("SITE_PREFLIGHT_ROOT", site.path())
        .assert()
        .success();
}

#[test]
fn test_missing_script_exits_one() {
    let site = SiteFixture::passing();
    site.remove("script.js");

    check(site.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Required file 'script.js' not found!"))
        .stdout(predicate::str::contains("[ERROR] JS-001"))
        .stdout(predicate::str::contains("1 check(s) failed, 3 could not run"));
}

#[test]
fn test_script_category_without_script_exits_one() {
    let site = SiteFixture::passing();
    site.remove("script.js");

    check(site.path())
        .arg("--script")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[ERROR] JS-001"))
        .stdout(predicate::str::contains("3 check(s) could not run"))
        .stdout(predicate::str::contains("All checks passed").not());
}

#[test]
fn test_wrong_title_exits_one() {
    let site = SiteFixture::passing();
    site.edit_html(
        "<title>DevOps Portfolio - Firman Arya</title>",
        "<title>My Site</title>",
    );

    check(site.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "HTML-002: Title should be 'DevOps Portfolio - Firman Arya', got 'My Site'",
        ))
        .stdout(predicate::str::contains("1 check(s) failed"));
}

#[test]
fn test_missing_root_exits_one() {
    let site = SiteFixture::empty();

    check(&site.missing_root())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL] STR-001"));
}

#[test]
fn test_unknown_check_id_exits_three() {
    let site = SiteFixture::passing();

    check(site.path())
        .args(["--only", "NOPE-001"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown check ID 'NOPE-001'"));
}

#[test]
fn test_invalid_option_exits_three() {
    preflight().args(["check", "--format", "yaml"]).assert().code(3);
    preflight().arg("--hardware").assert().code(3);
}

#[test]
fn test_only_runs_single_check() {
    let site = SiteFixture::passing();

    check(site.path())
        .args(["--only", "CSS-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMARY: 1 passed, 0 failed, 0 errors, 0 skipped"));
}

#[test]
fn test_json_report_on_stdout() {
    let site = SiteFixture::passing();
    site.remove("script.js");

    let output = check(site.path())
        .args(["--format", "json", "--verbose"])
        .output()
        .expect("run binary");

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a single JSON document");
    assert_eq!(report["summary"]["total"], 22);
    assert_eq!(report["summary"]["errored"], 3);
    assert_eq!(report["summary"]["skipped"], 0);
}

#[test]
fn test_format_from_environment() {
    let site = SiteFixture::passing();

    check(site.path())
        .env("SITE_PREFLIGHT_FORMAT", "junit")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"));
}

#[test]
fn test_quiet_hides_passing_checks() {
    let site = SiteFixture::passing();

    check(site.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("[PASS]").not());
}

#[test]
fn test_list_command() {
    preflight()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("STRUCTURE CHECKS:"))
        .stdout(predicate::str::contains("STR-001"))
        .stdout(predicate::str::contains("SEC-002"));
}

#[test]
fn test_version_command() {
    preflight()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "site-preflight {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_help_exits_zero() {
    preflight()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--fail-fast"));
}
