//! Markup checks (HTML-001 through HTML-004).
//!
//! Checks document structure, the page title, essential meta tags, and the
//! stylesheet/script references of `index.html`.

use crate::checks::fixture_unavailable;
use crate::data::contract::EXPECTED_TITLE;
use crate::engine::orchestrator::RegisteredCheck;
use crate::site::SiteBundle;
use crate::{CheckCategory, CheckResult};
use scraper::Selector;
use std::sync::LazyLock;

static META_CHARSET_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[charset]").expect("Failed to parse meta charset selector - this is a bug")
});

static META_VIEWPORT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="viewport"]"#)
        .expect("Failed to parse meta viewport selector - this is a bug")
});

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("link[rel]").expect("Failed to parse link selector - this is a bug")
});

static SCRIPT_SRC_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script[src]").expect("Failed to parse script src selector - this is a bug")
});

/// Get all markup checks
pub fn get_markup_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck::new(
            "HTML-001",
            "Document Structure",
            CheckCategory::Markup,
            "Verify the html, head and body elements are present",
            run_html001,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "HTML-002",
            "Page Title",
            CheckCategory::Markup,
            "Verify the page title matches the expected title exactly",
            run_html002,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "HTML-003",
            "Meta Tags",
            CheckCategory::Markup,
            "Verify charset and viewport meta tags are present",
            run_html003,
        )
        .depends_on(&["STR-003"]),
        RegisteredCheck::new(
            "HTML-004",
            "Linked Resources",
            CheckCategory::Markup,
            "Verify a stylesheet link and a local script reference exist",
            run_html004,
        )
        .depends_on(&["STR-003"]),
    ]
}

/// Run HTML-001: Document Structure
pub fn run_html001(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    let missing: Vec<_> = ["html", "head", "body"]
        .into_iter()
        .filter(|tag| !doc.declares_element(tag))
        .collect();

    if missing.is_empty() {
        CheckResult::pass("html, head and body elements present")
    } else {
        CheckResult::fail(
            format!(
                "{} tag not found!",
                missing
                    .iter()
                    .map(|t| t.to_uppercase())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            format!("Missing structural element(s): {}", missing.join(", ")),
        )
    }
}

/// Run HTML-002: Page Title
pub fn run_html002(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    match doc.title() {
        None => CheckResult::fail(
            "HTML title tag not found!",
            format!("Expected <title>{}</title>", EXPECTED_TITLE),
        ),
        Some(title) if title == EXPECTED_TITLE => {
            CheckResult::pass(format!("Title is '{}'", title))
        }
        Some(title) => CheckResult::fail(
            format!("Title should be '{}', got '{}'", EXPECTED_TITLE, title),
            "Title comparison is exact (case and whitespace sensitive)",
        ),
    }
}

/// Run HTML-003: Meta Tags
pub fn run_html003(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    let mut missing = Vec::new();
    if !doc.exists(&META_CHARSET_SELECTOR) {
        missing.push("Charset");
    }
    if !doc.exists(&META_VIEWPORT_SELECTOR) {
        missing.push("Viewport");
    }

    if missing.is_empty() {
        CheckResult::pass("Charset and viewport meta tags present")
    } else {
        CheckResult::fail(
            format!("{} meta tag not found!", missing.join(" and ")),
            "Expected <meta charset> and <meta name=\"viewport\">",
        )
    }
}

/// Run HTML-004: Linked Resources
pub fn run_html004(bundle: &SiteBundle) -> CheckResult {
    let doc = match bundle.document() {
        Ok(doc) => doc,
        Err(e) => return fixture_unavailable(&e),
    };

    let css_links = doc
        .select(&LINK_SELECTOR)
        .into_iter()
        .filter(|link| {
            link.value().attr("rel").is_some_and(|rel| {
                rel.split_whitespace()
                    .any(|r| r.eq_ignore_ascii_case("stylesheet"))
            })
        })
        .count();

    let local_scripts = doc
        .select(&SCRIPT_SRC_SELECTOR)
        .into_iter()
        .filter_map(|script| script.value().attr("src"))
        .filter(|src| !src.starts_with("http"))
        .count();

    let mut problems = Vec::new();
    if css_links == 0 {
        problems.push("No CSS files linked!");
    }
    if local_scripts == 0 {
        problems.push("No local JavaScript files found!");
    }

    if problems.is_empty() {
        CheckResult::pass(format!(
            "{} stylesheet link(s), {} local script(s)",
            css_links, local_scripts
        ))
    } else {
        CheckResult::fail(
            problems.join(" "),
            "Scripts whose src starts with 'http' do not count as local",
        )
    }
}
