//! Parsed markup document.
//!
//! Wraps a `scraper::Html` tree together with the start tags written in the
//! source. The HTML5 tree builder always synthesises `html`, `head` and
//! `body`, so structural presence is answered from the source tokens instead
//! of the tree.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

/// A comment, or a start tag with its (possibly quoted) attributes.
///
/// Applied to lowercased source; group 1 is the tag name.
static MARKUP_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<!--.*?(?:-->|\z)|<([a-z][a-z0-9:-]*)(?:[^>"']|"[^"]*"|'[^']*')*>"#)
        .expect("Failed to compile markup token pattern - this is a bug")
});

/// Elements whose content is text up to the matching end tag
const RAW_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "textarea", "title"];

pub static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").expect("Failed to parse title selector - this is a bug")
});

pub static ID_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("[id]").expect("Failed to parse id selector - this is a bug")
});

pub static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("Failed to parse anchor selector - this is a bug")
});

/// Maximum length of an element snippet quoted in diagnostics
const SNIPPET_LEN: usize = 120;

/// Read-only view of the markup asset
pub struct ParsedDocument {
    html: Html,
    /// Lowercase names of start tags written in the source
    opened: HashSet<String>,
}

impl ParsedDocument {
    /// Parse a markup source
    pub fn parse(source: &str) -> Self {
        ParsedDocument {
            html: Html::parse_document(source),
            opened: opened_elements(source),
        }
    }

    /// True when the source contains a start tag for `name`.
    ///
    /// Tags inside comments, attribute values and the text of raw-text
    /// elements such as `<script>` do not count.
    pub fn declares_element(&self, name: &str) -> bool {
        self.opened.contains(&name.to_ascii_lowercase())
    }

    /// All elements matching a selector
    pub fn select(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        self.html.select(selector).collect()
    }

    /// True when at least one element matches a selector
    pub fn exists(&self, selector: &Selector) -> bool {
        self.html.select(selector).next().is_some()
    }

    /// Text of the first `<title>` element, exactly as written
    pub fn title(&self) -> Option<String> {
        self.html
            .select(&TITLE_SELECTOR)
            .next()
            .map(|title| title.text().collect::<String>())
    }

    /// Number of elements whose `id` attribute equals `id`
    pub fn count_id(&self, id: &str) -> usize {
        self.html
            .select(&ID_SELECTOR)
            .filter(|el| el.value().id() == Some(id))
            .count()
    }

    /// `href` values of every anchor carrying one
    pub fn anchor_hrefs(&self) -> Vec<&str> {
        self.html
            .select(&ANCHOR_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .collect()
    }
}

/// Start tag names in `source`, skipping comments and raw-text content
fn opened_elements(source: &str) -> HashSet<String> {
    let lower = source.to_ascii_lowercase();
    let mut opened = HashSet::new();
    let mut pos = 0;

    while let Some(caps) = MARKUP_TOKEN.captures_at(&lower, pos) {
        let Some(token) = caps.get(0) else { break };
        pos = token.end();

        if let Some(name) = caps.get(1).map(|m| m.as_str()) {
            opened.insert(name.to_string());
            if RAW_TEXT_ELEMENTS.contains(&name) {
                let close = format!("</{}", name);
                pos = lower[pos..].find(&close).map_or(lower.len(), |i| pos + i);
            }
        }
    }

    opened
}

/// Outer HTML of an element, shortened for diagnostics
pub fn snippet(element: &ElementRef<'_>) -> String {
    let html = element.html();
    if html.chars().count() <= SNIPPET_LEN {
        html
    } else {
        let cut: String = html.chars().take(SNIPPET_LEN).collect();
        format!("{}...", cut)
    }
}
