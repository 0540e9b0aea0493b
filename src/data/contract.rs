//! Checklist contract
//!
//! Fixed thresholds and term lists every site is measured against. These are
//! part of the checklist itself and are not configurable at runtime.

/// Default site root, relative to the working directory
pub const DEFAULT_ROOT: &str = "website";

/// Markup asset file name
pub const MARKUP_FILE: &str = "index.html";
/// Stylesheet asset file name
pub const STYLESHEET_FILE: &str = "styles.css";
/// Script asset file name
pub const SCRIPT_FILE: &str = "script.js";

/// Required assets, in report order
pub const REQUIRED_FILES: [&str; 3] = [MARKUP_FILE, STYLESHEET_FILE, SCRIPT_FILE];

/// Exact text of the document `<title>`
pub const EXPECTED_TITLE: &str = "DevOps Portfolio - Firman Arya";

/// Section ids that must each appear exactly once and be reachable by an in-page anchor
pub const EXPECTED_SECTIONS: [&str; 5] = ["hero", "about", "skills", "projects", "contact"];

/// Semantic structural elements; at least `MIN_SEMANTIC_ELEMENTS` must be present
pub const SEMANTIC_ELEMENTS: [&str; 5] = ["header", "nav", "main", "section", "footer"];
pub const MIN_SEMANTIC_ELEMENTS: usize = 3;

/// Elements considered interactive for the ARIA label check
pub const INTERACTIVE_ELEMENTS: [&str; 3] = ["button", "a", "input"];

/// Stylesheet terms that must all appear
pub const MODERN_CSS_FEATURES: [&str; 7] = [
    "grid",
    "flex",
    "transition",
    "transform",
    "animation",
    "@keyframes",
    "backdrop-filter",
];

/// Responsive design markers that must all appear in the stylesheet
pub const RESPONSIVE_MARKERS: [&str; 2] = ["@media", "max-width"];

/// Stylesheet performance hints; at least one must appear
pub const CSS_PERFORMANCE_HINTS: [&str; 3] = ["transform", "will-change", "contain"];

/// Event registration call required in the script
pub const JS_EVENT_REGISTRATION: &str = "document.addEventListener";

/// Function definition markers; at least one must appear in the script
pub const JS_FUNCTION_MARKERS: [&str; 2] = ["function", "=>"];

/// Modern script syntax markers that must all appear
pub const MODERN_JS_FEATURES: [&str; 5] = [
    "const ",
    "let ",
    "addEventListener",
    "querySelector",
    "classList",
];

/// Interactivity markers. Each entry is satisfied when any of its terms appears.
pub const INTERACTIVE_FEATURES: [(&str, &[&str]); 4] = [
    ("scroll", &["scroll"]),
    ("click", &["click"]),
    ("hover", &["hover", "mouseenter"]),
    ("animation", &["animation", "transition"]),
];

/// Minimum number of interactivity markers the script must carry
pub const MIN_INTERACTIVE_FEATURES: usize = 2;

/// Byte ceilings per asset
pub const SIZE_LIMITS: [(&str, u64); 3] = [
    (MARKUP_FILE, 50 * 1024),
    (STYLESHEET_FILE, 100 * 1024),
    (SCRIPT_FILE, 50 * 1024),
];

/// Link relation tokens that harden `target="_blank"` anchors
pub const SAFE_LINK_RELS: [&str; 2] = ["noopener", "noreferrer"];

/// Maximum number of non-empty inline script blocks
pub const MAX_INLINE_SCRIPTS: usize = 2;

/// Look up the byte ceiling for an asset file name
pub fn size_limit(file_name: &str) -> Option<u64> {
    SIZE_LIMITS
        .iter()
        .find(|(name, _)| *name == file_name)
        .map(|(_, limit)| *limit)
}
