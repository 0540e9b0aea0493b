//! Command line argument definitions.
//!
//! Running the binary with no subcommand behaves like `check`. Every check
//! option is global, so `site-preflight --only HTML-002` and
//! `site-preflight check --only HTML-002` parse identically.

use crate::data::contract::DEFAULT_ROOT;
use crate::CheckCategory;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// site-preflight - checklist validation for a static portfolio site
#[derive(Parser, Debug)]
#[command(name = "site-preflight", version, about)]
#[command(long_about = r#"
Validates a static portfolio site (index.html, styles.css, script.js) against
a fixed checklist of structural, content, accessibility, styling, scripting,
size and security rules.

EXAMPLES:
  # Validate ./website
  site-preflight

  # Validate another directory, JSON report
  site-preflight check --root public --format json

  # Only markup and security checks, stop at the first failure
  site-preflight --markup --security --fail-fast

  # Run a single check
  site-preflight --only HTML-002

EXIT CODES:
  0  every check that ran passed
  1  at least one check failed or could not load its file
  3  usage or runtime error
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub check: CheckArgs,
}

impl Cli {
    /// The subcommand to run, defaulting to `check`
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Check)
    }
}

/// Command to execute
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run validation checks (default)
    Check,
    /// List all available checks
    List,
    /// Print version information
    Version,
}

/// Output format selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// JUnit XML for CI/CD integration
    Junit,
}

/// Options controlling a validation run
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Site directory containing index.html, styles.css and script.js
    #[arg(long, global = true, env = "SITE_PREFLIGHT_ROOT", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Run structure checks (STR-*)
    #[arg(long, global = true)]
    pub structure: bool,

    /// Run markup checks (HTML-*)
    #[arg(long, global = true)]
    pub markup: bool,

    /// Run section and navigation checks (NAV-*)
    #[arg(long, global = true)]
    pub sections: bool,

    /// Run accessibility checks (A11Y-*)
    #[arg(long, global = true)]
    pub accessibility: bool,

    /// Run stylesheet checks (CSS-*)
    #[arg(long, global = true)]
    pub stylesheet: bool,

    /// Run script checks (JS-*)
    #[arg(long, global = true)]
    pub script: bool,

    /// Run file-size checks (PERF-*)
    #[arg(long, global = true)]
    pub performance: bool,

    /// Run security checks (SEC-*)
    #[arg(long, global = true)]
    pub security: bool,

    /// Skip a check by ID (repeatable)
    #[arg(long, global = true, value_name = "ID")]
    pub skip: Vec<String>,

    /// Run only this check ID (repeatable, overrides --skip and category flags)
    #[arg(long, global = true, value_name = "ID")]
    pub only: Vec<String>,

    /// Report format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "SITE_PREFLIGHT_FORMAT",
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,

    /// Only show failures
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show failure details, durations and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output (also honoured via NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Run independent checks in parallel
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Stop on first failure
    #[arg(long, global = true)]
    pub fail_fast: bool,
}

impl CheckArgs {
    /// Categories selected by flag, in report order. Empty means all.
    pub fn categories(&self) -> Vec<CheckCategory> {
        CheckCategory::ALL
            .into_iter()
            .filter(|category| match category {
                CheckCategory::Structure => self.structure,
                CheckCategory::Markup => self.markup,
                CheckCategory::Sections => self.sections,
                CheckCategory::Accessibility => self.accessibility,
                CheckCategory::Stylesheet => self.stylesheet,
                CheckCategory::Script => self.script,
                CheckCategory::Performance => self.performance,
                CheckCategory::Security => self.security,
            })
            .collect()
    }

    /// Whether ANSI colors should be emitted
    pub fn use_color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
    }
}
