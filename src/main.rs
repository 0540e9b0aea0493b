//! site-preflight CLI entry point
//!
//! Checklist validation for a static portfolio site.

use anyhow::Context;
use clap::Parser;
use site_preflight::cli::args::{CheckArgs, Cli, Command};
use site_preflight::cli::output::get_formatter;
use site_preflight::engine::orchestrator::create_all_checks;
use site_preflight::logging::init_tracing;
use site_preflight::version::get_build_info;
use site_preflight::{run_preflight, CheckCategory, PreflightConfig};

use std::process::ExitCode;

const EXIT_FAILED: u8 = 1;
const EXIT_ERROR: u8 = 3;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are reported through the error path too
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_tracing(cli.check.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match cli.command() {
        Command::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Command::List => {
            print_check_list();
            ExitCode::SUCCESS
        }
        Command::Check => match run_checks(&cli.check) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::from(EXIT_ERROR)
            }
        },
    }
}

fn print_check_list() {
    let checks = create_all_checks();

    println!("Available checks:");
    for category in CheckCategory::ALL {
        println!();
        println!("{} CHECKS:", category.slug().to_uppercase());
        for check in checks.iter().filter(|c| c.category == category) {
            println!("  {:<9} {}", check.id, check.name);
        }
    }
}

fn run_checks(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let config = PreflightConfig::from_args(args);
    let root = config.root.clone();

    let report = run_preflight(config)
        .with_context(|| format!("validating site at '{}'", root.display()))?;

    let formatter = get_formatter(args.format, args.use_color(), args.verbose, args.quiet);
    println!("{}", formatter.format(&report));

    if report.summary().all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_FAILED))
    }
}
