//! Integration tests for site-preflight.
//!
//! These tests run the checklist against site bundles written to temporary
//! directories.

pub mod cli_tests;
pub mod full_run_tests;
pub mod output_tests;
