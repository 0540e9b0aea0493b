//! CLI module for argument parsing and output formatting.
//!
//! Arguments are declared with clap; reports render as terminal text, JSON
//! or JUnit XML.

pub mod args;
pub mod output;
