//! Data module for site-preflight
//!
//! Contains the fixed checklist contract: expected title, section ids,
//! feature term lists, and file-size budgets.

pub mod contract;
