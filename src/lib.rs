//! Lintfix - CLI tool for silencing lint warnings with path-scoped rewrite rules.
//!
//! This library provides the core functionality for lintfix, including:
//! - Directory traversal with dependency/build directory pruning
//! - Declarative, path-scoped rewrite rules and the built-in rule tables
//! - Brace-counting block removal and catch-binding analysis
//! - Per-file rewriting with a folded run summary
//!
//! # Example
//!
//! ```no_run
//! use lintfix_cli::fixer::{FixOptions, fix_tree};
//! use lintfix_cli::rules::{BuiltinRuleSet, RuleSet};
//! use lintfix_cli::walk::WalkOptions;
//! use std::path::Path;
//!
//! let rules = RuleSet::build(BuiltinRuleSet::Warnings, &[], false).unwrap();
//! let walk = WalkOptions {
//!     extensions: vec!["ts".into(), "tsx".into()],
//!     exclude_dirs: vec!["node_modules".into(), ".next".into()],
//! };
//!
//! let summary = fix_tree(Path::new("."), &walk, &rules, FixOptions::default(), |key, outcome| {
//!     if outcome.is_fixed() {
//!         println!("Fixed: {key}");
//!     }
//! })
//! .unwrap();
//! println!("Total files fixed: {}", summary.fixed.len());
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod fixer;
pub mod rules;
pub mod walk;

pub use error::{LintfixError, Result};
