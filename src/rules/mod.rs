//! Rewrite rules for lintfix.
//!
//! This module handles:
//! - Path selectors scoping rules to files
//! - Compiling declarative rules into edits (literal, regex, block, catch)
//! - The built-in rule tables

pub mod builtin;
pub mod matcher;
pub mod rewriter;
pub mod set;

pub use builtin::BuiltinRuleSet;
pub use matcher::{CompiledRule, compile_rules, matching_rules};
pub use rewriter::{Edit, Substitution};
pub use set::{Rewrite, RuleSet};
