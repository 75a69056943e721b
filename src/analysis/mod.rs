//! Line-oriented text analysis used by rewrite rules.
//!
//! Both routines are brace-counting heuristics, not parsers:
//! - Brace-balanced block removal
//! - Catch-binding usage detection and renaming

pub mod block;
pub mod catch;

pub use block::{brace_delta, remove_blocks};
pub use catch::{binding_used, rename_unused_catch};
