//! Configuration loading and parsing for lintfix.
//!
//! This module handles:
//! - TOML config file parsing
//! - Root config discovery
//! - Rule validation

pub mod parser;
pub mod types;

pub use parser::{
	CONFIG_FILE_NAME, generate_init_template, load_config, parse_config_file, parse_config_str,
};
pub use types::{Config, EditSpec, LoadedConfig, PathSelector, Rule};
