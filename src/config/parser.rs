use crate::config::types::{Config, LoadedConfig};
use crate::error::{LintfixError, Result};
use std::path::Path;

/// File name looked up in the scan root when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = ".lintfix.toml";

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| LintfixError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| LintfixError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed config
	config.validate()?;

	Ok(config)
}

/// Load the effective config for a scan.
///
/// An explicit path must exist. Without one, `<root>/.lintfix.toml` is used
/// if present, otherwise the defaults apply.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
	if let Some(path) = explicit {
		return Ok(LoadedConfig {
			config: parse_config_file(path)?,
			path: Some(path.to_path_buf()),
		});
	}

	let candidate = root.join(CONFIG_FILE_NAME);
	if candidate.is_file() {
		log::debug!("using config {}", candidate.display());
		return Ok(LoadedConfig {
			config: parse_config_file(&candidate)?,
			path: Some(candidate),
		});
	}

	Ok(LoadedConfig {
		config: Config::default(),
		path: None,
	})
}

/// Template written by `lintfix --init`.
pub fn generate_init_template() -> String {
	r#"# lintfix configuration
#
# Rules listed here run after the selected built-in rule set.

extensions = ["ts", "tsx"]
exclude-dirs = ["node_modules", ".next"]

# [[rules]]
# name = "drop-legacy-helper"
# description = "legacyHelper is no longer referenced"
# path_contains = ["lib/legacy"]
# edits = [
#     { remove_block = ["function legacyHelper"] },
#     { rewrite = "s/legacyHelper\\(\\)/modernHelper()/g" },
# ]
"#
	.to_string()
}
