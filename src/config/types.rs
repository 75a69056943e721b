use crate::error::LintfixError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Source extensions scanned when the config does not say otherwise.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Dependency-cache and build-output directories that are never scanned.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["node_modules", ".next"];

/// Top-level configuration from a `.lintfix.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// File extensions (without the dot) that are candidates for rewriting.
	#[serde(default = "default_extensions")]
	pub extensions: Vec<String>,

	/// Directory names whose subtrees are skipped entirely.
	#[serde(default = "default_exclude_dirs")]
	pub exclude_dirs: Vec<String>,

	/// Extra rules, applied after the selected built-in rule set.
	#[serde(default)]
	pub rules: Vec<Rule>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			extensions: default_extensions(),
			exclude_dirs: default_exclude_dirs(),
			rules: Vec::new(),
		}
	}
}

fn default_extensions() -> Vec<String> {
	DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_exclude_dirs() -> Vec<String> {
	DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect()
}

/// A predicate over a file's root-relative path key (`/`-separated).
///
/// All present conditions must hold. An empty selector matches every path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PathSelector {
	/// The key must start with this string.
	#[serde(default)]
	pub path_prefix: Option<String>,

	/// The key must end with this string.
	#[serde(default)]
	pub path_suffix: Option<String>,

	/// Every one of these substrings must occur in the key.
	#[serde(default)]
	pub path_contains: Vec<String>,

	/// None of these substrings may occur in the key.
	#[serde(default)]
	pub path_excludes: Vec<String>,
}

impl fmt::Display for PathSelector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut parts = Vec::new();
		if let Some(ref prefix) = self.path_prefix {
			parts.push(format!("prefix {prefix}"));
		}
		if let Some(ref suffix) = self.path_suffix {
			parts.push(format!("suffix {suffix}"));
		}
		if !self.path_contains.is_empty() {
			parts.push(format!("contains {}", self.path_contains.join(", ")));
		}
		if !self.path_excludes.is_empty() {
			parts.push(format!("excludes {}", self.path_excludes.join(", ")));
		}

		if parts.is_empty() {
			f.write_str("all files")
		} else {
			f.write_str(&parts.join("; "))
		}
	}
}

/// One text transformation inside a rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum EditSpec {
	/// Delete every occurrence of a literal.
	Remove(String),

	/// Replace every occurrence of a literal.
	Replace { from: String, to: String },

	/// Sed-like regex substitution: "s/pattern/replacement/" or ".../g".
	Rewrite(String),

	/// Drop brace-delimited blocks opened by a line containing any marker.
	RemoveBlock(Vec<String>),

	/// Prefix a catch binding with `_` when the catch body never uses it.
	RenameUnusedCatch(String),
}

impl fmt::Display for EditSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EditSpec::Remove(literal) => write!(f, "remove {:?}", literal),
			EditSpec::Replace { from, to } => write!(f, "replace {:?} -> {:?}", from, to),
			EditSpec::Rewrite(sub) => write!(f, "rewrite {}", sub),
			EditSpec::RemoveBlock(markers) => write!(f, "remove_block {:?}", markers),
			EditSpec::RenameUnusedCatch(binding) => write!(f, "rename_unused_catch {}", binding),
		}
	}
}

/// A path-scoped rewrite rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Rule {
	/// Short identifier shown in listings and debug logs.
	pub name: String,

	/// Human-readable summary of the lint warning this rule silences.
	#[serde(default)]
	pub description: Option<String>,

	/// True when the rule renames or removes identifiers without checking
	/// that they are actually unused.
	#[serde(default)]
	pub heuristic: bool,

	/// Which files the rule applies to.
	#[serde(flatten)]
	pub selector: PathSelector,

	/// Transformations, applied in order.
	#[serde(default)]
	pub edits: Vec<EditSpec>,

	/// Keys no other field claimed; `validate` rejects any.
	#[serde(flatten)]
	pub unknown_keys: BTreeMap<String, toml::Value>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from, if any file was found.
	pub path: Option<PathBuf>,
}

impl Rule {
	/// Check the structural requirements that regex compilation can't catch.
	pub fn validate(&self) -> Result<(), LintfixError> {
		let invalid = |reason: &str| LintfixError::InvalidRule {
			name: self.name.clone(),
			reason: reason.to_string(),
		};

		if self.name.trim().is_empty() {
			return Err(invalid("rule name must not be empty"));
		}
		if !self.unknown_keys.is_empty() {
			let keys: Vec<&str> = self.unknown_keys.keys().map(String::as_str).collect();
			return Err(invalid(&format!("unknown keys: {}", keys.join(", "))));
		}
		if self.edits.is_empty() {
			return Err(invalid("rule has no edits"));
		}

		for edit in &self.edits {
			match edit {
				EditSpec::Remove(literal) if literal.is_empty() => {
					return Err(invalid("remove literal must not be empty"));
				}
				EditSpec::Replace { from, .. } if from.is_empty() => {
					return Err(invalid("replace source must not be empty"));
				}
				EditSpec::RemoveBlock(markers)
					if markers.is_empty() || markers.iter().any(|m| m.is_empty()) =>
				{
					return Err(invalid("remove_block needs non-empty markers"));
				}
				EditSpec::RenameUnusedCatch(binding) if !is_identifier(binding) => {
					return Err(invalid("rename_unused_catch needs an identifier"));
				}
				_ => {}
			}
		}

		Ok(())
	}
}

impl Config {
	/// Validate all rules in this config.
	pub fn validate(&self) -> Result<(), LintfixError> {
		for rule in &self.rules {
			rule.validate()?;
		}
		Ok(())
	}
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
		_ => return false,
	}
	chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rule_with(edits: Vec<EditSpec>) -> Rule {
		Rule {
			name: "test".to_string(),
			edits,
			..Default::default()
		}
	}

	#[test]
	fn test_rule_without_edits_is_invalid() {
		let result = rule_with(vec![]).validate();
		assert!(matches!(result, Err(LintfixError::InvalidRule { .. })));
	}

	#[test]
	fn test_rule_without_name_is_invalid() {
		let rule = Rule {
			edits: vec![EditSpec::Remove("x".to_string())],
			..Default::default()
		};
		assert!(rule.validate().is_err());
	}

	#[test]
	fn test_catch_binding_must_be_identifier() {
		let bad = rule_with(vec![EditSpec::RenameUnusedCatch("err or".to_string())]);
		assert!(bad.validate().is_err());

		let good = rule_with(vec![EditSpec::RenameUnusedCatch("err".to_string())]);
		assert!(good.validate().is_ok());
	}

	#[test]
	fn test_remove_block_needs_markers() {
		let rule = rule_with(vec![EditSpec::RemoveBlock(vec![])]);
		assert!(rule.validate().is_err());
	}

	#[test]
	fn test_unknown_key_is_invalid() {
		let mut rule = rule_with(vec![EditSpec::Remove("x".to_string())]);
		rule.unknown_keys.insert("path_contain".to_string(), toml::Value::from("lib/"));

		match rule.validate() {
			Err(LintfixError::InvalidRule { reason, .. }) => {
				assert_eq!(reason, "unknown keys: path_contain")
			}
			other => panic!("Expected InvalidRule error, got {other:?}"),
		}
	}

	#[test]
	fn test_selector_display() {
		assert_eq!(PathSelector::default().to_string(), "all files");

		let selector = PathSelector {
			path_prefix: Some("app/".to_string()),
			path_contains: vec!["[memberId]".to_string(), "route.ts".to_string()],
			path_excludes: vec!["new".to_string()],
			..Default::default()
		};
		assert_eq!(
			selector.to_string(),
			"prefix app/; contains [memberId], route.ts; excludes new"
		);
	}

	#[test]
	fn test_edit_display() {
		let edit = EditSpec::Rewrite("s/a/b/g".to_string());
		assert_eq!(edit.to_string(), "rewrite s/a/b/g");
	}
}
