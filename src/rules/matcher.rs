use crate::config::types::{PathSelector, Rule};
use crate::error::Result;
use crate::rules::rewriter::Edit;

impl PathSelector {
	/// Selector matching every path under `prefix` that ends with `suffix`.
	pub fn scoped(prefix: &str, suffix: &str) -> Self {
		PathSelector {
			path_prefix: Some(prefix.to_string()),
			path_suffix: Some(suffix.to_string()),
			..Default::default()
		}
	}

	/// Selector requiring every fragment to occur in the path.
	pub fn containing(fragments: &[&str]) -> Self {
		PathSelector {
			path_contains: fragments.iter().map(|f| f.to_string()).collect(),
			..Default::default()
		}
	}

	/// Also reject paths containing `fragment`.
	pub fn excluding(mut self, fragment: &str) -> Self {
		self.path_excludes.push(fragment.to_string());
		self
	}

	/// Check a root-relative, `/`-separated path key against this selector.
	pub fn matches(&self, key: &str) -> bool {
		if let Some(ref prefix) = self.path_prefix
			&& !key.starts_with(prefix.as_str())
		{
			return false;
		}

		if let Some(ref suffix) = self.path_suffix
			&& !key.ends_with(suffix.as_str())
		{
			return false;
		}

		self.path_contains.iter().all(|f| key.contains(f.as_str()))
			&& !self.path_excludes.iter().any(|f| key.contains(f.as_str()))
	}
}

/// A compiled rule ready for matching.
#[derive(Debug)]
pub struct CompiledRule {
	/// The original rule.
	pub rule: Rule,

	/// Compiled edits, in application order.
	pub edits: Vec<Edit>,
}

impl CompiledRule {
	/// Validate a rule and compile its edits.
	pub fn compile(rule: &Rule) -> Result<Self> {
		rule.validate()?;

		let edits = rule
			.edits
			.iter()
			.map(Edit::compile)
			.collect::<Result<Vec<_>>>()?;

		Ok(CompiledRule {
			rule: rule.clone(),
			edits,
		})
	}

	pub fn name(&self) -> &str {
		&self.rule.name
	}

	/// Check if this rule applies to the given path key.
	pub fn matches(&self, key: &str) -> bool {
		self.rule.selector.matches(key)
	}

	/// Run every edit over `content`, in order.
	pub fn apply(&self, content: &str) -> String {
		self.edits
			.iter()
			.fold(content.to_string(), |text, edit| edit.apply(&text))
	}
}

/// Compile a list of rules, keeping their order.
pub fn compile_rules(rules: &[Rule]) -> Result<Vec<CompiledRule>> {
	rules.iter().map(CompiledRule::compile).collect()
}

/// Every rule that applies to `key`, in table order.
pub fn matching_rules<'a>(
	rules: &'a [CompiledRule],
	key: &'a str,
) -> impl Iterator<Item = &'a CompiledRule> + 'a {
	rules.iter().filter(move |rule| rule.matches(key))
}
