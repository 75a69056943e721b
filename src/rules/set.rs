use crate::config::types::{PathSelector, Rule};
use crate::error::Result;
use crate::rules::builtin::BuiltinRuleSet;
use crate::rules::matcher::{CompiledRule, compile_rules, matching_rules};

/// An ordered, compiled rule table plus the files it looks at.
#[derive(Debug)]
pub struct RuleSet {
	/// Display name of the table.
	pub name: String,

	/// Files outside every scope selector are skipped. Empty means all.
	pub scope: Vec<PathSelector>,

	/// Rules in application order.
	pub rules: Vec<CompiledRule>,
}

/// Result of running a rule table over one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
	/// Content after every matching rule ran.
	pub content: String,

	/// Names of the rules that changed the content.
	pub applied: Vec<String>,

	/// True iff `content` differs from the original text.
	pub changed: bool,
}

impl RuleSet {
	/// Build a table from a built-in set followed by extra (config) rules.
	///
	/// With `safe_only`, rules marked heuristic are dropped.
	pub fn build(builtin: BuiltinRuleSet, extra: &[Rule], safe_only: bool) -> Result<Self> {
		let mut rules = builtin.rules();
		rules.extend(extra.iter().cloned());

		if safe_only {
			rules.retain(|rule| {
				if rule.heuristic {
					log::debug!("skipping heuristic rule {}", rule.name);
				}
				!rule.heuristic
			});
		}

		Ok(RuleSet {
			name: builtin.as_str().to_string(),
			scope: builtin.scope(),
			rules: compile_rules(&rules)?,
		})
	}

	/// Whether a path key is a candidate for this table at all.
	pub fn in_scope(&self, key: &str) -> bool {
		self.scope.is_empty() || self.scope.iter().any(|s| s.matches(key))
	}

	/// Apply every rule whose selector matches `key`, in table order.
	///
	/// A rule whose text pattern is absent leaves the content untouched.
	pub fn rewrite(&self, key: &str, content: &str) -> Rewrite {
		let mut text = content.to_string();
		let mut applied = Vec::new();

		for rule in matching_rules(&self.rules, key) {
			let next = rule.apply(&text);
			if next != text {
				log::debug!("{key}: applied {}", rule.name());
				applied.push(rule.name().to_string());
				text = next;
			}
		}

		Rewrite {
			changed: text != content,
			content: text,
			applied,
		}
	}
}
