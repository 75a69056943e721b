//! Built-in rule tables.
//!
//! Each table is plain data: adding or removing a rule never touches the
//! rewrite loop.

use crate::config::types::{EditSpec, PathSelector, Rule};
use std::fmt;
use std::str::FromStr;

/// The rule tables shipped with lintfix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinRuleSet {
	/// Path-keyed cleanup of individual warnings across the whole tree.
	Warnings,
	/// Scoped pass over API routes, pages and components.
	Eslint,
	/// No built-in rules; only rules from the config file.
	Custom,
}

impl BuiltinRuleSet {
	pub const ALL: [BuiltinRuleSet; 3] = [
		BuiltinRuleSet::Warnings,
		BuiltinRuleSet::Eslint,
		BuiltinRuleSet::Custom,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			BuiltinRuleSet::Warnings => "warnings",
			BuiltinRuleSet::Eslint => "eslint",
			BuiltinRuleSet::Custom => "custom",
		}
	}

	/// Path selectors limiting which files the set looks at. Empty means all.
	pub fn scope(&self) -> Vec<PathSelector> {
		match self {
			BuiltinRuleSet::Eslint => vec![
				PathSelector::scoped("app/api/", ".ts"),
				PathSelector::scoped("app/", "/page.tsx"),
				PathSelector::scoped("components/", ".tsx"),
			],
			BuiltinRuleSet::Warnings | BuiltinRuleSet::Custom => Vec::new(),
		}
	}

	/// The set's rules, in application order.
	pub fn rules(&self) -> Vec<Rule> {
		match self {
			BuiltinRuleSet::Warnings => warnings_rules(),
			BuiltinRuleSet::Eslint => eslint_rules(),
			BuiltinRuleSet::Custom => Vec::new(),
		}
	}
}

impl fmt::Display for BuiltinRuleSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for BuiltinRuleSet {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		BuiltinRuleSet::ALL
			.into_iter()
			.find(|set| set.as_str() == s)
			.ok_or_else(|| format!("unknown rule set: {s}"))
	}
}

fn rule(name: &str, description: &str, selector: PathSelector, edits: Vec<EditSpec>) -> Rule {
	Rule {
		name: name.to_string(),
		description: Some(description.to_string()),
		heuristic: false,
		selector,
		edits,
		..Default::default()
	}
}

fn heuristic(mut rule: Rule) -> Rule {
	rule.heuristic = true;
	rule
}

fn remove(literal: &str) -> EditSpec {
	EditSpec::Remove(literal.to_string())
}

fn replace(from: &str, to: &str) -> EditSpec {
	EditSpec::Replace {
		from: from.to_string(),
		to: to.to_string(),
	}
}

fn rewrite(sub: &str) -> EditSpec {
	EditSpec::Rewrite(sub.to_string())
}

fn warnings_rules() -> Vec<Rule> {
	vec![
		rule(
			"member-route-isRole",
			"unused isRole import in the member route",
			PathSelector::containing(&["[memberId]", "route.ts"]),
			vec![
				remove("  isRole,\n"),
				replace(", isRole,", ","),
				remove("isRole,"),
			],
		),
		rule(
			"new-program-time-since",
			"unused getTimeSinceAdded helper",
			PathSelector::containing(&["programs/new/page.tsx"]),
			vec![EditSpec::RemoveBlock(vec![
				"function getTimeSinceAdded".to_string(),
				"const getTimeSinceAdded".to_string(),
			])],
		),
		// These handlers may still be referenced from JSX.
		heuristic(rule(
			"programs-page-handlers",
			"unused favorite/comparison/click handlers",
			PathSelector::containing(&["programs/page.tsx"]).excluding("new"),
			vec![
				rewrite(r"s/\n  async function toggleFavorite\(/\n  async function _toggleFavorite(/g"),
				rewrite(r"s/\n  function toggleComparison\(/\n  function _toggleComparison(/g"),
				rewrite(r"s/\n  async function trackClick\(/\n  async function _trackClick(/g"),
			],
		)),
		rule(
			"category-chart-legend",
			"unused Legend import",
			PathSelector::containing(&["CategoryChart.tsx"]),
			vec![
				rewrite(r"s/, Legend([,\s])/${1}/g"),
				rewrite(r"s/Legend,\s*//g"),
			],
		),
		rule(
			"referrals-any",
			"explicit any annotations",
			PathSelector::containing(&["referrals/page.tsx"]),
			vec![rewrite(r"s/: any(\W)/: unknown${1}/g")],
		),
		rule(
			"tour-imports",
			"unused isValidRole and createClient imports",
			PathSelector::containing(&["tour.ts"]),
			vec![
				rewrite(r"s/, isValidRole([,\s])/${1}/g"),
				rewrite(r"s/isValidRole,\s*//g"),
				rewrite(r"s#import.*createClient.*from.*supabase/server.*\n##g"),
			],
		),
		rule(
			"rate-limit-options",
			"unused rateLimit options parameter",
			PathSelector::containing(&["rate-limit.ts"]),
			vec![rewrite(
				r"s/function rateLimit\(options: RateLimitOptions/function rateLimit(_options: RateLimitOptions/g",
			)],
		),
		rule(
			"programs-route-min-rating",
			"unused minRating variable",
			PathSelector::containing(&["app/api/programs/route.ts"]),
			vec![rewrite(r"s/\n\s*const minRating = .*;\n/\n/g")],
		),
		rule(
			"error-boundary-catch",
			"unused catch binding in ErrorBoundary",
			PathSelector::containing(&["ErrorBoundary.tsx"]),
			vec![replace("} catch (error) {", "} catch (_error) {")],
		),
		rule(
			"test-unused-locals",
			"unused locals in tests",
			PathSelector::containing(&["tests/"]),
			vec![rewrite(
				r"s/\n(\s+)const (commissionType|category|pattern) = /\n${1}const _${2} = /g",
			)],
		),
	]
}

fn eslint_rules() -> Vec<Rule> {
	vec![
		heuristic(rule(
			"unused-request-param",
			"request parameter of route handlers",
			PathSelector::default(),
			vec![rewrite(
				r"s/export async function (POST|GET|PUT|DELETE|PATCH)\(request: Request\)/export async function ${1}(_request: Request)/g",
			)],
		)),
		rule(
			"unused-catch-error",
			"catch bindings the catch body never uses",
			PathSelector::default(),
			vec![EditSpec::RenameUnusedCatch("error".to_string())],
		),
		rule(
			"legend-destructure",
			"unused Legend destructuring",
			PathSelector::default(),
			vec![rewrite(r"s/const \{ Legend \}/const { Legend: _Legend }/g")],
		),
		// Comments out the whole import statement, including any other names.
		heuristic(rule(
			"isRole-import",
			"unused isRole import",
			PathSelector::default(),
			vec![rewrite(r"s#import.*isRole.*from#// Unused import: isRole#g")],
		)),
	]
}
