//! Per-file rewriting for lintfix.
//!
//! This module handles:
//! - Reading and decoding one file, applying the rule table in memory
//! - Writing the file back only when its content changed
//! - Folding per-file outcomes into a run summary

pub mod summary;

pub use summary::{FileOutcome, Summary};

use crate::error::{LintfixError, Result};
use crate::rules::RuleSet;
use crate::walk::{WalkOptions, collect_files, path_key};
use std::path::Path;

/// Switches for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
	/// Compute outcomes without writing anything.
	pub dry_run: bool,

	/// Abort the run on the first file that fails.
	pub fail_fast: bool,
}

/// Rewrite one file in place if any rule changes it.
///
/// Returns whether the content changed. Every rule runs before the single
/// write, so a file is never left half-rewritten by lintfix itself.
pub fn fix_file(path: &Path, key: &str, rules: &RuleSet, dry_run: bool) -> Result<bool> {
	let bytes = std::fs::read(path).map_err(|source| LintfixError::ReadFailed {
		path: path.to_path_buf(),
		source,
	})?;
	let content = String::from_utf8(bytes).map_err(|source| LintfixError::DecodeFailed {
		path: path.to_path_buf(),
		source,
	})?;

	let rewrite = rules.rewrite(key, &content);
	if !rewrite.changed {
		return Ok(false);
	}

	if !dry_run {
		std::fs::write(path, rewrite.content).map_err(|source| LintfixError::WriteFailed {
			path: path.to_path_buf(),
			source,
		})?;
	}

	Ok(true)
}

/// Walk `root` and run the rule table over every in-scope file.
///
/// `on_outcome` sees each file's key and outcome as soon as it is known, in
/// traversal order. Per-file failures are recorded and the run continues,
/// unless `fail_fast` is set.
pub fn fix_tree<F>(
	root: &Path,
	walk: &WalkOptions,
	rules: &RuleSet,
	options: FixOptions,
	mut on_outcome: F,
) -> Result<Summary>
where
	F: FnMut(&str, &FileOutcome),
{
	let files = collect_files(root, walk)?;
	log::debug!("{} candidate files under {}", files.len(), root.display());

	files
		.iter()
		.map(|path| (path, path_key(root, path)))
		.filter(|(_, key)| rules.in_scope(key))
		.try_fold(Summary::default(), |summary, (path, key)| {
			let outcome = match fix_file(path, &key, rules, options.dry_run) {
				Ok(true) => FileOutcome::Fixed,
				Ok(false) => FileOutcome::Unchanged,
				Err(e) if options.fail_fast => return Err(e),
				Err(e) => {
					log::debug!("{key}: {e}");
					FileOutcome::Failed(e)
				}
			};
			on_outcome(&key, &outcome);
			Ok(summary.record(key, outcome))
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::BuiltinRuleSet;
	use std::fs;

	const MEMBER_ROUTE: &str = "app/api/organizations/[orgId]/members/[memberId]/route.ts";

	fn walk_options() -> WalkOptions {
		WalkOptions {
			extensions: vec!["ts".to_string(), "tsx".to_string()],
			exclude_dirs: vec!["node_modules".to_string(), ".next".to_string()],
		}
	}

	fn write(root: &Path, rel: &str, content: &[u8]) {
		let path = root.join(rel);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, content).unwrap();
	}

	fn warnings() -> RuleSet {
		RuleSet::build(BuiltinRuleSet::Warnings, &[], false).unwrap()
	}

	#[test]
	fn test_fix_file_removes_line_and_writes() {
		let dir = tempfile::tempdir().unwrap();
		write(dir.path(), MEMBER_ROUTE, b"import {\n  can,\n  isRole,\n} from 'x';\n");
		let path = dir.path().join(MEMBER_ROUTE);

		assert!(fix_file(&path, MEMBER_ROUTE, &warnings(), false).unwrap());
		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"import {\n  can,\n} from 'x';\n"
		);
		assert!(!fix_file(&path, MEMBER_ROUTE, &warnings(), false).unwrap());
	}

	#[test]
	fn test_fix_file_dry_run_leaves_file() {
		let dir = tempfile::tempdir().unwrap();
		let original = "import {\n  isRole,\n} from 'x';\n";
		write(dir.path(), MEMBER_ROUTE, original.as_bytes());
		let path = dir.path().join(MEMBER_ROUTE);

		assert!(fix_file(&path, MEMBER_ROUTE, &warnings(), true).unwrap());
		assert_eq!(fs::read_to_string(&path).unwrap(), original);
	}

	#[test]
	fn test_fix_file_rejects_invalid_utf8() {
		let dir = tempfile::tempdir().unwrap();
		write(dir.path(), "lib/bad.ts", &[0x66, 0x6f, 0xff, 0xfe]);

		let result = fix_file(&dir.path().join("lib/bad.ts"), "lib/bad.ts", &warnings(), false);
		assert!(matches!(result, Err(LintfixError::DecodeFailed { .. })));
	}

	#[test]
	fn test_fix_tree_counts_only_changed_files() {
		let dir = tempfile::tempdir().unwrap();
		write(dir.path(), MEMBER_ROUTE, b"import {\n  isRole,\n} from 'x';\n");
		write(dir.path(), "app/referrals/page.tsx", b"let a: any = 1;\n");
		write(dir.path(), "app/about/page.tsx", b"let a: any = 1;\n");
		write(dir.path(), "node_modules/x/referrals/page.tsx", b"let a: any = 1;\n");

		let mut seen = Vec::new();
		let summary = fix_tree(
			dir.path(),
			&walk_options(),
			&warnings(),
			FixOptions::default(),
			|key, outcome| seen.push((key.to_string(), outcome.is_fixed())),
		)
		.unwrap();

		assert_eq!(summary.fixed, vec![MEMBER_ROUTE, "app/referrals/page.tsx"]);
		assert_eq!(summary.unchanged, 1);
		assert!(summary.failed.is_empty());
		assert_eq!(seen.len(), 3);
		assert_eq!(
			fs::read_to_string(dir.path().join("node_modules/x/referrals/page.tsx")).unwrap(),
			"let a: any = 1;\n"
		);
	}

	#[test]
	fn test_fix_tree_isolates_failures() {
		let dir = tempfile::tempdir().unwrap();
		write(dir.path(), "app/a/bad.ts", &[0xff, 0xfe]);
		write(dir.path(), "app/referrals/page.tsx", b"let a: any = 1;\n");

		let summary = fix_tree(
			dir.path(),
			&walk_options(),
			&warnings(),
			FixOptions::default(),
			|_, _| {},
		)
		.unwrap();

		assert_eq!(summary.fixed, vec!["app/referrals/page.tsx"]);
		assert_eq!(summary.failed.len(), 1);
		assert_eq!(summary.failed[0].0, "app/a/bad.ts");
		assert!(summary.has_failures());
	}

	#[test]
	fn test_fix_tree_fail_fast_aborts() {
		let dir = tempfile::tempdir().unwrap();
		write(dir.path(), "app/a/bad.ts", &[0xff, 0xfe]);
		write(dir.path(), "app/referrals/page.tsx", b"let a: any = 1;\n");

		let options = FixOptions {
			fail_fast: true,
			..Default::default()
		};
		let result = fix_tree(dir.path(), &walk_options(), &warnings(), options, |_, _| {});
		assert!(matches!(result, Err(LintfixError::DecodeFailed { .. })));
		assert_eq!(
			fs::read_to_string(dir.path().join("app/referrals/page.tsx")).unwrap(),
			"let a: any = 1;\n"
		);
	}

	#[test]
	fn test_fix_tree_respects_rule_set_scope() {
		let dir = tempfile::tempdir().unwrap();
		let handler = b"export async function GET(request: Request) {}\n";
		write(dir.path(), "app/api/health/route.ts", handler);
		write(dir.path(), "lib/handler.ts", handler);

		let eslint = RuleSet::build(BuiltinRuleSet::Eslint, &[], false).unwrap();
		let summary =
			fix_tree(dir.path(), &walk_options(), &eslint, FixOptions::default(), |_, _| {})
				.unwrap();

		assert_eq!(summary.fixed, vec!["app/api/health/route.ts"]);
		assert_eq!(summary.unchanged, 0);
		assert_eq!(fs::read(dir.path().join("lib/handler.ts")).unwrap(), handler);
	}
}
