//! Directory traversal for lintfix.
//!
//! This module handles:
//! - Collecting source files by extension
//! - Pruning dependency-cache and build-output directories
//! - Turning paths into root-relative keys for rule matching

use crate::error::{LintfixError, Result};
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// What the walker selects and what it skips.
#[derive(Debug, Clone)]
pub struct WalkOptions {
	/// Extensions (without the dot) of candidate files.
	pub extensions: Vec<String>,

	/// Directory names pruned wherever they appear.
	pub exclude_dirs: Vec<String>,
}

impl WalkOptions {
	fn is_excluded(&self, entry: &DirEntry) -> bool {
		entry.depth() > 0
			&& entry.file_type().is_dir()
			&& entry
				.file_name()
				.to_str()
				.is_some_and(|name| self.exclude_dirs.iter().any(|d| d == name))
	}

	fn has_extension(&self, path: &Path) -> bool {
		path.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
	}
}

/// Collect candidate source files under `root`, sorted by file name within
/// each directory.
pub fn collect_files(root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>> {
	if !root.is_dir() {
		return Err(LintfixError::RootNotFound {
			path: root.to_path_buf(),
		});
	}

	let mut files = Vec::new();
	let walker = WalkDir::new(root)
		.sort_by_file_name()
		.into_iter()
		.filter_entry(|entry| {
			let excluded = options.is_excluded(entry);
			if excluded {
				log::debug!("skipping {}", entry.path().display());
			}
			!excluded
		});

	for entry in walker {
		let entry = entry.map_err(|source| LintfixError::WalkFailed {
			root: root.to_path_buf(),
			source,
		})?;

		if entry.file_type().is_file() && options.has_extension(entry.path()) {
			files.push(entry.into_path());
		}
	}

	Ok(files)
}

/// The `/`-separated path of `path` relative to `root`, used for rule
/// matching and reporting.
pub fn path_key(root: &Path, path: &Path) -> String {
	let relative = path.strip_prefix(root).unwrap_or(path);
	relative
		.components()
		.filter_map(|c| match c {
			Component::Normal(part) => Some(part.to_string_lossy()),
			_ => None,
		})
		.collect::<Vec<_>>()
		.join("/")
}
