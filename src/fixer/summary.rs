use crate::error::LintfixError;
use std::error::Error;

/// What happened to one visited file.
#[derive(Debug)]
pub enum FileOutcome {
	Unchanged,
	Fixed,
	Failed(LintfixError),
}

impl FileOutcome {
	pub fn is_fixed(&self) -> bool {
		matches!(self, FileOutcome::Fixed)
	}
}

/// Accumulated result of a run, threaded through the per-file pass.
#[derive(Debug, Default)]
pub struct Summary {
	/// Keys of changed files, in traversal order.
	pub fixed: Vec<String>,

	/// Keys of files that could not be processed, with the error text.
	pub failed: Vec<(String, String)>,

	/// Number of files visited whose content did not change.
	pub unchanged: usize,
}

impl Summary {
	/// Fold one file's outcome into the summary.
	pub fn record(mut self, key: String, outcome: FileOutcome) -> Self {
		match outcome {
			FileOutcome::Fixed => self.fixed.push(key),
			FileOutcome::Unchanged => self.unchanged += 1,
			FileOutcome::Failed(e) => self.failed.push((key, error_chain(&e))),
		}
		self
	}

	pub fn has_failures(&self) -> bool {
		!self.failed.is_empty()
	}
}

/// Render an error with its `source()` chain, outermost first.
pub fn error_chain(error: &dyn Error) -> String {
	let mut text = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		text.push_str(": ");
		text.push_str(&cause.to_string());
		source = cause.source();
	}
	text
}
