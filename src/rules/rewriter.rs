use crate::analysis::{remove_blocks, rename_unused_catch};
use crate::config::types::EditSpec;
use crate::error::{LintfixError, Result};
use regex::Regex;

/// Parsed substitution command (sed-like syntax).
#[derive(Debug)]
pub struct Substitution {
	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement string.
	pub replacement: String,

	/// Whether to replace all occurrences (global flag).
	pub global: bool,
}

impl Substitution {
	/// Parse a substitution string in sed-like format: "s/pattern/replacement/" or "s/pattern/replacement/g"
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = |reason: &str| LintfixError::InvalidSubstitution {
			input: input.to_string(),
			reason: reason.to_string(),
		};

		let mut chars = input.chars();
		if chars.next() != Some('s') {
			return Err(invalid("substitution must start with 's'"));
		}

		// Get the delimiter (character after 's')
		let delimiter = chars.next().ok_or_else(|| invalid("substitution too short"))?;
		if delimiter.is_alphanumeric() || delimiter == '\\' || delimiter.is_whitespace() {
			return Err(invalid("delimiter must be a punctuation character"));
		}

		let parts = split_by_delimiter(chars.as_str(), delimiter);
		if parts.len() < 3 {
			return Err(invalid("substitution must have pattern, replacement and closing delimiter"));
		}
		if parts.len() > 3 {
			return Err(invalid("unescaped delimiter in substitution"));
		}

		let pattern_str = &parts[0];
		let replacement = unescape_replacement(&parts[1]);
		let flags = &parts[2];

		if let Some(flag) = flags.chars().find(|c| *c != 'g') {
			return Err(invalid(&format!("unknown flag '{flag}'")));
		}
		let global = flags.contains('g');

		let pattern = Regex::new(pattern_str).map_err(|source| LintfixError::InvalidRegex {
			pattern: pattern_str.to_string(),
			source,
		})?;

		Ok(Substitution {
			pattern,
			replacement,
			global,
		})
	}

	/// Apply this substitution to a string.
	pub fn apply(&self, input: &str) -> String {
		if self.global {
			self.pattern
				.replace_all(input, self.replacement.as_str())
				.into_owned()
		} else {
			self.pattern
				.replace(input, self.replacement.as_str())
				.into_owned()
		}
	}
}

/// Split a string by a delimiter, respecting backslash escapes.
fn split_by_delimiter(input: &str, delimiter: char) -> Vec<String> {
	let mut parts = Vec::new();
	let mut current = String::new();
	let mut chars = input.chars().peekable();
	let mut escape_next = false;

	while let Some(c) = chars.next() {
		if escape_next {
			current.push(c);
			escape_next = false;
		} else if c == '\\' {
			// Check if we're escaping the delimiter
			if chars.peek() == Some(&delimiter) {
				escape_next = true;
			} else {
				current.push(c);
				if let Some(next) = chars.next() {
					current.push(next);
				}
			}
		} else if c == delimiter {
			parts.push(current);
			current = String::new();
		} else {
			current.push(c);
		}
	}

	// Add the last part
	parts.push(current);

	parts
}

/// Turn `\n`, `\t` and `\\` in a replacement into the characters they name.
fn unescape_replacement(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut chars = raw.chars();

	while let Some(c) = chars.next() {
		if c != '\\' {
			out.push(c);
			continue;
		}
		match chars.next() {
			Some('n') => out.push('\n'),
			Some('t') => out.push('\t'),
			Some('\\') => out.push('\\'),
			Some(other) => {
				out.push('\\');
				out.push(other);
			}
			None => out.push('\\'),
		}
	}

	out
}

/// A compiled text transformation.
#[derive(Debug)]
pub enum Edit {
	Replace { from: String, to: String },
	Rewrite(Substitution),
	RemoveBlock(Vec<String>),
	RenameUnusedCatch(String),
}

impl Edit {
	/// Compile an edit from its declarative form.
	pub fn compile(spec: &EditSpec) -> Result<Self> {
		Ok(match spec {
			EditSpec::Remove(literal) => Edit::Replace {
				from: literal.clone(),
				to: String::new(),
			},
			EditSpec::Replace { from, to } => Edit::Replace {
				from: from.clone(),
				to: to.clone(),
			},
			EditSpec::Rewrite(sub) => Edit::Rewrite(Substitution::parse(sub)?),
			EditSpec::RemoveBlock(markers) => Edit::RemoveBlock(markers.clone()),
			EditSpec::RenameUnusedCatch(binding) => Edit::RenameUnusedCatch(binding.clone()),
		})
	}

	/// Apply this edit to a file's full content.
	pub fn apply(&self, content: &str) -> String {
		match self {
			Edit::Replace { from, to } => content.replace(from.as_str(), to),
			Edit::Rewrite(sub) => sub.apply(content),
			Edit::RemoveBlock(markers) => remove_blocks(content, markers),
			Edit::RenameUnusedCatch(binding) => rename_unused_catch(content, binding),
		}
	}
}
